//! Response Composer - turns a match result into a displayable reply payload
//! and resolves action labels to navigation targets.

use rand::Rng;
use serde::{Deserialize, Serialize};
use wellness_rules::{NavigationTarget, StressLevel};

use crate::match_engine::MatchResult;

/// Bare greetings that get a friendly reply even when absent from the
/// knowledge base, instead of falling through to the generic apology.
const BARE_GREETINGS: [&str; 3] = ["hi", "hello", "hey"];

/// Reply for a bare greeting that nothing in the store matched.
const GREETING_REPLY: &str = "Hello! I'm listening.";

/// Fallback phrasings picked at uniform random when nothing matches.
/// The variety is purely cosmetic.
const FALLBACK_POOL: [&str; 4] = [
    "I'm still learning about that. You can teach me in 'Training Mode'!",
    "I'm not sure I understand. Could you rephrase that?",
    "That's new to me. I'd love to learn more about it in Training Mode.",
    "I'm here to listen, even if I don't have the perfect answer yet.",
];

/// Keyword families for action resolution, checked in priority order.
/// First family with a keyword contained in the label wins.
const KEYWORD_FAMILIES: [(&[&str], NavigationTarget); 6] = [
    (&["detox", "breath", "meditation", "calm"], NavigationTarget::Detox),
    (&["dashboard", "stats", "mood"], NavigationTarget::Dashboard),
    (&["wellbeing", "screen", "usage", "phone"], NavigationTarget::Wellbeing),
    (&["fitness", "step", "heart", "walk", "exercise"], NavigationTarget::Fitness),
    (&["health", "analysis", "symptom"], NavigationTarget::Health),
    (&["persona", "profile"], NavigationTarget::Persona),
];

/// The externally visible content of an assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyPayload {
    /// The reply text, shown verbatim.
    pub text: String,

    /// Stress signal for the UI's tension indicators.
    pub stress_level: StressLevel,

    /// Suggested action labels, in the order the item listed them.
    pub actions: Vec<String>,
}

/// Composes reply payloads from match results.
///
/// Stateless apart from the caller-supplied random source, which is injected
/// per call so tests can pass a seeded generator and assert the exact
/// fallback phrase.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseComposer;

impl ResponseComposer {
    /// Create a new composer.
    pub fn new() -> Self {
        Self
    }

    /// Compose the reply payload for a match result.
    ///
    /// A match yields the item's response verbatim with its stress level and
    /// actions. No match yields either the bare-greeting courtesy reply or a
    /// random phrase from the fallback pool - the conversation never stalls.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        result: &MatchResult<'_>,
        input: &str,
        rng: &mut R,
    ) -> ReplyPayload {
        match result {
            MatchResult::Matched(item) => ReplyPayload {
                text: item.response.clone(),
                stress_level: item.stress_level,
                actions: item.actions.clone(),
            },
            MatchResult::Unmatched => self.compose_fallback(input, rng),
        }
    }

    fn compose_fallback<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> ReplyPayload {
        let normalized = input.trim().to_lowercase();

        let text = if BARE_GREETINGS.contains(&normalized.as_str()) {
            GREETING_REPLY.to_string()
        } else {
            FALLBACK_POOL[rng.gen_range(0..FALLBACK_POOL.len())].to_string()
        };

        ReplyPayload {
            text,
            stress_level: StressLevel::Low,
            actions: Vec::new(),
        }
    }
}

/// Resolve an action label to the view it should open.
///
/// Lowercases the label and checks each keyword family in priority order.
/// Returns `None` for labels no family claims; the UI renders those actions
/// inert rather than dropping them.
pub fn resolve_navigation_target(label: &str) -> Option<NavigationTarget> {
    let lower = label.to_lowercase();

    KEYWORD_FAMILIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, target)| *target)
}
