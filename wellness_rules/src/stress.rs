//! Stress levels attached to knowledge entries and assistant replies.

use serde::{Deserialize, Serialize};

/// How much tension a message or knowledge entry signals.
///
/// Levels are ordered so callers can threshold (e.g. show a calming prompt
/// for anything above [`StressLevel::Low`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    /// Calm or neutral. The default when an entry does not specify a level.
    #[default]
    Low,
    /// Noticeable tension worth a gentle nudge.
    Medium,
    /// Acute distress; the UI should surface grounding actions.
    High,
}

impl StressLevel {
    /// String form matching the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Medium => "medium",
            StressLevel::High => "high",
        }
    }

    /// Whether this level warrants attention beyond a plain reply.
    pub fn is_elevated(&self) -> bool {
        *self > StressLevel::Low
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
