//! Match Engine - selects the best knowledge item for a piece of user text.
//!
//! The algorithm is a deliberately explainable longest-trigger-wins substring
//! search:
//! 1. **Normalize**: Lowercase the input; blank input never matches
//! 2. **Rank**: Order items by trigger length descending (stable, so ties
//!    keep store order) - the most specific phrase wins
//! 3. **Scan**: First item whose lowercased trigger is contained in the
//!    input is the match
//!
//! No tokenization, stemming, or fuzzy scoring. At tens of items with short
//! phrases the O(items x trigger length) scan needs no index.

use tracing::debug;

use crate::knowledge_base::{KnowledgeItem, KnowledgeStore};
use crate::storage::StorageSlot;

/// Outcome of matching user text against the knowledge store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchResult<'a> {
    /// The most specific item whose trigger occurs in the input.
    Matched(&'a KnowledgeItem),
    /// Nothing in the store applies; the composer decides the fallback.
    Unmatched,
}

impl<'a> MatchResult<'a> {
    /// The matched item, if any.
    pub fn item(&self) -> Option<&'a KnowledgeItem> {
        match *self {
            MatchResult::Matched(item) => Some(item),
            MatchResult::Unmatched => None,
        }
    }

    /// Whether a knowledge item was found.
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }
}

/// The matching engine. Stateless; a pure function of input and store.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    /// Create a new match engine.
    pub fn new() -> Self {
        Self
    }

    /// Find the best-matching item for `input`, or [`MatchResult::Unmatched`].
    ///
    /// Reads the store but never mutates it. Calling twice with the same
    /// input and an unchanged store returns the same result.
    pub fn find_match<'a, S: StorageSlot>(
        &self,
        input: &str,
        store: &'a KnowledgeStore<S>,
    ) -> MatchResult<'a> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return MatchResult::Unmatched;
        }

        // Longest trigger first; stable sort keeps store order on ties.
        let mut ranked: Vec<&KnowledgeItem> = store.items().iter().collect();
        ranked.sort_by(|a, b| b.trigger.len().cmp(&a.trigger.len()));

        match ranked.into_iter().find(|item| item.trigger_matches(&normalized)) {
            Some(item) => {
                debug!(item = %item.id, trigger = %item.trigger, "matched knowledge item");
                MatchResult::Matched(item)
            }
            None => MatchResult::Unmatched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;

    fn store_of(items: Vec<KnowledgeItem>) -> KnowledgeStore<MemorySlot> {
        KnowledgeStore::with_items(items, MemorySlot::new())
    }

    #[test]
    fn test_substring_containment() {
        let store = store_of(vec![KnowledgeItem::new("anxious", "Let's breathe.")]);
        let engine = MatchEngine::new();

        let result = engine.find_match("I feel really anxious today", &store);
        assert_eq!(result.item().unwrap().response, "Let's breathe.");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let store = store_of(vec![KnowledgeItem::new("Good Morning", "Morning!")]);
        let engine = MatchEngine::new();

        assert!(engine.find_match("GOOD MORNING to you", &store).is_match());
    }

    #[test]
    fn test_longest_trigger_wins() {
        let store = store_of(vec![
            KnowledgeItem::new("sad", "Short trigger."),
            KnowledgeItem::new("i feel very sad", "Long trigger."),
        ]);
        let engine = MatchEngine::new();

        let result = engine.find_match("today i feel very sad indeed", &store);
        assert_eq!(result.item().unwrap().response, "Long trigger.");

        // The short trigger still wins when only it is present.
        let result = engine.find_match("just sad", &store);
        assert_eq!(result.item().unwrap().response, "Short trigger.");
    }

    #[test]
    fn test_length_ties_keep_store_order() {
        let store = store_of(vec![
            KnowledgeItem::new("rest", "First in store."),
            KnowledgeItem::new("walk", "Second in store."),
        ]);
        let engine = MatchEngine::new();

        let result = engine.find_match("rest then walk", &store);
        assert_eq!(result.item().unwrap().response, "First in store.");
    }

    #[test]
    fn test_blank_input_never_matches() {
        let store = store_of(vec![KnowledgeItem::new("hello", "Hi!")]);
        let engine = MatchEngine::new();

        assert_eq!(engine.find_match("", &store), MatchResult::Unmatched);
        assert_eq!(engine.find_match("   ", &store), MatchResult::Unmatched);
    }

    #[test]
    fn test_no_trigger_in_input() {
        let store = store_of(vec![KnowledgeItem::new("hello", "Hi!")]);
        let engine = MatchEngine::new();

        assert_eq!(engine.find_match("asdkjasd", &store), MatchResult::Unmatched);
    }

    #[test]
    fn test_match_is_idempotent() {
        let store = store_of(vec![
            KnowledgeItem::new("tired", "Rest up."),
            KnowledgeItem::new("so tired", "Really rest up."),
        ]);
        let engine = MatchEngine::new();

        let first = engine.find_match("I'm so tired", &store);
        let second = engine.find_match("I'm so tired", &store);
        assert_eq!(first, second);
    }
}
