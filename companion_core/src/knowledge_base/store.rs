//! The trainable knowledge store - load, train, persist-on-change.

use thiserror::Error;
use tracing::{debug, warn};

use crate::storage::{StorageError, StorageSlot, KNOWLEDGE_SLOT_KEY};

use super::{default_knowledge_base, ItemId, KnowledgeItem};

/// Minimum persisted item count for a save to be considered current.
///
/// Earlier releases shipped ~24 default entries; a save smaller than this is
/// taken as predating the bundled set and is replaced by it wholesale. The
/// persisted form carries no schema version field, so the length stands in
/// for one.
pub const FRESHNESS_THRESHOLD: usize = 30;

/// Validation failures when training a new item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainingError {
    #[error("trigger phrase must not be blank")]
    BlankTrigger,

    #[error("response text must not be blank")]
    BlankResponse,
}

/// The ordered, trainable collection of knowledge items.
///
/// Constructed once per session via [`KnowledgeStore::load`] and owned by the
/// conversational core - never ambient global state. Insertion order is
/// preserved for display; matching order is decided by the match engine.
/// The store is never empty: loading always falls back to the bundled
/// defaults.
#[derive(Debug)]
pub struct KnowledgeStore<S: StorageSlot> {
    items: Vec<KnowledgeItem>,
    slot: S,
}

impl<S: StorageSlot> KnowledgeStore<S> {
    /// Load the store from a storage slot.
    ///
    /// Falls back to [`default_knowledge_base`] when the slot is empty, holds
    /// unparseable data, or holds fewer than [`FRESHNESS_THRESHOLD`] items
    /// (a stale save from before the bundled set grew). The fallback replaces
    /// the save outright; undersized custom items are not merged. Never
    /// fails.
    pub fn load(slot: S) -> Self {
        let items = match slot.read(KNOWLEDGE_SLOT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<KnowledgeItem>>(&raw) {
                Ok(saved) if saved.len() >= FRESHNESS_THRESHOLD => {
                    debug!(count = saved.len(), "loaded persisted knowledge base");
                    saved
                }
                Ok(saved) => {
                    debug!(
                        count = saved.len(),
                        threshold = FRESHNESS_THRESHOLD,
                        "persisted knowledge base predates bundled set, using defaults"
                    );
                    default_knowledge_base()
                }
                Err(e) => {
                    warn!(error = %e, "persisted knowledge base is malformed, using defaults");
                    default_knowledge_base()
                }
            },
            Ok(None) => default_knowledge_base(),
            Err(e) => {
                warn!(error = %e, "knowledge base slot unreadable, using defaults");
                default_knowledge_base()
            }
        };

        Self { items, slot }
    }

    /// Create a store directly from items, bypassing the slot read.
    ///
    /// Useful for tests and for hosts that manage persistence themselves.
    pub fn with_items(items: Vec<KnowledgeItem>, slot: S) -> Self {
        Self { items, slot }
    }

    /// Train a new trigger->response pair.
    ///
    /// Inputs are trimmed; blank inputs are rejected and leave the store
    /// untouched. On success the item is appended, the store is persisted,
    /// and the created item is returned so the caller can show a
    /// confirmation. A persistence failure is logged but does not undo the
    /// in-memory addition; the next successful mutation retries the write.
    pub fn add_item(
        &mut self,
        trigger: &str,
        response: &str,
    ) -> Result<&KnowledgeItem, TrainingError> {
        let trigger = trigger.trim();
        let response = response.trim();

        if trigger.is_empty() {
            return Err(TrainingError::BlankTrigger);
        }
        if response.is_empty() {
            return Err(TrainingError::BlankResponse);
        }

        self.items.push(KnowledgeItem::new(trigger, response));
        let index = self.items.len() - 1;

        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist knowledge base, keeping in-memory state");
        }

        Ok(&self.items[index])
    }

    /// Serialize the full store into its slot. Idempotent.
    pub fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.items)?;
        self.slot.write(KNOWLEDGE_SLOT_KEY, &raw)
    }

    /// Get an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&KnowledgeItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[KnowledgeItem] {
        &self.items
    }

    /// Number of items in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty. Always false after [`KnowledgeStore::load`].
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;

    fn items_json(count: usize) -> String {
        let items: Vec<KnowledgeItem> = (0..count)
            .map(|i| KnowledgeItem::new(format!("trigger {i}"), format!("response {i}")))
            .collect();
        serde_json::to_string(&items).unwrap()
    }

    #[test]
    fn test_load_empty_slot_uses_defaults() {
        let store = KnowledgeStore::load(MemorySlot::new());
        assert_eq!(store.len(), default_knowledge_base().len());
        assert!(!store.is_empty());
    }

    #[test]
    fn test_load_small_save_uses_defaults() {
        let slot = MemorySlot::with_value(KNOWLEDGE_SLOT_KEY, &items_json(5));
        let store = KnowledgeStore::load(slot);
        assert_eq!(store.len(), default_knowledge_base().len());
    }

    #[test]
    fn test_load_current_save_keeps_items() {
        let slot = MemorySlot::with_value(KNOWLEDGE_SLOT_KEY, &items_json(40));
        let store = KnowledgeStore::load(slot);
        assert_eq!(store.len(), 40);
        assert_eq!(store.items()[0].trigger, "trigger 0");
    }

    #[test]
    fn test_load_malformed_save_uses_defaults() {
        let slot = MemorySlot::with_value(KNOWLEDGE_SLOT_KEY, "{not json[");
        let store = KnowledgeStore::load(slot);
        assert_eq!(store.len(), default_knowledge_base().len());
    }

    #[test]
    fn test_add_item_trims_and_appends() {
        let mut store = KnowledgeStore::load(MemorySlot::new());
        let before = store.len();

        let item = store.add_item("  overthinking  ", "  Let's slow down together. ").unwrap();
        assert_eq!(item.trigger, "overthinking");
        assert_eq!(item.response, "Let's slow down together.");
        assert_eq!(store.len(), before + 1);

        // Insertion order: the trained item is last.
        assert_eq!(store.items().last().unwrap().trigger, "overthinking");
    }

    #[test]
    fn test_add_item_rejects_blank_inputs() {
        let mut store = KnowledgeStore::load(MemorySlot::new());
        let before = store.len();

        assert_eq!(store.add_item("", "x").unwrap_err(), TrainingError::BlankTrigger);
        assert_eq!(store.add_item("   ", "x").unwrap_err(), TrainingError::BlankTrigger);
        assert_eq!(store.add_item("x", "").unwrap_err(), TrainingError::BlankResponse);
        assert_eq!(store.add_item("x", "   ").unwrap_err(), TrainingError::BlankResponse);
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_add_item_persists() {
        let mut store = KnowledgeStore::load(MemorySlot::new());
        store.add_item("overtime", "Your rest matters too.").unwrap();

        let raw = store.slot.read(KNOWLEDGE_SLOT_KEY).unwrap().unwrap();
        let saved: Vec<KnowledgeItem> = serde_json::from_str(&raw).unwrap();
        assert!(saved.iter().any(|item| item.trigger == "overtime"));
    }

    #[test]
    fn test_persisted_save_survives_reload() {
        let slot = MemorySlot::new();
        let mut store = KnowledgeStore::load(slot);
        store.add_item("journaling", "Writing it down helps.").unwrap();
        let raw = store.slot.read(KNOWLEDGE_SLOT_KEY).unwrap().unwrap();

        // A fresh session sees the trained item (count is above threshold).
        let reloaded = KnowledgeStore::load(MemorySlot::with_value(KNOWLEDGE_SLOT_KEY, &raw));
        assert!(reloaded.items().iter().any(|item| item.trigger == "journaling"));
    }

    #[test]
    fn test_persistence_failure_is_non_fatal() {
        let slot = MemorySlot::new();
        slot.fail_writes(true);
        let mut store = KnowledgeStore::load(slot);
        let before = store.len();

        // The write fails, but the item still lands in memory.
        let result = store.add_item("quota", "Still here for you.");
        assert!(result.is_ok());
        assert_eq!(store.len(), before + 1);

        // Once storage recovers, the next mutation persists everything.
        store.slot.fail_writes(false);
        store.add_item("retry", "Saved this time.").unwrap();
        let raw = store.slot.read(KNOWLEDGE_SLOT_KEY).unwrap().unwrap();
        let saved: Vec<KnowledgeItem> = serde_json::from_str(&raw).unwrap();
        assert!(saved.iter().any(|item| item.trigger == "quota"));
        assert!(saved.iter().any(|item| item.trigger == "retry"));
    }

    #[test]
    fn test_get_by_id() {
        let mut store = KnowledgeStore::load(MemorySlot::new());
        let id = store.add_item("stretch", "A good stretch resets the body.").unwrap().id.clone();

        assert_eq!(store.get(&id).unwrap().trigger, "stretch");
        assert!(store.get(&ItemId::new()).is_none());
    }
}
