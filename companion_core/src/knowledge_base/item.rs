//! Knowledge item definitions - entries in the trainable knowledge base.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wellness_rules::StressLevel;

/// Unique identifier for knowledge items.
///
/// Bundled defaults carry short literal ids (`g01`, `e04`, ...); items
/// created through training get a fresh UUID. Ids are opaque and never
/// reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an item ID from a literal (used for the bundled defaults).
    pub fn literal(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One trainable stimulus-response unit.
///
/// The persisted field names (`question`/`answer`) predate this crate and are
/// kept for compatibility with existing saves: `question` is the trigger
/// phrase matched as a case-insensitive substring of the user's message, and
/// `answer` is the reply returned verbatim on a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub id: ItemId,

    /// The phrase to look for inside the user's message.
    #[serde(rename = "question")]
    pub trigger: String,

    /// The reply returned when the trigger matches.
    #[serde(rename = "answer")]
    pub response: String,

    /// Stress signal attached to the reply. Absent in older saves, so it
    /// defaults to low.
    #[serde(rename = "stressLevel", default)]
    pub stress_level: StressLevel,

    /// Human-readable action labels suggested alongside the reply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}

impl KnowledgeItem {
    /// Create a new item with a fresh id, low stress, and no actions.
    pub fn new(trigger: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            trigger: trigger.into(),
            response: response.into(),
            stress_level: StressLevel::Low,
            actions: Vec::new(),
        }
    }

    /// Create a bundled item with a literal id.
    pub fn bundled(
        id: &str,
        trigger: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::literal(id),
            trigger: trigger.into(),
            response: response.into(),
            stress_level: StressLevel::Low,
            actions: Vec::new(),
        }
    }

    /// Set the stress level.
    pub fn with_stress_level(mut self, level: StressLevel) -> Self {
        self.stress_level = level;
        self
    }

    /// Add a suggested action label.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Check whether this item's trigger occurs inside already-lowercased text.
    pub fn trigger_matches(&self, lowercased_input: &str) -> bool {
        lowercased_input.contains(&self.trigger.to_lowercase())
    }
}
