//! Navigation targets - the fixed set of views the surrounding UI can show.
//!
//! The conversational core only ever *emits* a target (resolved from an
//! action label); actual view switching belongs to the host UI.

use serde::{Deserialize, Serialize};

/// A symbolic identifier for one of the application views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTarget {
    /// The conversation itself.
    Chat,
    /// Mood trends and wellness stats overview.
    Dashboard,
    /// Screen time and phone usage.
    Wellbeing,
    /// Digital detox and breathing exercises.
    Detox,
    /// Steps, heart rate, and activity tracking.
    Fitness,
    /// Health analysis and symptom insights.
    Health,
    /// User profile and persona settings.
    Persona,
}

impl NavigationTarget {
    /// String form matching the identifiers the UI routes on.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationTarget::Chat => "chat",
            NavigationTarget::Dashboard => "dashboard",
            NavigationTarget::Wellbeing => "wellbeing",
            NavigationTarget::Detox => "detox",
            NavigationTarget::Fitness => "fitness",
            NavigationTarget::Health => "health",
            NavigationTarget::Persona => "persona",
        }
    }

    /// Parse the lowercase identifier form. Returns `None` for unknown views.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "chat" => Some(NavigationTarget::Chat),
            "dashboard" => Some(NavigationTarget::Dashboard),
            "wellbeing" => Some(NavigationTarget::Wellbeing),
            "detox" => Some(NavigationTarget::Detox),
            "fitness" => Some(NavigationTarget::Fitness),
            "health" => Some(NavigationTarget::Health),
            "persona" => Some(NavigationTarget::Persona),
            _ => None,
        }
    }

    /// All targets in display order.
    pub fn all() -> [Self; 7] {
        [
            NavigationTarget::Chat,
            NavigationTarget::Dashboard,
            NavigationTarget::Wellbeing,
            NavigationTarget::Detox,
            NavigationTarget::Fitness,
            NavigationTarget::Health,
            NavigationTarget::Persona,
        ]
    }
}

impl std::fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
