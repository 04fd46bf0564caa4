//! Session and dialog state types

use crate::locale::Locale;
use crate::metric::Band;
use serde::{Deserialize, Serialize};

/// Oldest snapshots are dropped past this depth
pub const MAX_HISTORY: usize = 16;

/// Position in the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    /// Language menu, also the home screen
    #[default]
    LanguageSelect,
    WeightInput,
    HeightInput,
    /// BMI shown, waiting for tips / recalculate choice
    Result,
    TipsQuestion,
    TipsResult,
}

/// Computed index and its band; written once per height entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub metric: f64,
    pub band: Band,
}

/// Validated caller inputs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectedInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
}

impl CollectedInputs {
    pub fn is_empty(&self) -> bool {
        self.mass_kg.is_none() && self.height_cm.is_none() && self.assessment.is_none()
    }
}

/// A point in the history stack that "back" can return to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: DialogState,
    pub inputs: CollectedInputs,
    pub locale: Locale,
}

/// Per-caller dialog session, persisted between requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub caller: String,
    pub state: DialogState,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub inputs: CollectedInputs,
    #[serde(default)]
    pub history: Vec<Snapshot>,
}

impl Session {
    /// Fresh session at the language menu
    pub fn new(id: impl Into<String>, caller: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caller: caller.into(),
            state: DialogState::LanguageSelect,
            locale: Locale::default(),
            inputs: CollectedInputs::default(),
            history: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            inputs: self.inputs.clone(),
            locale: self.locale,
        }
    }

    /// Copy of this session moved forward to `next`, with the current
    /// position pushed onto the history stack.
    pub fn advanced_to(&self, next: DialogState) -> Self {
        let mut session = self.clone();
        session.history.push(self.snapshot());
        if session.history.len() > MAX_HISTORY {
            let excess = session.history.len() - MAX_HISTORY;
            session.history.drain(..excess);
        }
        session.state = next;
        session
    }

    /// Copy of this session reset to the home screen. Inputs and history
    /// are cleared. The chosen locale is kept, not reset to the default.
    pub fn reset_home(&self) -> Self {
        Self {
            id: self.id.clone(),
            caller: self.caller.clone(),
            state: DialogState::LanguageSelect,
            locale: self.locale,
            inputs: CollectedInputs::default(),
            history: Vec::new(),
        }
    }
}
