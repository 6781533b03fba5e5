//! Selection lifecycle.
//!
//! A selection is either untouched (`Default`) or has had at least one user
//! action applied (`Configured`). Every transition re-enters the same full
//! recompute, so the status is informational only.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a [`Selection`](super::Selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    /// Cold start or just reset.
    #[default]
    Default,

    /// A preset or manual edit has been applied.
    Configured,
}

/// Actions that move a selection through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    PresetApplied,
    ManualEdit,
    Reset,
}

impl SelectionStatus {
    /// Returns the status after `event`.
    pub fn on(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::PresetApplied | SelectionEvent::ManualEdit => SelectionStatus::Configured,
            SelectionEvent::Reset => SelectionStatus::Default,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, SelectionStatus::Default)
    }
}
