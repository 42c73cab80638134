//! Inline "are you sure" gate for row actions.

use crate::action::ActionKind;

/// Whether a row is waiting for the user to confirm an action.
///
/// At most one row can be pending. Requesting a second action replaces the
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    /// No row is awaiting confirmation.
    #[default]
    Idle,
    /// `row` shows a confirmation prompt for `action`.
    Pending {
        /// Index of the row in the displayed page.
        row: usize,
        /// The action to run on "yes".
        action: ActionKind,
    },
}

impl Confirmation {
    /// Puts `row` into the pending state for `action`.
    pub fn request(&mut self, row: usize, action: ActionKind) {
        *self = Self::Pending { row, action };
    }

    /// Leaves the pending state and returns what was pending.
    pub fn take(&mut self) -> Option<(usize, ActionKind)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Pending { row, action } => Some((row, action)),
        }
    }

    /// Returns to idle.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` if no row is pending.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the pending action if `row` is the pending row.
    pub fn pending_for(&self, row: usize) -> Option<ActionKind> {
        match *self {
            Self::Pending { row: r, action } if r == row => Some(action),
            _ => None,
        }
    }
}
