//! The error currently shown by the grid

use super::RemoteError;
use crate::action::ActionKind;

/// The single error a grid holds at any time.
///
/// Only one is kept; every new fetch attempt or action replaces or clears it.
#[derive(Debug, Clone)]
pub enum DisplayError {
    /// A fetch that exhausted its retries. Hides the table body and the
    /// pagination bar.
    Fetch {
        /// Attempts made in the failing pass.
        attempts: u32,
        /// The normalized error of the last attempt.
        error: RemoteError,
    },
    /// A row action that failed. The table body stays visible.
    Action {
        /// The action that failed.
        action: ActionKind,
        /// The normalized error.
        error: RemoteError,
    },
}

impl DisplayError {
    /// Returns the user-visible text, which is the error's own message.
    pub fn message(&self) -> String {
        match self {
            Self::Fetch { error, .. } | Self::Action { error, .. } => error.to_string(),
        }
    }

    /// Returns `true` if this error suppresses the table body and pagination.
    pub fn blocks_table(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
