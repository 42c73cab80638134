//! Errors returned by grid operations

use crate::action::ActionKind;

/// Errors returned when an interaction cannot be applied to the grid.
///
/// Failures of the data source or of row actions are not reported here;
/// they become the grid's [`DisplayError`](super::DisplayError).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The row index is not part of the displayed page.
    #[error("Row {index} is out of range ({len} rows displayed)")]
    RowOutOfRange {
        /// The requested row index.
        index: usize,
        /// The number of displayed rows.
        len: usize,
    },

    /// The action has no handler configured.
    #[error("Action {0} is not configured")]
    ActionUnavailable(ActionKind),

    /// The action does not go through the confirmation step.
    #[error("Action {0} does not need confirmation")]
    NotConfirmable(ActionKind),

    /// The custom action must be confirmed before it runs.
    #[error("Custom action #{0} requires confirmation")]
    NotFree(usize),

    /// `create` was called without an `on_create` handler.
    #[error("No create action configured")]
    CreateUnavailable,

    /// `confirm` was called while no action was pending.
    #[error("No action is awaiting confirmation")]
    NothingPending,

    /// The requested page cannot be reached from the current position.
    #[error("Page {0} is not reachable")]
    PageUnavailable(usize),

    /// The page size is zero.
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// No column has this key.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Rows can only be replaced on a grid over a local collection.
    #[error("Rows can only be replaced on a local grid")]
    NotLocal,

    /// The grid behind a refresh handle has been dropped.
    #[error("Grid has been unmounted")]
    Unmounted,
}
