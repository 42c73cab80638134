//! Action identifiers

/// Names an action without referring to its handler.
///
/// Pending confirmations store the kind; the handler is looked up in the
/// grid's [`ActionSet`](super::ActionSet) only when the action is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Top-level create trigger. Never awaits confirmation.
    Create,
    /// Update the row.
    Update,
    /// Delete the row.
    Delete,
    /// Custom action by position in the configured list.
    Custom(usize),
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Update => f.write_str("update"),
            Self::Delete => f.write_str("delete"),
            Self::Custom(index) => write!(f, "custom action #{}", index),
        }
    }
}
