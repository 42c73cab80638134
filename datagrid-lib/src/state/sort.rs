//! Sort state and header click transitions.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Returns `"asc"` or `"desc"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active sort column and direction.
///
/// Exactly one column is always active; there is no unsorted state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortState {
    key: String,
    order: SortOrder,
}

impl SortState {
    /// Starts ascending on `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            order: SortOrder::Asc,
        }
    }

    /// Returns the active column key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the active direction.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the direction of `key` if it is the active column.
    pub fn order_of(&self, key: &str) -> Option<SortOrder> {
        (self.key == key).then_some(self.order)
    }

    /// Header click: activates `key` with the previous direction flipped.
    ///
    /// The flip applies whether or not `key` was already active, so clicking
    /// a new column after an ascending sort starts it descending.
    pub fn header_click(&mut self, key: &str) {
        self.order = self.order.flipped();
        if self.key != key {
            self.key = key.to_string();
        }
    }

    /// Sort icon click: an inactive column starts ascending, an active column
    /// toggles between ascending and descending.
    pub fn icon_click(&mut self, key: &str) {
        match self.order_of(key) {
            None => {
                self.key = key.to_string();
                self.order = SortOrder::Asc;
            }
            Some(order) => self.order = order.flipped(),
        }
    }
}
