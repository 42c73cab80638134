//! Interaction state owned by a grid: sort, paging and action confirmation.

mod confirm;
mod cursor;
mod sort;

pub use confirm::Confirmation;
pub use cursor::PageCursor;
pub use sort::SortOrder;
pub use sort::SortState;
