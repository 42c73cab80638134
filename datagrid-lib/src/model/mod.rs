//! Rows, columns and result pages

mod cell;
mod column;
mod page;
mod row;

pub use cell::*;
pub use column::*;
pub use page::*;
pub use row::*;
