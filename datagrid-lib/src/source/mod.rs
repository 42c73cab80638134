//! Data sources: a static collection or a remote offset/cursor source.
//!
//! A grid is given exactly one [`DataSource`] when it is built. The variant
//! fixes the [`PaginationMode`] for the grid's lifetime; the shape of the
//! pages a source returns is never inspected to pick a mode.
//!
//! - [`DataSource::Local`] - rows already in memory, searched, sorted and
//!   sliced by [`local::query`]
//! - [`DataSource::Offset`] - an [`OffsetSource`] paged by row offset with a
//!   known total count
//! - [`DataSource::Cursor`] - a [`CursorSource`] paged by opaque continuation
//!   tokens

pub mod local;
mod remote;

use std::sync::Arc;

pub use remote::CursorRequest;
pub use remote::CursorSource;
pub use remote::OffsetRequest;
pub use remote::OffsetSource;

use crate::model::Row;

/// How a grid pages its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// In-memory rows.
    Local,
    /// Offset and total count.
    Offset,
    /// Continuation tokens, no total count.
    Cursor,
}

/// Where a grid's rows come from.
#[derive(Clone)]
pub enum DataSource {
    /// A resolved collection.
    Local(Vec<Row>),
    /// A relational source paged by offset.
    Offset(Arc<dyn OffsetSource>),
    /// A non-relational source paged by cursor.
    Cursor(Arc<dyn CursorSource>),
}

impl DataSource {
    /// Wraps an offset source.
    pub fn offset<S: OffsetSource + 'static>(source: S) -> Self {
        Self::Offset(Arc::new(source))
    }

    /// Wraps a cursor source.
    pub fn cursor<S: CursorSource + 'static>(source: S) -> Self {
        Self::Cursor(Arc::new(source))
    }
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(rows) => f.debug_tuple("Local").field(&rows.len()).finish(),
            Self::Offset(_) => f.write_str("Offset"),
            Self::Cursor(_) => f.write_str("Cursor"),
        }
    }
}
