//! Remote source traits.

use std::future::Future;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::model::CursorPage;
use crate::model::OffsetPage;
use crate::state::SortOrder;

/// Parameters of an offset fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetRequest {
    /// Rows per page.
    pub page_size: usize,
    /// Rows to skip.
    pub offset: usize,
    /// Column key to sort by.
    pub sort_key: String,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Free-text search, empty for none.
    pub search: String,
}

/// Parameters of a cursor fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorRequest {
    /// Rows per page.
    pub page_size: usize,
    /// Token of the previous page, `None` for the first page.
    pub cursor: Option<String>,
    /// Free-text search, empty for none.
    pub search: String,
}

/// A source paged by row offset that reports a total count.
///
/// Any async closure taking an [`OffsetRequest`] implements this trait.
///
/// # Example
///
/// ```
/// use datagrid_lib::error::RemoteError;
/// use datagrid_lib::model::{OffsetPage, Row};
/// use datagrid_lib::source::{DataSource, OffsetRequest};
///
/// let source = DataSource::offset(|req: OffsetRequest| async move {
///     let rows: Vec<Row> = Vec::new();
///     let _ = (req.offset, req.page_size, req.sort_key, req.sort_order, req.search);
///     Ok::<_, RemoteError>(OffsetPage::new(rows, 0))
/// });
/// ```
#[async_trait]
pub trait OffsetSource: Send + Sync {
    /// Fetches one page.
    async fn fetch(&self, request: OffsetRequest) -> Result<OffsetPage, RemoteError>;
}

/// A source paged by opaque continuation tokens.
///
/// Any async closure taking a [`CursorRequest`] implements this trait.
#[async_trait]
pub trait CursorSource: Send + Sync {
    /// Fetches one page.
    async fn fetch(&self, request: CursorRequest) -> Result<CursorPage, RemoteError>;
}

#[async_trait]
impl<F, Fut> OffsetSource for F
where
    F: Fn(OffsetRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<OffsetPage, RemoteError>> + Send + 'static,
{
    async fn fetch(&self, request: OffsetRequest) -> Result<OffsetPage, RemoteError> {
        (self)(request).await
    }
}

#[async_trait]
impl<F, Fut> CursorSource for F
where
    F: Fn(CursorRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CursorPage, RemoteError>> + Send + 'static,
{
    async fn fetch(&self, request: CursorRequest) -> Result<CursorPage, RemoteError> {
        (self)(request).await
    }
}
