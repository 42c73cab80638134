//! Result pages returned by remote sources.

use serde::Deserialize;
use serde::Serialize;

use super::Row;

/// A page from an offset-paginated source.
///
/// `count` is the number of rows in this page and `total_count` the number of
/// rows matching the current search across all pages.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::OffsetPage;
///
/// let page: OffsetPage = serde_json::from_str(
///     r#"{ "count": 1, "totalCount": 40, "results": [{ "id": 9 }] }"#,
/// ).unwrap();
/// assert_eq!(page.total_count, 40);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetPage {
    /// Rows in this page.
    pub count: usize,
    /// Rows matching the search across all pages.
    pub total_count: usize,
    /// The rows.
    pub results: Vec<Row>,
}

impl OffsetPage {
    /// Creates a page, deriving `count` from the rows.
    pub fn new(results: Vec<Row>, total_count: usize) -> Self {
        Self {
            count: results.len(),
            total_count,
            results,
        }
    }
}

/// A page from a cursor-paginated source.
///
/// `last_id` is an opaque token to resume after this page. A missing or empty
/// token means there are no further pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage {
    /// Rows in this page.
    pub count: usize,
    /// Continuation token for the next page.
    #[serde(default)]
    pub last_id: Option<String>,
    /// The rows.
    pub results: Vec<Row>,
}

impl CursorPage {
    /// Creates a final page with no continuation token.
    pub fn new(results: Vec<Row>) -> Self {
        Self {
            count: results.len(),
            last_id: None,
            results,
        }
    }

    /// Sets the continuation token.
    pub fn with_last_id(mut self, last_id: impl Into<String>) -> Self {
        self.last_id = Some(last_id.into());
        self
    }

    /// Returns the continuation token if it is present and non-empty.
    pub fn next_cursor(&self) -> Option<&str> {
        self.last_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns `true` if the source reported more pages.
    pub fn has_more(&self) -> bool {
        self.next_cursor().is_some()
    }
}
