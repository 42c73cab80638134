//! Page position and cursor history.

use std::collections::BTreeMap;

use crate::model::CursorPage;

/// Current page, page size and, for cursor sources, the tokens seen so far.
///
/// `history[i]` holds the token returned with page `i`, so page `p > 0` is
/// requested with `history[p - 1]`. A token is recorded once per page and
/// never overwritten. Pages fetched from a cursor source are kept so that
/// moving back to them needs no request.
#[derive(Debug, Clone, Default)]
pub struct PageCursor {
    page: usize,
    page_size: usize,
    history: Vec<Option<String>>,
    pages: BTreeMap<usize, CursorPage>,
}

impl PageCursor {
    /// Starts on page 0.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size,
            history: Vec::new(),
            pages: BTreeMap::new(),
        }
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Row offset of the current page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Recorded continuation tokens, indexed by page.
    pub fn history(&self) -> &[Option<String>] {
        &self.history
    }

    /// The token to request the current page with. `None` on page 0.
    pub fn request_cursor(&self) -> Option<String> {
        match self.page {
            0 => None,
            page => self.history.get(page - 1).cloned().flatten(),
        }
    }

    /// Returns `true` if `page` can be requested: page 0, or a page whose
    /// preceding page returned a non-empty token.
    pub fn can_reach(&self, page: usize) -> bool {
        match page {
            0 => true,
            page => self
                .history
                .get(page - 1)
                .and_then(|token| token.as_deref())
                .is_some_and(|token| !token.is_empty()),
        }
    }

    /// Records the response for `page`.
    ///
    /// The token is appended only if `page` is the next unrecorded page.
    pub fn record(&mut self, page: usize, response: CursorPage) {
        if self.history.len() == page {
            self.history.push(response.last_id.clone());
        }
        self.pages.insert(page, response);
    }

    /// Returns the stored response for the current page.
    pub fn cached(&self) -> Option<&CursorPage> {
        self.pages.get(&self.page)
    }

    /// Drops the stored response for the current page.
    pub fn invalidate_current(&mut self) {
        self.pages.remove(&self.page);
    }

    /// Drops every stored response but keeps the tokens.
    pub fn clear_pages(&mut self) {
        self.pages.clear();
    }

    /// Moves to `page`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changes the page size. Returns `false` if it was already `page_size`.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if self.page_size == page_size {
            return false;
        }
        self.page_size = page_size;
        true
    }

    /// Returns to page 0 and forgets every token and stored page.
    pub fn reset(&mut self) {
        self.page = 0;
        self.history.clear();
        self.pages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_no_cursor() {
        let cursor = PageCursor::new(10);
        assert_eq!(cursor.request_cursor(), None);
        assert!(cursor.can_reach(0));
        assert!(!cursor.can_reach(1));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_tokens_recorded_once_per_page() {
        let mut cursor = PageCursor::new(10);
        cursor.record(0, CursorPage::new(Vec::new()).with_last_id("a"));
        assert!(cursor.can_reach(1));

        cursor.set_page(1);
        assert_eq!(cursor.request_cursor().as_deref(), Some("a"));
        cursor.record(1, CursorPage::new(Vec::new()).with_last_id("b"));

        // A refetch of page 0 must not overwrite or append.
        cursor.set_page(0);
        cursor.record(0, CursorPage::new(Vec::new()).with_last_id("zzz"));
        assert_eq!(
            cursor.history(),
            &[Some("a".to_string()), Some("b".to_string())]
        );
    }

    #[test]
    fn test_cache_and_reset() {
        let mut cursor = PageCursor::new(5);
        cursor.record(0, CursorPage::new(Vec::new()).with_last_id("a"));
        assert!(cursor.cached().is_some());
        cursor.invalidate_current();
        assert!(cursor.cached().is_none());

        cursor.set_page(1);
        cursor.reset();
        assert_eq!(cursor.page(), 0);
        assert!(cursor.history().is_empty());
    }

    #[test]
    fn test_set_page_size_reports_change() {
        let mut cursor = PageCursor::new(5);
        assert!(!cursor.set_page_size(5));
        assert!(cursor.set_page_size(10));
        cursor.set_page(3);
        assert_eq!(cursor.offset(), 30);
    }

    #[test]
    fn test_offset_saturates_on_far_pages() {
        let mut cursor = PageCursor::new(10);
        cursor.set_page(usize::MAX / 2);
        assert_eq!(cursor.offset(), usize::MAX);
    }

    #[test]
    fn test_empty_token_ends_paging() {
        let mut cursor = PageCursor::new(5);
        cursor.record(0, CursorPage::new(Vec::new()).with_last_id(""));
        assert!(!cursor.can_reach(1));
    }

    #[test]
    fn test_clear_pages_keeps_tokens() {
        let mut cursor = PageCursor::new(5);
        cursor.record(0, CursorPage::new(Vec::new()).with_last_id("a"));
        cursor.set_page(1);
        cursor.record(1, CursorPage::new(Vec::new()));

        cursor.clear_pages();
        assert!(cursor.cached().is_none());
        assert!(cursor.can_reach(1));
        assert_eq!(cursor.request_cursor().as_deref(), Some("a"));
    }
}
