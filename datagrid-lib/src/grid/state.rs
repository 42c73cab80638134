//! Mutable state of one grid.

use crate::error::DisplayError;
use crate::model::CursorPage;
use crate::model::OffsetPage;
use crate::model::Row;
use crate::retry::RetryPolicy;
use crate::source::local;
use crate::state::Confirmation;
use crate::state::PageCursor;
use crate::state::SortOrder;
use crate::state::SortState;

/// Everything that selects which rows are displayed.
///
/// A fetch pass runs when this changes, and a finished fetch is applied only
/// if the key it was issued for is still current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryKey {
    pub page: usize,
    pub page_size: usize,
    pub sort_key: String,
    pub sort_order: SortOrder,
    pub search: String,
}

/// The page currently shown.
#[derive(Debug, Clone, Default)]
pub(crate) struct Displayed {
    pub rows: Vec<Row>,
    pub count: usize,
    pub total_count: Option<usize>,
    pub has_next: bool,
    pub has_previous: bool,
}

pub(crate) struct GridState {
    pub sort: SortState,
    pub search: String,
    pub cursor: PageCursor,
    pub retry: RetryPolicy,
    pub confirmation: Confirmation,
    pub displayed: Displayed,
    pub error: Option<DisplayError>,
    /// Rows of a local grid.
    pub local_rows: Vec<Row>,
    /// Key of the last scheduled pass. Seeded at mount so that mounting
    /// itself never schedules a fetch.
    pub scheduled: QueryKey,
    /// A remote fetch is in flight.
    pub fetching: bool,
    /// A refresh was requested while a fetch was in flight.
    pub refresh_queued: bool,
    /// The caller's own loading flag.
    pub external_loading: bool,
    /// A pass was skipped because of `external_loading`.
    pub skipped: bool,
}

impl GridState {
    pub(crate) fn new(
        sort: SortState,
        page_size: usize,
        retry: RetryPolicy,
        local_rows: Vec<Row>,
        external_loading: bool,
    ) -> Self {
        let scheduled = QueryKey {
            page: 0,
            page_size,
            sort_key: sort.key().to_string(),
            sort_order: sort.order(),
            search: String::new(),
        };
        Self {
            sort,
            search: String::new(),
            cursor: PageCursor::new(page_size),
            retry,
            confirmation: Confirmation::Idle,
            displayed: Displayed::default(),
            error: None,
            local_rows,
            scheduled,
            fetching: false,
            refresh_queued: false,
            external_loading,
            skipped: false,
        }
    }

    pub(crate) fn query_key(&self) -> QueryKey {
        QueryKey {
            page: self.cursor.page(),
            page_size: self.cursor.page_size(),
            sort_key: self.sort.key().to_string(),
            sort_order: self.sort.order(),
            search: self.search.clone(),
        }
    }

    /// Marks the current key as scheduled. Returns `false` if it already was.
    pub(crate) fn schedule(&mut self) -> bool {
        let key = self.query_key();
        if key == self.scheduled {
            return false;
        }
        self.scheduled = key;
        true
    }

    pub(crate) fn apply_local(&mut self) {
        let page = local::query(
            &self.local_rows,
            &self.search,
            &self.sort,
            self.cursor.page(),
            self.cursor.page_size(),
        );
        self.apply_offset(page);
    }

    pub(crate) fn apply_offset(&mut self, page: OffsetPage) {
        let reached = self.cursor.offset().saturating_add(self.cursor.page_size());
        self.replace_displayed(Displayed {
            count: page.count,
            total_count: Some(page.total_count),
            has_next: reached < page.total_count,
            has_previous: self.cursor.page() > 0,
            rows: page.results,
        });
    }

    pub(crate) fn apply_cursor(&mut self, page: CursorPage) {
        let index = self.cursor.page();
        self.cursor.record(index, page.clone());
        self.replace_displayed(Displayed {
            count: page.count,
            total_count: None,
            has_next: page.has_more(),
            has_previous: index > 0,
            rows: page.results,
        });
    }

    fn replace_displayed(&mut self, displayed: Displayed) {
        // Pending confirmations point at rows by index.
        self.confirmation.cancel();
        self.displayed = displayed;
        self.error = None;
    }
}
