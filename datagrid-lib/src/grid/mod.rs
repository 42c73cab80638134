//! The grid controller.

mod actions;
mod builder;
mod fetch;
mod refresh;
mod state;

use std::sync::Arc;

use tokio::sync::Mutex;

pub use builder::DataGridBuilder;
pub use builder::Missing;
pub use builder::Set;
pub use refresh::RefreshHandle;

pub(crate) use self::state::GridState;
use crate::action::ActionSet;
use crate::config::GridOptions;
use crate::error::DisplayError;
use crate::error::GridError;
use crate::image::ImageResolver;
use crate::model::Column;
use crate::model::Row;
use crate::source::CursorSource;
use crate::source::OffsetSource;
use crate::source::PaginationMode;
use crate::state::SortState;
use crate::view::GridView;

/// A headless data grid.
///
/// The grid owns sort, search, paging and confirmation state, decides when
/// its data source is queried and produces a [`GridView`] for a renderer.
/// Interaction methods mirror what a user can do in the rendered table.
///
/// This handle is cheap to clone; all clones drive the same grid.
///
/// # Example
///
/// ```ignore
/// use datagrid_lib::DataGrid;
/// use datagrid_lib::model::{Column, Row};
///
/// let grid = DataGrid::builder()
///     .columns(vec![Column::new("Name", "name")])
///     .rows(vec![
///         Row::new().set("id", 1).set("name", "b"),
///         Row::new().set("id", 2).set("name", "a"),
///     ])
///     .build()?;
///
/// grid.submit_search("a").await;
/// grid.header_click("name").await?;
///
/// let view = grid.view().await;
/// for row in view.body.unwrap_or_default() {
///     println!("{:?}", row.cells());
/// }
/// ```
#[derive(Clone)]
pub struct DataGrid {
    inner: Arc<DataGridInner>,
}

pub(crate) enum Backend {
    Local,
    Offset(Arc<dyn OffsetSource>),
    Cursor(Arc<dyn CursorSource>),
}

pub(crate) struct DataGridInner {
    backend: Backend,
    columns: Vec<Column>,
    actions: ActionSet,
    options: GridOptions,
    image_resolver: Option<Arc<dyn ImageResolver>>,
    state: Mutex<GridState>,
}

impl DataGrid {
    /// Creates a new builder for constructing a grid.
    pub fn builder() -> DataGridBuilder<Missing, Missing> {
        DataGridBuilder::new()
    }

    /// Returns how this grid pages its rows.
    pub fn mode(&self) -> PaginationMode {
        match self.inner.backend {
            Backend::Local => PaginationMode::Local,
            Backend::Offset(_) => PaginationMode::Offset,
            Backend::Cursor(_) => PaginationMode::Cursor,
        }
    }

    /// Returns the configured columns.
    pub fn columns(&self) -> &[Column] {
        &self.inner.columns
    }

    /// Returns the configured actions.
    pub fn actions(&self) -> &ActionSet {
        &self.inner.actions
    }

    /// Returns the presentation options.
    pub fn options(&self) -> &GridOptions {
        &self.inner.options
    }

    /// Returns a handle that re-runs the current fetch.
    ///
    /// Every handle of a grid compares equal to every other.
    pub fn refresh_handle(&self) -> RefreshHandle {
        RefreshHandle::new(&self.inner)
    }

    /// Re-runs the current fetch with unchanged parameters.
    ///
    /// Cursor pages are fetched again instead of being served from memory.
    pub async fn refresh(&self) {
        self.run_pass(true).await;
    }

    /// Handles a click on a column header.
    ///
    /// The column becomes active with the previous direction flipped.
    /// Clicks on non-sortable columns are ignored.
    pub async fn header_click(&self, key: &str) -> Result<(), GridError> {
        self.resort(key, |sort| sort.header_click(key)).await
    }

    /// Handles a click on a column's sort icon.
    ///
    /// An inactive column starts ascending; the active column toggles.
    pub async fn icon_click(&self, key: &str) -> Result<(), GridError> {
        self.resort(key, |sort| sort.icon_click(key)).await
    }

    /// Submits a search.
    ///
    /// Accepted even while a fetch is in flight; the new text is fetched once
    /// the running fetch completes.
    pub async fn submit_search(&self, text: impl Into<String>) {
        let text = text.into();
        let cursor_mode = self.mode() == PaginationMode::Cursor;
        self.update(|state| {
            if state.search != text {
                state.search = text;
                // Tokens belong to the previous query.
                if cursor_mode {
                    state.cursor.reset();
                }
            }
        })
        .await;
    }

    /// Moves to the next page.
    pub async fn next_page(&self) -> Result<(), GridError> {
        let page = {
            let state = self.inner.state.lock().await;
            let next = state.cursor.page() + 1;
            if !state.displayed.has_next {
                return Err(GridError::PageUnavailable(next));
            }
            next
        };
        self.set_page(page).await
    }

    /// Moves to the previous page.
    pub async fn previous_page(&self) -> Result<(), GridError> {
        let page = self.inner.state.lock().await.cursor.page();
        if page == 0 {
            return Err(GridError::PageUnavailable(0));
        }
        self.set_page(page - 1).await
    }

    /// Jumps to `page`.
    ///
    /// Cursor grids can only reach pages whose preceding token is known.
    pub async fn set_page(&self, page: usize) -> Result<(), GridError> {
        if self.mode() == PaginationMode::Cursor
            && !self.inner.state.lock().await.cursor.can_reach(page)
        {
            return Err(GridError::PageUnavailable(page));
        }
        self.update(|state| state.cursor.set_page(page)).await;
        Ok(())
    }

    /// Changes the page size.
    pub async fn set_page_size(&self, page_size: usize) -> Result<(), GridError> {
        if page_size == 0 {
            return Err(GridError::InvalidPageSize);
        }
        let cursor_mode = self.mode() == PaginationMode::Cursor;
        self.update(|state| {
            if state.cursor.set_page_size(page_size) && cursor_mode {
                state.cursor.reset();
            }
        })
        .await;
        Ok(())
    }

    /// Replaces the collection of a local grid and re-derives the page.
    pub async fn replace_rows(&self, rows: Vec<Row>) -> Result<(), GridError> {
        if !matches!(self.inner.backend, Backend::Local) {
            return Err(GridError::NotLocal);
        }
        self.inner.state.lock().await.local_rows = rows;
        self.run_pass(false).await;
        Ok(())
    }

    /// Sets the caller's own loading flag.
    ///
    /// While set, no pass runs. Clearing it runs any pass that was skipped.
    pub async fn set_external_loading(&self, loading: bool) {
        let rerun = {
            let mut state = self.inner.state.lock().await;
            state.external_loading = loading;
            !loading && std::mem::take(&mut state.skipped)
        };
        if rerun {
            self.run_pass(false).await;
        }
    }

    /// Returns the current sort.
    pub async fn sort(&self) -> SortState {
        self.inner.state.lock().await.sort.clone()
    }

    /// Returns the current search text.
    pub async fn search(&self) -> String {
        self.inner.state.lock().await.search.clone()
    }

    /// Returns the current zero-based page and page size.
    pub async fn page(&self) -> (usize, usize) {
        let state = self.inner.state.lock().await;
        (state.cursor.page(), state.cursor.page_size())
    }

    /// Returns the rows of the displayed page.
    pub async fn rows(&self) -> Vec<Row> {
        self.inner.state.lock().await.displayed.rows.clone()
    }

    /// Returns the error currently held by the grid.
    pub async fn error(&self) -> Option<DisplayError> {
        self.inner.state.lock().await.error.clone()
    }

    /// Returns `true` while a fetch is in flight or the caller reports loading.
    pub async fn is_loading(&self) -> bool {
        let state = self.inner.state.lock().await;
        state.fetching || state.external_loading
    }

    /// Builds a render snapshot.
    pub async fn view(&self) -> GridView {
        let state = self.inner.state.lock().await;
        GridView::build(&self.inner, &state)
    }

    /// Resolves the image key of an image cell.
    ///
    /// See [`image::resolve`](crate::image::resolve).
    pub async fn resolve_image(&self, key: &str) -> Option<String> {
        crate::image::resolve(key, self.inner.image_resolver.as_deref()).await
    }

    fn sortable(&self, key: &str) -> Result<bool, GridError> {
        self.inner
            .columns
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.sortable)
            .ok_or_else(|| GridError::UnknownColumn(key.to_string()))
    }

    /// Applies a sort click on a sortable column.
    ///
    /// Cursor pages stored under the previous sort are dropped so the pass
    /// fetches again; their tokens stay usable.
    async fn resort(&self, key: &str, click: impl FnOnce(&mut SortState)) -> Result<(), GridError> {
        if !self.sortable(key)? {
            return Ok(());
        }
        self.update(|state| {
            click(&mut state.sort);
            state.cursor.clear_pages();
        })
        .await;
        Ok(())
    }

    /// Applies `change` and runs a pass if the query key moved.
    async fn update(&self, change: impl FnOnce(&mut GridState)) {
        let changed = {
            let mut state = self.inner.state.lock().await;
            change(&mut state);
            state.schedule()
        };
        if changed {
            self.run_pass(false).await;
        }
    }
}

impl DataGridInner {
    pub(crate) fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn actions(&self) -> &ActionSet {
        &self.actions
    }

    pub(crate) fn options(&self) -> &GridOptions {
        &self.options
    }
}
