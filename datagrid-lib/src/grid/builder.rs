//! Typestate builder for [`DataGrid`].

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::Backend;
use super::DataGrid;
use super::DataGridInner;
use super::state::GridState;
use crate::action::ActionSet;
use crate::action::CustomAction;
use crate::action::RowAction;
use crate::config::GridOptions;
use crate::config::Labels;
use crate::error::ConfigError;
use crate::image::ImageResolver;
use crate::model::Column;
use crate::model::Row;
use crate::retry::RetryPolicy;
use crate::source::CursorSource;
use crate::source::DataSource;
use crate::source::OffsetSource;
use crate::state::SortState;

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`DataGrid`].
///
/// Uses the typestate pattern to ensure required fields are set at compile time.
///
/// # Required Fields
///
/// - the data: [`rows`](Self::rows), [`offset_source`](Self::offset_source),
///   [`cursor_source`](Self::cursor_source) or [`source`](Self::source). The
///   choice fixes the pagination mode for the grid's lifetime.
/// - [`columns`](Self::columns) - at least one; the first is the initial sort
///
/// # Example
///
/// ```ignore
/// let grid = DataGrid::builder()
///     .cursor_source(|req: CursorRequest| async move { api.list(req).await })
///     .columns(vec![Column::new("Name", "name")])
///     .on_delete(|row: Row| async move { api.delete(row).await })
///     .page_size_options(vec![10, 25, 50])
///     .refresh_enabled(true)
///     .build()?;
/// ```
pub struct DataGridBuilder<Source, Columns> {
    source: Source,
    columns: Columns,
    actions: ActionSet,
    options: GridOptions,
    image_resolver: Option<Arc<dyn ImageResolver>>,
    retry: RetryPolicy,
    loading: bool,
}

impl DataGridBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            source: Missing,
            columns: Missing,
            actions: ActionSet::default(),
            options: GridOptions::default(),
            image_resolver: None,
            retry: RetryPolicy::default(),
            loading: false,
        }
    }
}

impl Default for DataGridBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> DataGridBuilder<Missing, C> {
    /// Sets the data source.
    pub fn source(self, source: DataSource) -> DataGridBuilder<Set<DataSource>, C> {
        DataGridBuilder {
            source: Set(source),
            columns: self.columns,
            actions: self.actions,
            options: self.options,
            image_resolver: self.image_resolver,
            retry: self.retry,
            loading: self.loading,
        }
    }

    /// Uses an in-memory collection, searched, sorted and paged locally.
    pub fn rows(self, rows: Vec<Row>) -> DataGridBuilder<Set<DataSource>, C> {
        self.source(DataSource::Local(rows))
    }

    /// Uses a relational source paged by offset with a total count.
    pub fn offset_source<S: OffsetSource + 'static>(
        self,
        source: S,
    ) -> DataGridBuilder<Set<DataSource>, C> {
        self.source(DataSource::offset(source))
    }

    /// Uses a non-relational source paged by continuation tokens.
    pub fn cursor_source<S: CursorSource + 'static>(
        self,
        source: S,
    ) -> DataGridBuilder<Set<DataSource>, C> {
        self.source(DataSource::cursor(source))
    }
}

impl<S> DataGridBuilder<S, Missing> {
    /// Sets the columns, in display order.
    pub fn columns(self, columns: Vec<Column>) -> DataGridBuilder<S, Set<Vec<Column>>> {
        DataGridBuilder {
            source: self.source,
            columns: Set(columns),
            actions: self.actions,
            options: self.options,
            image_resolver: self.image_resolver,
            retry: self.retry,
            loading: self.loading,
        }
    }
}

impl<S, C> DataGridBuilder<S, C> {
    /// Sets the create action.
    pub fn on_create<A: RowAction + 'static>(mut self, action: A) -> Self {
        self.actions.on_create = Some(Arc::new(action));
        self
    }

    /// Sets the update action. Runs after confirmation.
    pub fn on_update<A: RowAction + 'static>(mut self, action: A) -> Self {
        self.actions.on_update = Some(Arc::new(action));
        self
    }

    /// Sets the delete action. Runs after confirmation.
    pub fn on_delete<A: RowAction + 'static>(mut self, action: A) -> Self {
        self.actions.on_delete = Some(Arc::new(action));
        self
    }

    /// Appends a custom row action.
    pub fn custom_action(mut self, action: CustomAction) -> Self {
        self.actions.custom.push(action);
        self
    }

    /// Sets the page sizes offered. The first is the initial page size.
    ///
    /// Defaults to `[5, 10, 20]`.
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.options.page_size_options = options;
        self
    }

    /// Sets the display texts.
    pub fn labels(mut self, labels: Labels) -> Self {
        self.options.labels = labels;
        self
    }

    /// Sets the heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    /// Sets the text under the heading.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.options.subtitle = Some(subtitle.into());
        self
    }

    /// Shows or hides the search input. Defaults to shown.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.options.searchable = searchable;
        self
    }

    /// Shows a manual refresh trigger. Defaults to hidden.
    pub fn refresh_enabled(mut self, enabled: bool) -> Self {
        self.options.refresh_enabled = enabled;
        self
    }

    /// Sets the caller's initial loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Sets the resolver for image columns.
    pub fn image_resolver<R: ImageResolver + 'static>(mut self, resolver: R) -> Self {
        self.image_resolver = Some(Arc::new(resolver));
        self
    }

    /// Sets the retry policy for remote fetches.
    ///
    /// Defaults to two immediate retries.
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl DataGridBuilder<Set<DataSource>, Set<Vec<Column>>> {
    /// Builds the [`DataGrid`].
    ///
    /// A local grid derives its first page here. A remote grid starts empty
    /// and fetches on the first interaction or [`refresh`](DataGrid::refresh).
    pub fn build(self) -> Result<DataGrid, ConfigError> {
        let columns = self.columns.0;
        let first = columns.first().ok_or(ConfigError::NoColumns)?;
        {
            let mut seen = HashSet::new();
            for column in &columns {
                if !seen.insert(column.key.as_str()) {
                    return Err(ConfigError::DuplicateColumn(column.key.clone()));
                }
            }
        }

        let page_size = *self
            .options
            .page_size_options
            .first()
            .ok_or(ConfigError::NoPageSizes)?;
        if self.options.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }

        let sort = SortState::new(first.key.clone());
        let (backend, local_rows) = match self.source.0 {
            DataSource::Local(rows) => (Backend::Local, rows),
            DataSource::Offset(source) => (Backend::Offset(source), Vec::new()),
            DataSource::Cursor(source) => (Backend::Cursor(source), Vec::new()),
        };
        let is_local = matches!(backend, Backend::Local);

        let mut state = GridState::new(sort, page_size, self.retry, local_rows, self.loading);
        if is_local {
            if self.loading {
                state.skipped = true;
            } else {
                state.apply_local();
            }
        }

        Ok(DataGrid {
            inner: Arc::new(DataGridInner {
                backend,
                columns,
                actions: self.actions,
                options: self.options,
                image_resolver: self.image_resolver,
                state: Mutex::new(state),
            }),
        })
    }
}
