//! Render snapshots.
//!
//! A [`GridView`] is everything a renderer needs to draw the grid at one
//! moment. It is rebuilt from scratch on every call to
//! [`DataGrid::view`](crate::DataGrid::view) and never mutated afterwards.

use crate::action::ActionKind;
use crate::error::DisplayError;
use crate::grid::DataGridInner;
use crate::grid::GridState;
use crate::model::CellValue;
use crate::state::SortOrder;

/// A snapshot of the whole grid.
#[derive(Debug, Clone)]
pub struct GridView {
    /// Heading.
    pub title: Option<String>,
    /// Text under the heading.
    pub subtitle: Option<String>,
    /// The search input, if the grid is searchable.
    pub search: Option<SearchView>,
    /// Create button text when a create action exists. Empty text means an icon.
    pub create: Option<String>,
    /// Whether the manual refresh trigger is shown.
    pub show_refresh: bool,
    /// One entry per column, hidden columns included.
    pub headers: Vec<HeaderView>,
    /// Header of the actions column, if rows have actions.
    pub actions_header: Option<String>,
    /// The rows, or `None` while loading or when a fetch error blocks the table.
    pub body: Option<Vec<RowView>>,
    /// The current error.
    pub error: Option<DisplayError>,
    /// A fetch is in flight or the caller is loading.
    pub loading: bool,
    /// The pagination bar, hidden while a fetch error is shown.
    pub pagination: Option<PaginationView>,
}

/// The search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    /// Placeholder text.
    pub placeholder: String,
    /// The submitted search text.
    pub value: String,
}

/// A column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Header text.
    pub title: String,
    /// Column key, passed back to header and icon clicks.
    pub key: String,
    /// Direction if this column is the active sort.
    pub sort: Option<SortOrder>,
    /// Whether clicks change the sort.
    pub sortable: bool,
    /// Whether the column is hidden.
    pub hidden: bool,
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Index in the displayed page, used by action requests.
    pub index: usize,
    /// Cells or a confirmation prompt.
    pub content: RowContent,
}

impl RowView {
    /// Returns the cells unless the row shows a confirmation prompt.
    pub fn cells(&self) -> Option<&[CellView]> {
        match &self.content {
            RowContent::Cells { cells, .. } => Some(cells),
            RowContent::Confirm { .. } => None,
        }
    }

    /// Returns `true` if the row awaits confirmation.
    pub fn is_confirming(&self) -> bool {
        matches!(self.content, RowContent::Confirm { .. })
    }
}

/// What a row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    /// Normal cells and the row's action triggers.
    Cells {
        /// One cell per column.
        cells: Vec<CellView>,
        /// Triggers for the actions cell; empty when rows have no actions.
        actions: Vec<ActionTrigger>,
    },
    /// An inline confirmation prompt.
    Confirm {
        /// The action awaiting confirmation.
        action: ActionKind,
        /// Prompt text.
        prompt: String,
        /// Confirm button text.
        yes: String,
        /// Cancel button text.
        no: String,
    },
}

/// One cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// The value to render.
    pub value: CellValue,
    /// Whether the column is hidden.
    pub hidden: bool,
    /// Style class of the column.
    pub class_name: Option<String>,
}

/// A trigger in a row's actions cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTrigger {
    /// The action.
    pub kind: ActionKind,
    /// Icon or name for custom actions; the kind name otherwise.
    pub label: String,
    /// `true` if the trigger runs immediately instead of asking for confirmation.
    pub free: bool,
}

/// The pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// Rows in the displayed page.
    pub rows: usize,
    /// Total matching rows, unknown for cursor sources.
    pub total_count: Option<usize>,
    /// Zero-based page index.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Page sizes to choose from.
    pub page_size_options: Vec<usize>,
    /// Whether the next button is enabled.
    pub next_enabled: bool,
    /// Whether the previous button is enabled.
    pub previous_enabled: bool,
    /// Text before the row count.
    pub showing_label: String,
    /// Text after the row count.
    pub results_label: String,
    /// Next button text.
    pub next_label: String,
    /// Previous button text.
    pub previous_label: String,
}

impl GridView {
    pub(crate) fn build(inner: &DataGridInner, state: &GridState) -> Self {
        let options = inner.options();
        let labels = &options.labels;
        let actions = inner.actions();
        let loading = state.fetching || state.external_loading;
        let blocked = state.error.as_ref().is_some_and(DisplayError::blocks_table);

        let headers = inner
            .columns()
            .iter()
            .map(|column| HeaderView {
                title: column.title.clone(),
                key: column.key.clone(),
                sort: state.sort.order_of(&column.key),
                sortable: column.sortable,
                hidden: column.hidden,
            })
            .collect();

        let triggers: Vec<ActionTrigger> = actions
            .row_actions()
            .into_iter()
            .map(|kind| ActionTrigger {
                kind,
                label: match kind {
                    ActionKind::Custom(i) => actions.custom()[i].label().to_string(),
                    other => other.to_string(),
                },
                free: !actions.needs_confirmation(kind),
            })
            .collect();

        let body = (!blocked && !loading).then(|| {
            state
                .displayed
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    let content = match state.confirmation.pending_for(index) {
                        Some(action) => RowContent::Confirm {
                            action,
                            prompt: labels.confirm_prompt.clone(),
                            yes: labels.confirm_yes.clone(),
                            no: labels.confirm_no.clone(),
                        },
                        None => RowContent::Cells {
                            cells: inner
                                .columns()
                                .iter()
                                .map(|column| CellView {
                                    value: CellValue::from_row(row, column),
                                    hidden: column.hidden,
                                    class_name: column.class_name.clone(),
                                })
                                .collect(),
                            actions: triggers.clone(),
                        },
                    };
                    RowView { index, content }
                })
                .collect()
        });

        let pagination = (!blocked).then(|| PaginationView {
            rows: state.displayed.count,
            total_count: state.displayed.total_count,
            page: state.cursor.page(),
            page_size: state.cursor.page_size(),
            page_size_options: options.page_size_options.clone(),
            next_enabled: state.displayed.has_next,
            previous_enabled: state.cursor.page() > 0,
            showing_label: labels.showing.clone(),
            results_label: labels.results.clone(),
            next_label: labels.next.clone(),
            previous_label: labels.previous.clone(),
        });

        Self {
            title: options.title.clone(),
            subtitle: options.subtitle.clone(),
            search: options.searchable.then(|| SearchView {
                placeholder: labels.search_placeholder.clone(),
                value: state.search.clone(),
            }),
            create: actions
                .can_create()
                .then(|| labels.add_button.clone().unwrap_or_default()),
            show_refresh: options.refresh_enabled,
            headers,
            actions_header: actions
                .has_row_actions()
                .then(|| labels.actions_header.clone()),
            body,
            error: state.error.clone(),
            loading,
            pagination,
        }
    }
}
