//! Grid presentation options and labels.

/// Default page size options. The first entry is the initial page size.
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [5, 10, 20];

/// Text shown by the renderer. Passed through untouched.
///
/// # Example
///
/// ```
/// use datagrid_lib::config::Labels;
///
/// let labels = Labels::default()
///     .with_confirm_prompt("Delete this row?")
///     .with_search_placeholder("Search users");
/// assert_eq!(labels.confirm_yes, "Yes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Placeholder of the search input.
    pub search_placeholder: String,
    /// Prompt shown on a row awaiting confirmation.
    pub confirm_prompt: String,
    /// Confirm button.
    pub confirm_yes: String,
    /// Cancel button.
    pub confirm_no: String,
    /// Header of the actions column.
    pub actions_header: String,
    /// Text before the row count in the pagination bar.
    pub showing: String,
    /// Text after the row count in the pagination bar.
    pub results: String,
    /// Next page button.
    pub next: String,
    /// Previous page button.
    pub previous: String,
    /// Create button; `None` lets the renderer show an icon.
    pub add_button: Option<String>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            search_placeholder: "Search".to_string(),
            confirm_prompt: "Are you sure?".to_string(),
            confirm_yes: "Yes".to_string(),
            confirm_no: "No".to_string(),
            actions_header: "Actions".to_string(),
            showing: "Showing".to_string(),
            results: "results".to_string(),
            next: "Next".to_string(),
            previous: "Previous".to_string(),
            add_button: None,
        }
    }
}

impl Labels {
    /// Sets the search placeholder.
    pub fn with_search_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_placeholder = text.into();
        self
    }

    /// Sets the confirmation prompt.
    pub fn with_confirm_prompt(mut self, text: impl Into<String>) -> Self {
        self.confirm_prompt = text.into();
        self
    }

    /// Sets the confirm and cancel button texts.
    pub fn with_confirm_buttons(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.confirm_yes = yes.into();
        self.confirm_no = no.into();
        self
    }

    /// Sets the actions column header.
    pub fn with_actions_header(mut self, text: impl Into<String>) -> Self {
        self.actions_header = text.into();
        self
    }

    /// Sets the pagination bar texts.
    pub fn with_pagination(
        mut self,
        showing: impl Into<String>,
        results: impl Into<String>,
        previous: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        self.showing = showing.into();
        self.results = results.into();
        self.previous = previous.into();
        self.next = next.into();
        self
    }

    /// Sets the create button text.
    pub fn with_add_button(mut self, text: impl Into<String>) -> Self {
        self.add_button = Some(text.into());
        self
    }
}

/// Options that shape the grid's view but not its data.
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Heading above the table.
    pub title: Option<String>,
    /// Text under the heading.
    pub subtitle: Option<String>,
    /// Whether the search input is shown.
    pub searchable: bool,
    /// Whether a manual refresh trigger is shown.
    pub refresh_enabled: bool,
    /// Page sizes offered in the pagination bar.
    pub page_size_options: Vec<usize>,
    /// Display texts.
    pub labels: Labels,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            searchable: true,
            refresh_enabled: false,
            page_size_options: DEFAULT_PAGE_SIZES.to_vec(),
            labels: Labels::default(),
        }
    }
}
