//! Column descriptors

use serde::Deserialize;
use serde::Serialize;

/// How a column's value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    /// The value as text.
    #[default]
    Plain,
    /// An image key, resolved to a URL by an [`ImageResolver`](crate::image::ImageResolver).
    Image,
    /// A date, shown as `dd/mm/yyyy`.
    Date,
    /// A date and time, shown as `dd/mm/yyyy HH:MM:SS`.
    DateTime,
}

/// Column configuration.
///
/// # Examples
///
/// ```
/// use datagrid_lib::model::{Column, ColumnKind};
///
/// let columns = vec![
///     Column::new("Name", "name"),
///     Column::new("Owner", "owner.name").not_sortable(),
///     Column::new("Created", "createdAt").kind(ColumnKind::DateTime),
///     Column::new("Id", "id").hidden(),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Dot path into the row.
    pub key: String,
    /// Presentation kind.
    #[serde(default, rename = "type")]
    pub kind: ColumnKind,
    /// Whether header clicks change the sort.
    #[serde(default = "default_sortable")]
    pub sortable: bool,
    /// Hidden columns still take part in search and sort.
    #[serde(default)]
    pub hidden: bool,
    /// Style class passed through to the renderer.
    #[serde(default)]
    pub class_name: Option<String>,
}

fn default_sortable() -> bool {
    true
}

impl Column {
    /// Creates a plain, sortable, visible column.
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
            kind: ColumnKind::Plain,
            sortable: true,
            hidden: false,
            class_name: None,
        }
    }

    /// Sets the presentation kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Makes the column ignore sort clicks.
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Hides the column.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Sets the style class.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let column: Column =
            serde_json::from_str(r#"{ "title": "When", "key": "at", "type": "date-time" }"#)
                .unwrap();
        assert_eq!(column.kind, ColumnKind::DateTime);
        assert!(column.sortable);
        assert!(!column.hidden);
        assert_eq!(column.class_name, None);
    }
}
