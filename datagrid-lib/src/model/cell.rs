//! Cell values derived from a row and a column.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde_json::Value;

use super::Column;
use super::ColumnKind;
use super::Row;

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// What a renderer should show in one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Text content.
    Text(String),
    /// An image key to resolve with an [`ImageResolver`](crate::image::ImageResolver).
    Image(String),
    /// The row has no value at the column's path.
    Empty,
}

impl CellValue {
    /// Derives the cell for `column` from `row`.
    ///
    /// Date columns accept RFC 3339 strings (shown in their own offset), naive
    /// date-times, plain dates and epoch milliseconds. Values that do not
    /// parse are shown as text.
    pub fn from_row(row: &Row, column: &Column) -> Self {
        let Some(value) = row.get_path(&column.key) else {
            return Self::Empty;
        };
        if value.is_null() {
            return Self::Empty;
        }
        match column.kind {
            ColumnKind::Plain => Self::Text(plain_text(value)),
            ColumnKind::Image => match value {
                Value::String(key) => Self::Image(key.clone()),
                _ => Self::Empty,
            },
            ColumnKind::Date => Self::Text(
                format_date_time(value, DATE_FORMAT).unwrap_or_else(|| plain_text(value)),
            ),
            ColumnKind::DateTime => Self::Text(
                format_date_time(value, DATE_TIME_FORMAT).unwrap_or_else(|| plain_text(value)),
            ),
        }
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_date_time(value: &Value, format: &str) -> Option<String> {
    match value {
        Value::Number(n) => {
            let millis = n.as_i64()?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.format(format).to_string())
        }
        Value::String(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.format(format).to_string());
            }
            for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
                if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
                    return Some(dt.format(format).to_string());
                }
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.format(format).to_string())
        }
        _ => None,
    }
}
