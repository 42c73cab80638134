//! Dynamic row record

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// A single row displayed by the grid.
///
/// Rows are snapshots: the grid reads them through dot paths and hands
/// clones to row actions, but never edits one in place.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Row;
/// use serde_json::json;
///
/// let row = Row::from_value(json!({ "id": 1, "owner": { "name": "Ada" } })).unwrap();
/// assert_eq!(row.get_path("owner.name"), Some(&json!("Ada")));
/// assert_eq!(row.get_path("owner.email"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Map<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a row from a JSON object. Returns `None` for any other JSON value.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Sets a top-level field.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Follows a dot-separated path into nested objects.
    ///
    /// Numeric segments index into arrays.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Returns `true` if the serialized row contains `needle`, ignoring case.
    ///
    /// The match runs over the whole JSON text of the row, keys included,
    /// not field by field. `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        serde_json::to_string(&self.fields)
            .map(|text| text.to_lowercase().contains(needle))
            .unwrap_or(false)
    }
}

impl From<Map<String, Value>> for Row {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Orders two optional JSON values for sorting.
///
/// Numbers compare numerically and strings lexically. Values of different
/// kinds rank as missing < null < bool < number < string < array < object;
/// arrays and objects of the same kind compare by their JSON text.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => {
                let a = a.as_f64().unwrap_or(f64::NAN);
                let b = b.as_f64().unwrap_or(f64::NAN);
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
                a.to_string().cmp(&b.to_string())
            }
            _ => rank(a).cmp(&rank(b)),
        },
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        Row::from_value(value).unwrap()
    }

    #[test]
    fn test_get_path_nested_and_arrays() {
        let r = row(json!({ "a": { "b": [10, { "c": "deep" }] } }));
        assert_eq!(r.get_path("a.b.0"), Some(&json!(10)));
        assert_eq!(r.get_path("a.b.1.c"), Some(&json!("deep")));
        assert_eq!(r.get_path("a.x"), None);
        assert_eq!(r.get_path("a.b.c"), None);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Row::from_value(json!([1, 2])).is_none());
        assert!(Row::from_value(json!("text")).is_none());
    }

    #[test]
    fn test_search_covers_keys_and_values() {
        let r = row(json!({ "name": "Alice", "city": "Lisbon" }));
        assert!(r.matches_search("alice"));
        assert!(r.matches_search("city"));
        assert!(r.matches_search("\"name\":\"alice\""));
        assert!(!r.matches_search("porto"));
        assert!(r.matches_search(""));
    }

    #[test]
    fn test_compare_numbers_and_strings() {
        assert_eq!(
            compare_values(Some(&json!(2)), Some(&json!(10))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&json!("b")), Some(&json!("a"))),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(Some(&json!(1.5)), Some(&json!(1.5))),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_mixed_kinds() {
        assert_eq!(compare_values(None, Some(&Value::Null)), Ordering::Less);
        assert_eq!(
            compare_values(Some(&json!(99)), Some(&json!("1"))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&json!(true)), Some(&Value::Null)),
            Ordering::Greater
        );
    }
}
