//! Search, sort and paging over an in-memory collection.

use crate::model::OffsetPage;
use crate::model::Row;
use crate::model::compare_values;
use crate::state::SortOrder;
use crate::state::SortState;

/// Produces one page of `rows`.
///
/// Keeps rows whose JSON text contains `search` ignoring case, sorts them
/// stably by the sort key, and slices `[page * page_size, (page + 1) * page_size)`.
/// `total_count` is the number of rows left after the search.
pub fn query(
    rows: &[Row],
    search: &str,
    sort: &SortState,
    page: usize,
    page_size: usize,
) -> OffsetPage {
    let needle = search.to_lowercase();
    let mut matched: Vec<&Row> = rows.iter().filter(|row| row.matches_search(&needle)).collect();

    matched.sort_by(|a, b| {
        let ordering = compare_values(a.get_path(sort.key()), b.get_path(sort.key()));
        match sort.order() {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total_count = matched.len();
    let start = page.saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);
    let results: Vec<Row> = matched[start..end].iter().map(|row| (*row).clone()).collect();

    OffsetPage::new(results, total_count)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use serde_json::json;

    use super::*;

    fn rows(values: Vec<Value>) -> Vec<Row> {
        values.into_iter().filter_map(Row::from_value).collect()
    }

    fn ids(page: &OffsetPage) -> Vec<i64> {
        page.results
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_i64))
            .collect()
    }

    #[test]
    fn test_sorts_by_active_key() {
        let data = rows(vec![
            json!({ "id": 1, "name": "b" }),
            json!({ "id": 2, "name": "a" }),
        ]);
        let page = query(&data, "", &SortState::new("name"), 0, 10);
        assert_eq!(ids(&page), vec![2, 1]);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_descending_keeps_ties_in_original_order() {
        let data = rows(vec![
            json!({ "id": 1, "n": 1 }),
            json!({ "id": 2, "n": 2 }),
            json!({ "id": 3, "n": 1 }),
            json!({ "id": 4, "n": 2 }),
        ]);
        let mut sort = SortState::new("n");
        sort.header_click("n");
        let page = query(&data, "", &sort, 0, 10);
        assert_eq!(ids(&page), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_whole_row() {
        let data = rows(vec![
            json!({ "id": 1, "name": "Alice", "tags": ["Admin"] }),
            json!({ "id": 2, "name": "Bob", "tags": [] }),
            json!({ "id": 3, "name": "Carol", "note": "ADMIN later" }),
        ]);
        let page = query(&data, "admin", &SortState::new("id"), 0, 10);
        assert_eq!(ids(&page), vec![1, 3]);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_page_sizes() {
        let data: Vec<Row> = (0..7).map(|i| Row::new().set("id", i)).collect();
        let sort = SortState::new("id");
        for page in 0..5 {
            let result = query(&data, "", &sort, page, 3);
            let expected = 3usize.min(7usize.saturating_sub(page * 3));
            assert_eq!(result.count, expected, "page {}", page);
            assert_eq!(result.total_count, 7);
        }
        assert_eq!(ids(&query(&data, "", &sort, 2, 3)), vec![6]);
    }

    #[test]
    fn test_idempotent() {
        let data = rows(vec![
            json!({ "id": 3, "name": "c" }),
            json!({ "id": 1, "name": "a" }),
        ]);
        let sort = SortState::new("name");
        assert_eq!(query(&data, "a", &sort, 0, 5), query(&data, "a", &sort, 0, 5));
    }
}
