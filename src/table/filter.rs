//! Free-text Filter
//!
//! Keeps the rows where at least one searchable field contains the filter
//! text. Matching is case-insensitive; an empty filter keeps everything.

use super::column::TableRow;

/// Whether `row` matches an already-lowercased, non-empty needle
pub fn matches<R: TableRow>(row: &R, needle: &str) -> bool {
    row.fields().iter().any(|value| value.contains_text(needle))
}

/// Copy out the rows of `rows` that match `filter`
pub fn filter_rows<R: TableRow>(rows: &[R], filter: &str) -> Vec<R> {
    if filter.is_empty() {
        return rows.to_vec();
    }

    let needle = filter.to_lowercase();
    rows.iter()
        .filter(|row| matches(*row, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    fn products() -> Vec<Product> {
        vec![
            Product::new("1", "Jazz Night", 30.0).with_categories(["Music"]),
            Product::new("2", "Wine Tasting", 10.0).with_categories(["Food", "Drinks"]),
            Product::new("3", "City Marathon", 20.0).with_categories(["Sport"]),
        ]
    }

    fn ids(rows: &[Product]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let rows = products();
        assert_eq!(filter_rows(&rows, ""), rows);
    }

    #[test]
    fn matches_any_text_field_case_insensitive() {
        let rows = products();
        assert_eq!(ids(&filter_rows(&rows, "jazz")), vec!["1"]);
        assert_eq!(ids(&filter_rows(&rows, "DRINK")), vec!["2"]);
        assert_eq!(ids(&filter_rows(&rows, "t")), vec!["1", "2", "3"]);
    }

    #[test]
    fn numeric_fields_are_not_searched() {
        // Product 1 costs 30, but only its text fields take part.
        let rows = products();
        assert_eq!(ids(&filter_rows(&rows, "3")), vec!["3"]);
    }

    #[test]
    fn unmatched_filter_yields_empty() {
        assert!(filter_rows(&products(), "opera").is_empty());
    }

    #[test]
    fn kept_rows_match_and_dropped_rows_do_not() {
        let rows = products();
        for filter in ["a", "Mu", "ood", "x", "1"] {
            let needle = filter.to_lowercase();
            let kept = filter_rows(&rows, filter);
            for row in &rows {
                assert_eq!(kept.contains(row), matches(row, &needle), "filter {filter:?}");
            }
        }
    }

    #[test]
    fn source_is_not_mutated() {
        let rows = products();
        let before = rows.clone();
        let _ = filter_rows(&rows, "wine");
        assert_eq!(rows, before);
    }
}
