//! Missing value counts per column.

use indexmap::IndexMap;

use crate::dataset::value::is_missing;
use crate::dataset::{Dataset, Record};

/// Counts `null` / `""` cells per column.
pub struct MissingValueDetector;

impl MissingValueDetector {
    /// Map each column with at least one missing value to its count.
    ///
    /// Columns without missing values are left out, so an empty map means
    /// the dataset has no missing values. Order follows the dataset's
    /// columns.
    pub fn detect(dataset: &Dataset) -> IndexMap<String, usize> {
        dataset
            .columns()
            .iter()
            .filter_map(|name| {
                let count = Self::count_column(dataset, name);
                (count > 0).then(|| (name.clone(), count))
            })
            .collect()
    }

    /// Missing values in a single column.
    pub fn count_column(dataset: &Dataset, name: &str) -> usize {
        dataset.column_values(name).filter(|v| is_missing(v)).count()
    }

    /// Whether a row has a missing value in any column.
    pub fn row_has_missing(row: &Record) -> bool {
        row.values().any(is_missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(json: &str) -> Dataset {
        Dataset::from_reader(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_counts_null_and_empty_string() {
        let ds = dataset(
            r#"[{"a": 1, "b": "x", "c": null},
                {"a": null, "b": "", "c": null},
                {"a": 3, "b": "", "c": 0}]"#,
        );

        let missing = MissingValueDetector::detect(&ds);
        assert_eq!(missing.get("a"), Some(&1));
        assert_eq!(missing.get("b"), Some(&2));
        assert_eq!(missing.get("c"), Some(&2));
        let order: Vec<&String> = missing.keys().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_and_false_are_present() {
        let ds = dataset(r#"[{"n": 0, "f": false, "s": " "}]"#);
        assert!(MissingValueDetector::detect(&ds).is_empty());
    }

    #[test]
    fn test_clean_columns_are_omitted() {
        let ds = dataset(r#"[{"a": 1, "b": null}, {"a": 2, "b": "y"}]"#);
        let missing = MissingValueDetector::detect(&ds);
        assert_eq!(missing.len(), 1);
        assert!(!missing.contains_key("a"));
    }

    #[test]
    fn test_row_has_missing() {
        let ds = dataset(r#"[{"a": 1, "b": ""}, {"a": 2, "b": "y"}]"#);
        assert!(MissingValueDetector::row_has_missing(ds.row(0).unwrap()));
        assert!(!MissingValueDetector::row_has_missing(ds.row(1).unwrap()));
    }
}
