//! The profile of one dataset version.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Result, VistaError};
use crate::quality::duplicates::{fingerprint, row_digests};
use crate::schema::{ColumnProfile, ColumnSummary, ColumnType};

/// Types, missing counts and duplicate rows of one dataset version.
///
/// A profile describes exactly the dataset it was computed from. Once that
/// dataset is replaced the profile is stale; [`DatasetProfile::ensure_describes`]
/// detects this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// Per-column profiles, in column order.
    pub columns: Vec<ColumnProfile>,
    /// Rows repeating an earlier row (0-based, ascending).
    pub duplicate_rows: Vec<usize>,
    /// Number of rows profiled.
    pub row_count: usize,
    /// Digest of the profiled dataset version.
    pub fingerprint: String,
}

/// Headline numbers for a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    /// Missing cells across all columns.
    pub missing_values: usize,
    /// Number of duplicate rows.
    pub duplicate_rows: usize,
    pub column_types: IndexMap<String, ColumnType>,
    pub is_clean: bool,
}

impl DatasetProfile {
    /// Columns with missing values mapped to their counts. Clean columns
    /// are omitted.
    pub fn missing_info(&self) -> IndexMap<String, usize> {
        self.columns
            .iter()
            .filter(|c| c.missing_count > 0)
            .map(|c| (c.name.clone(), c.missing_count))
            .collect()
    }

    /// Whether any column has a missing value.
    pub fn has_missing_values(&self) -> bool {
        self.columns.iter().any(|c| c.missing_count > 0)
    }

    /// Whether any row repeats an earlier one.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_rows.is_empty()
    }

    /// No missing values and no duplicate rows.
    pub fn is_clean(&self) -> bool {
        !self.has_missing_values() && !self.has_duplicates()
    }

    /// Total missing cells.
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|c| c.missing_count).sum()
    }

    /// Look up a column's profile.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names and inferred types.
    pub fn column_summaries(&self) -> Vec<ColumnSummary> {
        self.columns.iter().map(ColumnSummary::from).collect()
    }

    /// Headline numbers.
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            total_rows: self.row_count,
            total_columns: self.columns.len(),
            missing_values: self.total_missing(),
            duplicate_rows: self.duplicate_rows.len(),
            column_types: self
                .columns
                .iter()
                .map(|c| (c.name.clone(), c.inferred_type))
                .collect(),
            is_clean: self.is_clean(),
        }
    }

    /// Fail with [`VistaError::InvalidState`] unless this profile was
    /// computed from exactly `dataset`.
    pub fn ensure_describes(&self, dataset: &Dataset) -> Result<()> {
        if self.row_count != dataset.len() {
            return Err(VistaError::InvalidState(format!(
                "profile covers {} rows but the dataset has {}",
                self.row_count,
                dataset.len()
            )));
        }

        let mut profiled: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        let mut actual: Vec<&str> = dataset.columns().iter().map(String::as_str).collect();
        profiled.sort_unstable();
        actual.sort_unstable();
        if profiled != actual {
            return Err(VistaError::InvalidState(format!(
                "profile columns [{}] do not match dataset columns [{}]",
                profiled.join(", "),
                actual.join(", ")
            )));
        }

        let current = fingerprint(dataset.columns(), &row_digests(dataset));
        if current != self.fingerprint {
            return Err(VistaError::InvalidState(
                "dataset contents changed since the profile was computed".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile;

    fn dataset(json: &str) -> Dataset {
        Dataset::from_reader(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_missing_info_omits_clean_columns() {
        let p = profile(&dataset(r#"[{"a": 1, "b": null}, {"a": 2, "b": "x"}]"#));
        let info = p.missing_info();
        assert_eq!(info.len(), 1);
        assert_eq!(info["b"], 1);
        assert!(p.has_missing_values());
        assert!(!p.is_clean());
    }

    #[test]
    fn test_summary() {
        let p = profile(&dataset(
            r#"[{"a": 1, "b": null}, {"a": 1, "b": null}, {"a": 2, "b": ""}]"#,
        ));
        let s = p.summary();
        assert_eq!(s.total_rows, 3);
        assert_eq!(s.total_columns, 2);
        assert_eq!(s.missing_values, 3);
        assert_eq!(s.duplicate_rows, 1);
        assert_eq!(s.column_types["a"], ColumnType::Number);
        assert!(!s.is_clean);
    }

    #[test]
    fn test_describes_its_own_dataset() {
        let ds = dataset(r#"[{"a": 1}, {"a": 2}]"#);
        assert!(profile(&ds).ensure_describes(&ds).is_ok());
    }

    #[test]
    fn test_rejects_different_row_count() {
        let p = profile(&dataset(r#"[{"a": 1}, {"a": 2}]"#));
        let err = p.ensure_describes(&dataset(r#"[{"a": 1}]"#)).unwrap_err();
        assert!(matches!(err, VistaError::InvalidState(_)));
    }

    #[test]
    fn test_rejects_different_columns() {
        let p = profile(&dataset(r#"[{"a": 1}]"#));
        let err = p.ensure_describes(&dataset(r#"[{"b": 1}]"#)).unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn test_rejects_same_shape_different_content() {
        let p = profile(&dataset(r#"[{"a": 1}, {"a": 2}]"#));
        let err = p.ensure_describes(&dataset(r#"[{"a": 1}, {"a": 3}]"#)).unwrap_err();
        assert!(err.to_string().contains("changed"));
    }

    #[test]
    fn test_column_order_alone_is_not_stale() {
        // Same records, keys listed in a different order
        let a = dataset(r#"[{"a": 1, "b": 2}]"#);
        let b = Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            vec![serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap()],
        )
        .unwrap();
        assert!(profile(&a).ensure_describes(&b).is_ok());
    }
}
