//! Runs inference and the quality detectors over a dataset.

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::inference::infer_column_type;
use crate::quality::duplicates::{fingerprint, row_digests};
use crate::quality::{DuplicateDetector, MissingValueDetector};
use crate::schema::ColumnProfile;

use super::dataset_profile::DatasetProfile;

/// Builds [`DatasetProfile`]s.
pub struct Profiler;

impl Profiler {
    /// Profile a dataset: one type inference per column, one missing-value
    /// pass and one duplicate pass over the whole dataset.
    pub fn run(dataset: &Dataset) -> DatasetProfile {
        debug!(
            rows = dataset.len(),
            columns = dataset.column_count(),
            "profiling dataset"
        );

        let missing = MissingValueDetector::detect(dataset);
        let columns: Vec<ColumnProfile> = dataset
            .columns()
            .iter()
            .map(|name| ColumnProfile {
                name: name.clone(),
                inferred_type: infer_column_type(dataset.column_values(name)),
                missing_count: missing.get(name).copied().unwrap_or(0),
            })
            .collect();

        let digests = row_digests(dataset);
        let duplicate_rows = DuplicateDetector::from_digests(&digests);

        let profile = DatasetProfile {
            columns,
            duplicate_rows,
            row_count: dataset.len(),
            fingerprint: fingerprint(dataset.columns(), &digests),
        };

        info!(
            rows = profile.row_count,
            missing = profile.total_missing(),
            duplicates = profile.duplicate_rows.len(),
            clean = profile.is_clean(),
            "profile complete"
        );

        profile
    }
}

/// Profile a dataset.
pub fn profile(dataset: &Dataset) -> DatasetProfile {
    Profiler::run(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    #[test]
    fn test_profile_scenario() {
        let ds = Dataset::from_reader(
            r#"[{"a": 1, "b": "x"}, {"a": 1, "b": "x"}, {"a": 2, "b": null}, {"a": 3, "b": "y"}]"#
                .as_bytes(),
        )
        .unwrap();

        let p = profile(&ds);

        assert_eq!(p.row_count, 4);
        assert_eq!(p.duplicate_rows, vec![1]);
        let missing = p.missing_info();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing["b"], 1);
        assert_eq!(p.column("a").unwrap().inferred_type, ColumnType::Number);
        assert_eq!(p.column("b").unwrap().inferred_type, ColumnType::Text);
    }

    #[test]
    fn test_empty_dataset_is_trivially_clean() {
        let ds = Dataset::empty(vec!["a".to_string(), "b".to_string()]);
        let p = profile(&ds);

        assert_eq!(p.row_count, 0);
        assert!(p.is_clean());
        assert!(p.columns.iter().all(|c| c.inferred_type == ColumnType::Text));
        assert!(p.columns.iter().all(|c| c.missing_count == 0));
    }

    #[test]
    fn test_profile_is_deterministic() {
        let ds = Dataset::from_reader(r#"[{"a": "2023-01-01"}, {"a": ""}]"#.as_bytes()).unwrap();
        assert_eq!(profile(&ds), profile(&ds));
    }
}
