//! Cleaning actions and what applying them changed.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::Dataset;
use crate::profile::DatasetProfile;
use crate::schema::ColumnType;

/// A cleaning transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningAction {
    /// Drop duplicate rows and rows with any missing value.
    Remove,
    /// Impute every missing value; keeps all rows.
    Fill,
}

impl fmt::Display for CleaningAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleaningAction::Remove => f.write_str("remove"),
            CleaningAction::Fill => f.write_str("fill"),
        }
    }
}

/// Imputation applied to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillChange {
    /// Column filled.
    pub column: String,
    /// Type that selected the imputation rule.
    pub inferred_type: ColumnType,
    /// Value written into the missing cells.
    pub fill_value: Value,
    /// Number of cells replaced.
    pub values_filled: usize,
}

/// Summary of one cleaning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub action: CleaningAction,
    pub rows_before: usize,
    pub rows_after: usize,
    pub rows_removed: usize,
    pub values_filled: usize,
    /// Per-column imputations (empty for `Remove`).
    pub changes: Vec<FillChange>,
}

impl CleaningReport {
    /// Get a human-readable description of the pass.
    pub fn description(&self) -> String {
        match self.action {
            CleaningAction::Remove => format!(
                "Removed {} of {} rows ({} remain)",
                self.rows_removed, self.rows_before, self.rows_after
            ),
            CleaningAction::Fill => {
                let examples: Vec<String> = self
                    .changes
                    .iter()
                    .take(3)
                    .map(|c| format!("'{}' ← {}", c.column, c.fill_value))
                    .collect();
                if examples.is_empty() {
                    "No missing values to fill".to_string()
                } else {
                    format!(
                        "Filled {} values in {} columns: {}",
                        self.values_filled,
                        self.changes.len(),
                        examples.join(", ")
                    )
                }
            }
        }
    }
}

/// A cleaned dataset together with its fresh profile.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub dataset: Dataset,
    pub profile: DatasetProfile,
    pub report: CleaningReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_wire_names() {
        assert_eq!(serde_json::to_string(&CleaningAction::Remove).unwrap(), "\"remove\"");
        let fill: CleaningAction = serde_json::from_str("\"fill\"").unwrap();
        assert_eq!(fill, CleaningAction::Fill);
        assert!(serde_json::from_str::<CleaningAction>("\"drop\"").is_err());
    }

    #[test]
    fn test_remove_description() {
        let report = CleaningReport {
            action: CleaningAction::Remove,
            rows_before: 4,
            rows_after: 2,
            rows_removed: 2,
            values_filled: 0,
            changes: Vec::new(),
        };
        assert_eq!(report.description(), "Removed 2 of 4 rows (2 remain)");
    }

    #[test]
    fn test_fill_description() {
        let report = CleaningReport {
            action: CleaningAction::Fill,
            rows_before: 3,
            rows_after: 3,
            rows_removed: 0,
            values_filled: 2,
            changes: vec![FillChange {
                column: "age".to_string(),
                inferred_type: ColumnType::Number,
                fill_value: json!(30),
                values_filled: 2,
            }],
        };
        assert_eq!(report.description(), "Filled 2 values in 1 columns: 'age' ← 30");
    }
}
