//! Majority-vote type inference over a column's values.

use serde_json::Value;

use crate::dataset::value::{self, ValueClass};
use crate::dataset::Dataset;
use crate::schema::{ColumnSummary, ColumnType};

/// Share of a column's rows (missing included) that must parse as one type
/// before the column takes that type.
pub const TYPE_THRESHOLD: f64 = 0.8;

/// Per-bucket tallies for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeCounts {
    pub total: usize,
    pub missing: usize,
    pub numeric: usize,
    pub date: usize,
}

impl TypeCounts {
    /// Tally a column's values.
    pub fn tally<'a>(values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut counts = Self::default();
        for v in values {
            counts.total += 1;
            match value::classify(v) {
                ValueClass::Missing => counts.missing += 1,
                ValueClass::Numeric => counts.numeric += 1,
                ValueClass::Date => counts.date += 1,
                ValueClass::Other => {}
            }
        }
        counts
    }

    /// Apply the threshold rule. Zero rows is text.
    pub fn decide(&self) -> ColumnType {
        if self.total == 0 {
            return ColumnType::Text;
        }

        let cutoff = TYPE_THRESHOLD * self.total as f64;
        if self.numeric as f64 > cutoff {
            ColumnType::Number
        } else if self.date as f64 > cutoff {
            ColumnType::Date
        } else {
            ColumnType::Text
        }
    }
}

/// Classify one column's values as number, date or text.
pub fn infer_column_type<'a>(values: impl IntoIterator<Item = &'a Value>) -> ColumnType {
    TypeCounts::tally(values).decide()
}

/// Infer every column of a dataset, in column order.
pub fn infer_columns(dataset: &Dataset) -> Vec<ColumnSummary> {
    dataset
        .columns()
        .iter()
        .map(|name| ColumnSummary {
            name: name.clone(),
            inferred_type: infer_column_type(dataset.column_values(name)),
        })
        .collect()
}
