//! Range-based pagination for previewing large datasets.

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Record};
use crate::inference::infer_columns;
use crate::schema::ColumnSummary;

/// A requested row range, `start` inclusive and `end` exclusive.
///
/// Out-of-range and inverted ranges are allowed; they are clamped when the
/// page is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub start: i64,
    /// Defaults to `start + page_size` when absent.
    #[serde(default)]
    pub end: Option<i64>,
}

impl PageRequest {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Concrete `(start, end)` bounds, filling a missing end from
    /// `page_size`.
    pub fn resolve(&self, page_size: usize) -> (i64, i64) {
        let size = i64::try_from(page_size).unwrap_or(i64::MAX);
        let end = self.end.unwrap_or_else(|| self.start.saturating_add(size));
        (self.start, end)
    }
}

/// One page of rows plus column metadata for the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// Rows in `[start, end)`.
    pub rows: Vec<Record>,
    /// Column names and types, inferred over the full dataset.
    pub columns: Vec<ColumnSummary>,
    pub total_rows: usize,
    /// Clamped start.
    pub start: usize,
    /// Clamped end.
    pub end: usize,
    /// Whether rows exist past `end`.
    pub has_more: bool,
}

/// Clamp `start` to `[0, total]` and `end` to `[start, total]`.
pub fn clamp_range(start: i64, end: i64, total: usize) -> (usize, usize) {
    let clamp = |i: i64| usize::try_from(i.max(0)).unwrap_or(usize::MAX).min(total);
    let start = clamp(start);
    let end = clamp(end).max(start);
    (start, end)
}

/// Serve rows `[start, end)` of a dataset. Never fails: bad ranges give a
/// truncated or empty page.
pub fn page(dataset: &Dataset, start: i64, end: i64) -> PageResult {
    let total_rows = dataset.len();
    let (start, end) = clamp_range(start, end, total_rows);

    PageResult {
        rows: dataset.rows()[start..end].to_vec(),
        columns: infer_columns(dataset),
        total_rows,
        start,
        end,
        has_more: end < total_rows,
    }
}
