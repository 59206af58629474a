//! Column-level schema types produced by inference and profiling.

mod types;

pub use types::{ColumnProfile, ColumnSummary, ColumnType};
