//! Column type inference.

mod type_inference;

pub use type_inference::{TYPE_THRESHOLD, TypeCounts, infer_column_type, infer_columns};
