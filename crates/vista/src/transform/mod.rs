//! Cleaning transforms: row removal and missing-value imputation.

mod engine;
mod fill;
mod operations;

pub use engine::{CleaningEngine, clean};
pub use operations::{CleanOutcome, CleaningAction, CleaningReport, FillChange};
