//! Data-quality detectors: missing values and duplicate rows.

pub mod duplicates;
pub mod missing;

pub use duplicates::{DuplicateDetector, RowDigest};
pub use missing::MissingValueDetector;
