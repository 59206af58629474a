//! Dataset profiling: types, missing values and duplicates in one pass.

mod dataset_profile;
mod profiler;

pub use dataset_profile::{DatasetProfile, ProfileSummary};
pub use profiler::{Profiler, profile};
