//! Vista: profile, preview and clean tabular datasets.
//!
//! A dataset is an ordered list of JSON records sharing one column set.
//! Vista infers a type for each column, counts missing values, finds
//! duplicate rows and applies one of two cleaning actions.
//!
//! # Core Principles
//!
//! - **Immutable data**: Cleaning returns a new dataset; the input is never modified
//! - **Explicit analysis**: A cleaning call takes the profile it acts on, and a
//!   stale profile is rejected
//! - **Deterministic**: The same input always yields the same profile and output
//!
//! # Example
//!
//! ```no_run
//! use vista::{CleaningAction, Vista};
//!
//! let vista = Vista::new();
//! let dataset = vista.load("employees.json").unwrap();
//! let profile = vista.profile(&dataset);
//!
//! println!("Missing: {:?}", profile.missing_info());
//! println!("Duplicates: {:?}", profile.duplicate_rows);
//!
//! let cleaned = vista.clean(&dataset, &profile, CleaningAction::Fill).unwrap();
//! cleaned.save("employees.clean.json").unwrap();
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod inference;
pub mod preview;
pub mod profile;
pub mod quality;
pub mod sample;
pub mod schema;
pub mod transform;

mod vista;

pub use crate::vista::Vista;
pub use config::{FillPolicy, VistaConfig};
pub use dataset::{Dataset, Record};
pub use error::{Result, VistaError};
pub use inference::infer_column_type;
pub use preview::{PageRequest, PageResult, page};
pub use profile::{DatasetProfile, ProfileSummary, profile};
pub use schema::{ColumnProfile, ColumnSummary, ColumnType};
pub use transform::{CleanOutcome, CleaningAction, CleaningReport, clean};
