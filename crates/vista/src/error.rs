//! Error types for the Vista library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Vista operations.
#[derive(Debug, Error)]
pub enum VistaError {
    /// A profile was applied to a dataset it does not describe.
    #[error("Stale analysis: {0}. Re-run profiling before cleaning")]
    InvalidState(String),

    /// A record does not match the dataset's column set.
    #[error("Schema error at row {row}: {message}")]
    Schema { row: usize, message: String },

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VistaError {
    /// Build an IO error carrying the path that failed.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VistaError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for Vista operations.
pub type Result<T> = std::result::Result<T, VistaError>;
