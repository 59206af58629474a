//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use vista::{Dataset, Vista};

use super::error::ApiError;

/// Shared application state.
///
/// Holds the current dataset version. Cleaning swaps in a new `Arc`, so a
/// reader that cloned the old one keeps a consistent snapshot.
#[derive(Clone)]
pub struct AppState {
    /// The dataset being served, if one has been uploaded.
    pub dataset: Arc<RwLock<Option<Arc<Dataset>>>>,
    /// The profiling and cleaning engine.
    pub vista: Arc<Vista>,
}

impl AppState {
    /// Create new application state.
    pub fn new(vista: Vista, dataset: Option<Dataset>) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(dataset.map(Arc::new))),
            vista: Arc::new(vista),
        }
    }

    /// Snapshot of the current dataset.
    pub async fn current(&self) -> Result<Arc<Dataset>, ApiError> {
        self.dataset
            .read()
            .await
            .clone()
            .ok_or_else(no_dataset)
    }
}

pub fn no_dataset() -> ApiError {
    ApiError::NotFound("No dataset loaded. POST records to /api/upload first".to_string())
}
