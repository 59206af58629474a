//! Dataset upload, preview and removal handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::info;
use vista::{Dataset, PageRequest, PageResult, Record};

use crate::server::error::ApiError;
use crate::server::state::{AppState, no_dataset};

/// Replace the current dataset with the uploaded records and return the
/// first page.
pub async fn upload_dataset(
    State(state): State<AppState>,
    body: Result<Json<Vec<Record>>, JsonRejection>,
) -> Result<Json<PageResult>, ApiError> {
    let Json(records) = body?;
    let dataset = Arc::new(Dataset::from_records(records)?);

    let page = state.vista.preview(&dataset, PageRequest::default());
    info!(
        rows = dataset.len(),
        columns = dataset.column_count(),
        "dataset uploaded"
    );
    *state.dataset.write().await = Some(dataset);

    Ok(Json(page))
}

/// Serve rows `[start, end)` of the current dataset.
pub async fn get_page(
    State(state): State<AppState>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<PageResult>, ApiError> {
    let Query(request) = query?;
    let dataset = state.current().await?;
    Ok(Json(state.vista.preview(&dataset, request)))
}

/// Drop the current dataset.
pub async fn delete_dataset(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let removed = state.dataset.write().await.take();
    match removed {
        Some(_) => {
            info!("dataset removed");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(no_dataset()),
    }
}
