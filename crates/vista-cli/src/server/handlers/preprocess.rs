//! Profiling and cleaning handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;
use vista::{CleaningAction, CleaningReport, ColumnSummary, DatasetProfile, ProfileSummary};

use crate::server::error::ApiError;
use crate::server::state::{AppState, no_dataset};

/// Profile of the current dataset.
#[derive(Serialize)]
pub struct ProfileResponse {
    /// Columns with missing values mapped to their counts.
    pub missing_info: IndexMap<String, usize>,
    /// Indices of rows that repeat an earlier row.
    pub duplicates: Vec<usize>,
    pub columns: Vec<ColumnSummary>,
    pub summary: ProfileSummary,
}

impl From<&DatasetProfile> for ProfileResponse {
    fn from(profile: &DatasetProfile) -> Self {
        Self {
            missing_info: profile.missing_info(),
            duplicates: profile.duplicate_rows.clone(),
            columns: profile.column_summaries(),
            summary: profile.summary(),
        }
    }
}

#[derive(Deserialize)]
pub struct CleanRequest {
    pub action: CleaningAction,
}

#[derive(Serialize)]
pub struct CleanResponse {
    pub report: CleaningReport,
    pub profile: ProfileResponse,
}

/// Profile the current dataset.
pub async fn get_preprocess(
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let dataset = state.current().await?;
    let profile = state.vista.profile(&dataset);
    Ok(Json(ProfileResponse::from(&profile)))
}

/// Headline numbers for the current dataset.
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<ProfileSummary>, ApiError> {
    let dataset = state.current().await?;
    Ok(Json(state.vista.profile(&dataset).summary()))
}

/// Clean the current dataset and swap in the result.
///
/// The write lock is held from profiling to the swap, so the profile the
/// clean acts on always describes the dataset it replaces.
pub async fn clean_dataset(
    State(state): State<AppState>,
    body: Result<Json<CleanRequest>, JsonRejection>,
) -> Result<Json<CleanResponse>, ApiError> {
    let Json(request) = body?;

    let mut slot = state.dataset.write().await;
    let dataset = slot.clone().ok_or_else(no_dataset)?;

    let profile = state.vista.profile(&dataset);
    let outcome = state
        .vista
        .clean_and_profile(&dataset, &profile, request.action)?;

    info!(
        action = %request.action,
        rows_before = outcome.report.rows_before,
        rows_after = outcome.report.rows_after,
        "dataset cleaned"
    );
    *slot = Some(Arc::new(outcome.dataset));

    Ok(Json(CleanResponse {
        profile: ProfileResponse::from(&outcome.profile),
        report: outcome.report,
    }))
}
