//! Cleaning engine that applies a [`CleaningAction`] to a profiled dataset.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::FillPolicy;
use crate::dataset::value::is_missing;
use crate::dataset::{Dataset, Record};
use crate::error::Result;
use crate::profile::{DatasetProfile, Profiler};
use crate::quality::MissingValueDetector;

use super::fill::fill_value;
use super::operations::{CleanOutcome, CleaningAction, CleaningReport, FillChange};

/// Applies cleaning actions. Holds only the fill policy; every call takes
/// the dataset and its profile explicitly.
#[derive(Debug, Clone, Default)]
pub struct CleaningEngine {
    policy: FillPolicy,
}

impl CleaningEngine {
    /// Create an engine with the default fill policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom fill policy.
    ///
    /// An empty sentinel is rejected, since `Fill` would leave the cells it
    /// writes still missing.
    pub fn with_policy(policy: FillPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Apply `action` and return the cleaned dataset.
    ///
    /// Fails with [`InvalidState`](crate::VistaError::InvalidState) if
    /// `profile` was not computed from `dataset`. The input dataset is left
    /// untouched.
    pub fn apply(
        &self,
        dataset: &Dataset,
        profile: &DatasetProfile,
        action: CleaningAction,
    ) -> Result<Dataset> {
        self.transform(dataset, profile, action)
            .map(|(cleaned, _)| cleaned)
    }

    /// Apply `action`, re-profile the result and report what changed.
    pub fn apply_and_profile(
        &self,
        dataset: &Dataset,
        profile: &DatasetProfile,
        action: CleaningAction,
    ) -> Result<CleanOutcome> {
        let (cleaned, changes) = self.transform(dataset, profile, action)?;
        let refreshed = Profiler::run(&cleaned);

        let report = CleaningReport {
            action,
            rows_before: dataset.len(),
            rows_after: cleaned.len(),
            rows_removed: dataset.len() - cleaned.len(),
            values_filled: changes.iter().map(|c| c.values_filled).sum(),
            changes,
        };

        info!(
            action = %action,
            rows_before = report.rows_before,
            rows_after = report.rows_after,
            values_filled = report.values_filled,
            clean = refreshed.is_clean(),
            "cleaning complete"
        );

        Ok(CleanOutcome {
            dataset: cleaned,
            profile: refreshed,
            report,
        })
    }

    fn transform(
        &self,
        dataset: &Dataset,
        profile: &DatasetProfile,
        action: CleaningAction,
    ) -> Result<(Dataset, Vec<FillChange>)> {
        profile.ensure_describes(dataset)?;

        Ok(match action {
            CleaningAction::Remove => (self.remove(dataset, profile), Vec::new()),
            CleaningAction::Fill => self.fill(dataset, profile),
        })
    }

    /// Keep rows that are neither duplicates nor missing any value.
    fn remove(&self, dataset: &Dataset, profile: &DatasetProfile) -> Dataset {
        let duplicates: HashSet<usize> = profile.duplicate_rows.iter().copied().collect();

        let kept: Vec<Record> = dataset
            .rows()
            .iter()
            .enumerate()
            .filter(|(index, row)| {
                !duplicates.contains(index) && !MissingValueDetector::row_has_missing(row)
            })
            .map(|(_, row)| row.clone())
            .collect();

        debug!(
            duplicates = duplicates.len(),
            removed = dataset.len() - kept.len(),
            "removed rows"
        );

        dataset.with_rows(kept)
    }

    /// Replace every missing value according to its column's type.
    fn fill(&self, dataset: &Dataset, profile: &DatasetProfile) -> (Dataset, Vec<FillChange>) {
        let mut rows: Vec<Record> = dataset.rows().to_vec();
        let mut changes = Vec::new();

        for column in profile.columns.iter().filter(|c| c.missing_count > 0) {
            let value = fill_value(dataset, &column.name, column.inferred_type, &self.policy);

            let mut filled = 0;
            for row in rows.iter_mut() {
                if let Some(cell) = row.get_mut(&column.name) {
                    if is_missing(cell) {
                        *cell = value.clone();
                        filled += 1;
                    }
                }
            }

            debug!(column = %column.name, fill = %value, filled, "filled column");

            changes.push(FillChange {
                column: column.name.clone(),
                inferred_type: column.inferred_type,
                fill_value: value,
                values_filled: filled,
            });
        }

        (dataset.with_rows(rows), changes)
    }
}

/// Apply `action` with the default fill policy.
pub fn clean(dataset: &Dataset, profile: &DatasetProfile, action: CleaningAction) -> Result<Dataset> {
    CleaningEngine::new().apply(dataset, profile, action)
}
