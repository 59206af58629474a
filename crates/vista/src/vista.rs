//! Main Vista struct and public API.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::VistaConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::inference::infer_column_type;
use crate::preview::{self, PageRequest, PageResult};
use crate::profile::{DatasetProfile, Profiler};
use crate::schema::ColumnType;
use crate::transform::{CleanOutcome, CleaningAction, CleaningEngine};

/// The profiling and cleaning engine.
///
/// `Vista` holds configuration only. Datasets and profiles are passed in
/// and returned by value, so one engine can serve any number of datasets.
#[derive(Debug, Clone)]
pub struct Vista {
    config: VistaConfig,
    engine: CleaningEngine,
}

impl Vista {
    /// Create a new Vista instance with default configuration.
    pub fn new() -> Self {
        Self {
            config: VistaConfig::default(),
            engine: CleaningEngine::default(),
        }
    }

    /// Create a Vista instance with custom configuration.
    ///
    /// Fails with [`Config`](crate::VistaError::Config) if the
    /// configuration does not validate.
    pub fn with_config(config: VistaConfig) -> Result<Self> {
        config.validate()?;
        let engine = CleaningEngine::with_policy(config.fill.clone())?;
        Ok(Self { config, engine })
    }

    /// Load a JSON record array from disk.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let dataset = Dataset::load(path)?;
        debug!(path = %path.display(), rows = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Infer types, count missing values and find duplicate rows.
    pub fn profile(&self, dataset: &Dataset) -> DatasetProfile {
        Profiler::run(dataset)
    }

    /// Apply a cleaning action using the configured fill policy.
    pub fn clean(
        &self,
        dataset: &Dataset,
        profile: &DatasetProfile,
        action: CleaningAction,
    ) -> Result<Dataset> {
        self.engine.apply(dataset, profile, action)
    }

    /// Apply a cleaning action and return the result with its new profile
    /// and a report of what changed.
    pub fn clean_and_profile(
        &self,
        dataset: &Dataset,
        profile: &DatasetProfile,
        action: CleaningAction,
    ) -> Result<CleanOutcome> {
        self.engine.apply_and_profile(dataset, profile, action)
    }

    /// Rows `[start, end)` of a dataset, clamped to its bounds.
    pub fn page(&self, dataset: &Dataset, start: i64, end: i64) -> PageResult {
        preview::page(dataset, start, end)
    }

    /// Serve a page request, using the configured page size when the
    /// request has no end.
    pub fn preview(&self, dataset: &Dataset, request: PageRequest) -> PageResult {
        let (start, end) = request.resolve(self.config.page_size);
        preview::page(dataset, start, end)
    }

    /// Infer the type of a single column of values.
    pub fn infer_column_type<'a>(&self, values: impl IntoIterator<Item = &'a Value>) -> ColumnType {
        infer_column_type(values)
    }
}

impl Default for Vista {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FillPolicy, NumericFill};
    use crate::error::VistaError;
    use serde_json::json;

    fn dataset() -> Dataset {
        Dataset::from_reader(
            r#"[
                {"id": 1, "score": 10},
                {"id": 2, "score": null},
                {"id": 3, "score": 20},
                {"id": 4, "score": 90},
                {"id": 5, "score": 30},
                {"id": 6, "score": 50}
            ]"#
            .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_profile_then_clean() {
        let vista = Vista::new();
        let ds = dataset();
        let profile = vista.profile(&ds);
        assert_eq!(profile.missing_info()["score"], 1);

        let cleaned = vista.clean(&ds, &profile, CleaningAction::Fill).unwrap();
        assert_eq!(cleaned.row(1).unwrap()["score"], json!(40));
        assert!(vista.profile(&cleaned).is_clean());
    }

    #[test]
    fn test_configured_policy_is_used() {
        let fill = FillPolicy {
            numeric: NumericFill::Median,
            ..FillPolicy::default()
        };
        let vista = Vista::with_config(VistaConfig::default().with_fill(fill)).unwrap();
        let ds = dataset();
        let profile = vista.profile(&ds);

        let cleaned = vista.clean(&ds, &profile, CleaningAction::Fill).unwrap();
        assert_eq!(cleaned.row(1).unwrap()["score"], json!(30));
    }

    #[test]
    fn test_preview_uses_page_size() {
        let vista = Vista::with_config(VistaConfig::default().with_page_size(2)).unwrap();
        let page = vista.preview(&dataset(), PageRequest::default());
        assert_eq!(page.rows.len(), 2);
        assert!(page.has_more);

        let page = vista.preview(&dataset(), PageRequest { start: 5, end: None });
        assert_eq!(page.rows.len(), 1);
        assert!(!page.has_more);
    }

    #[test]
    fn test_clean_and_profile() {
        let vista = Vista::new();
        let ds = dataset();
        let profile = vista.profile(&ds);

        let outcome = vista
            .clean_and_profile(&ds, &profile, CleaningAction::Remove)
            .unwrap();
        assert_eq!(outcome.dataset.len(), 5);
        assert_eq!(outcome.report.rows_removed, 1);
        assert!(outcome.profile.is_clean());
    }

    #[test]
    fn test_with_config_rejects_invalid_settings() {
        let blank = FillPolicy {
            sentinel: String::new(),
            ..FillPolicy::default()
        };
        let err = Vista::with_config(VistaConfig::default().with_fill(blank)).unwrap_err();
        assert!(matches!(err, VistaError::Config(_)));

        let err = Vista::with_config(VistaConfig::default().with_page_size(0)).unwrap_err();
        assert!(matches!(err, VistaError::Config(_)));
    }
}
