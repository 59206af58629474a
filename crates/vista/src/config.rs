//! Engine configuration: fill policy and preview page size.
//!
//! Every field has a default, so a config file only needs the settings it
//! changes:
//!
//! ```json
//! { "fill": { "numeric": "median", "text": "mode" }, "page_size": 50 }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VistaError};

/// Default number of rows in a preview page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Default placeholder written into text cells (and undatable date cells)
/// by `Fill`.
pub const DEFAULT_SENTINEL: &str = "unknown";

/// How `Fill` imputes missing values in number columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NumericFill {
    /// Mean of the column's numeric values.
    #[default]
    Mean,
    /// Median of the column's numeric values.
    Median,
    /// The constant 0.
    Zero,
}

/// How `Fill` imputes missing values in date columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateFill {
    /// Earliest date present in the column.
    #[default]
    Earliest,
    /// Latest date present in the column.
    Latest,
}

/// How `Fill` imputes missing values in text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextFill {
    /// The configured sentinel string.
    #[default]
    Sentinel,
    /// The most frequent value in the column.
    Mode,
}

/// Imputation rules used by `Fill`, one per inferred column type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillPolicy {
    pub numeric: NumericFill,
    pub date: DateFill,
    pub text: TextFill,
    /// Placeholder used by `TextFill::Sentinel` and whenever a column has
    /// nothing to impute from.
    pub sentinel: String,
}

impl Default for FillPolicy {
    fn default() -> Self {
        Self {
            numeric: NumericFill::default(),
            date: DateFill::default(),
            text: TextFill::default(),
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl FillPolicy {
    /// Reject a sentinel that would itself count as a missing value.
    pub fn validate(&self) -> Result<()> {
        if self.sentinel.is_empty() {
            return Err(VistaError::Config(
                "fill.sentinel must not be empty, it would read as missing".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the [`Vista`](crate::Vista) engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VistaConfig {
    /// Imputation rules for `Fill`.
    pub fill: FillPolicy,
    /// Rows in a preview page when the caller gives no end index.
    pub page_size: usize,
}

impl Default for VistaConfig {
    fn default() -> Self {
        Self {
            fill: FillPolicy::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl VistaConfig {
    /// Set the fill policy.
    pub fn with_fill(mut self, fill: FillPolicy) -> Self {
        self.fill = fill;
        self
    }

    /// Set the default preview page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(VistaError::Config("page_size must be at least 1".to_string()));
        }
        self.fill.validate()
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| VistaError::io(path, e))?;
        let config: VistaConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }
}
