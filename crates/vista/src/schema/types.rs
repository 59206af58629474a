//! Core type definitions for column metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred semantic type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Mostly values that parse as real numbers.
    Number,
    /// Mostly values that parse as calendar dates.
    Date,
    /// Everything else.
    #[default]
    Text,
}

impl ColumnType {
    /// Lowercase name, as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Inferred type.
    pub inferred_type: ColumnType,
    /// Number of missing values (`null` or `""`).
    pub missing_count: usize,
}

/// Name and type of a column, without quality counts. Sent with preview
/// pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub inferred_type: ColumnType,
}

impl From<&ColumnProfile> for ColumnSummary {
    fn from(profile: &ColumnProfile) -> Self {
        Self {
            name: profile.name.clone(),
            inferred_type: profile.inferred_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ColumnType::Number).unwrap(), "\"number\"");
        assert_eq!(serde_json::to_string(&ColumnType::Date).unwrap(), "\"date\"");
        let parsed: ColumnType = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, ColumnType::Text);
    }

    #[test]
    fn test_default_column_type_is_text() {
        assert_eq!(ColumnType::default(), ColumnType::Text);
    }

    #[test]
    fn test_display_matches_serialized_name() {
        assert_eq!(ColumnType::Date.to_string(), "date");
    }
}
