//! Cell-level classification: missing, numeric, date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Date-time layouts tried after RFC 3339 / RFC 2822.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // ISO date
    "%Y/%m/%d", // Alt ISO
    "%m/%d/%Y", // US date
    "%m-%d-%Y",
    "%d.%m.%Y", // European date
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// The bucket a single cell falls into during type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// `null` or the empty string.
    Missing,
    /// A number, or a string that parses as a finite real number.
    Numeric,
    /// A non-numeric string that parses as a calendar date.
    Date,
    /// Anything else (free text, booleans, nested values).
    Other,
}

/// Classify a cell. Numeric is tested before date, so a value that
/// satisfies both is numeric.
pub fn classify(value: &Value) -> ValueClass {
    if is_missing(value) {
        ValueClass::Missing
    } else if as_number(value).is_some() {
        ValueClass::Numeric
    } else if as_date(value).is_some() {
        ValueClass::Date
    } else {
        ValueClass::Other
    }
}

/// Check if a value is missing. Only `null` and `""` count; `0`, `false`
/// and whitespace are present values.
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Numeric reading of a value, if it has one.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Calendar reading of a value, if it has one.
pub fn as_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date(s.trim()),
        _ => None,
    }
}

fn parse_date(s: &str) -> Option<NaiveDateTime> {
    // Every accepted layout needs at least a day and a year
    if s.len() < 6 || !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Render a value for human-readable reports (strings without quotes).
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
