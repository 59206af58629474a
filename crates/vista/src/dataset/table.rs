//! The in-memory dataset: ordered records sharing one column set.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, VistaError};

/// One row: column name to value, in column order.
pub type Record = IndexMap<String, Value>;

static NULL: Value = Value::Null;

/// Ordered records plus the ordered column names they all share.
///
/// A dataset is an immutable value. Cleaning produces a new `Dataset`
/// rather than editing this one, so readers holding an older version keep
/// a consistent view.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Dataset {
    /// Create a dataset, checking that every record has exactly `columns`
    /// as its keys.
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(VistaError::Schema {
                    row: 0,
                    message: format!("duplicate column name '{}'", name),
                });
            }
        }

        let mut ordered = Vec::with_capacity(rows.len());
        for (row, record) in rows.into_iter().enumerate() {
            if record.len() != columns.len() {
                return Err(VistaError::Schema {
                    row,
                    message: format!(
                        "expected {} columns, found {}",
                        columns.len(),
                        record.len()
                    ),
                });
            }
            ordered.push(reorder(record, &columns, row)?);
        }

        Ok(Self {
            columns,
            rows: ordered,
        })
    }

    /// Build a dataset from decoded records.
    ///
    /// Column names come from the first record. A later record that lacks a
    /// column gets an explicit `null` for it; a record carrying a column the
    /// first one did not have is rejected.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let columns: Vec<String> = records
            .first()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default();

        let mut rows = Vec::with_capacity(records.len());
        for (row, mut record) in records.into_iter().enumerate() {
            if let Some(unknown) = record.keys().find(|k| !columns.contains(k)) {
                return Err(VistaError::Schema {
                    row,
                    message: format!("unknown column '{}'", unknown),
                });
            }
            for name in &columns {
                if !record.contains_key(name) {
                    record.insert(name.clone(), Value::Null);
                }
            }
            rows.push(reorder(record, &columns, row)?);
        }

        Ok(Self { columns, rows })
    }

    /// An empty dataset with a fixed column set.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records, in order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get a specific record.
    pub fn row(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    /// All values of one column, in row order.
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(name).unwrap_or(&NULL))
    }

    /// Build a sibling dataset with the same columns and different rows.
    ///
    /// Only used by transforms that preserve the record invariant.
    pub(crate) fn with_rows(&self, rows: Vec<Record>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Decode a dataset from a JSON array of records.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// Load a dataset from a JSON file holding an array of records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| VistaError::io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Save the dataset as a pretty-printed JSON array of records.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| VistaError::io(parent, e))?;
            }
        }

        let file = File::create(path).map_err(|e| VistaError::io(path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

/// Put a record's entries in dataset column order.
fn reorder(mut record: Record, columns: &[String], row: usize) -> Result<Record> {
    let mut ordered = Record::with_capacity(columns.len());
    for name in columns {
        let value = record.swap_remove(name).ok_or_else(|| VistaError::Schema {
            row,
            message: format!("missing column '{}'", name),
        })?;
        ordered.insert(name.clone(), value);
    }
    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_from_records_takes_columns_from_first_row() {
        let ds = Dataset::from_records(vec![
            record(&[("a", json!(1)), ("b", json!("x"))]),
            record(&[("b", json!("y")), ("a", json!(2))]),
        ])
        .unwrap();

        assert_eq!(ds.columns(), &["a", "b"]);
        assert_eq!(ds.len(), 2);
        // Second record is re-ordered to column order
        let keys: Vec<&String> = ds.row(1).unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_from_records_fills_absent_keys_with_null() {
        let ds = Dataset::from_records(vec![
            record(&[("a", json!(1)), ("b", json!("x"))]),
            record(&[("a", json!(2))]),
        ])
        .unwrap();

        assert_eq!(ds.row(1).unwrap()["b"], Value::Null);
    }

    #[test]
    fn test_from_records_rejects_unknown_column() {
        let err = Dataset::from_records(vec![
            record(&[("a", json!(1))]),
            record(&[("a", json!(2)), ("z", json!(3))]),
        ])
        .unwrap_err();

        assert!(matches!(err, VistaError::Schema { row: 1, .. }));
    }

    #[test]
    fn test_new_is_strict() {
        let columns = vec!["a".to_string(), "b".to_string()];
        let err = Dataset::new(columns.clone(), vec![record(&[("a", json!(1))])]).unwrap_err();
        assert!(matches!(err, VistaError::Schema { row: 0, .. }));

        let err = Dataset::new(
            columns,
            vec![record(&[("a", json!(1)), ("c", json!(2))])],
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing column 'b'"));
    }

    #[test]
    fn test_new_rejects_duplicate_column_names() {
        let err = Dataset::new(vec!["a".to_string(), "a".to_string()], vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate column"));
    }

    #[test]
    fn test_empty_input_has_no_columns() {
        let ds = Dataset::from_records(vec![]).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.column_count(), 0);
    }

    #[test]
    fn test_column_values() {
        let ds = Dataset::from_records(vec![
            record(&[("a", json!(1))]),
            record(&[("a", json!(2))]),
        ])
        .unwrap();
        let values: Vec<&Value> = ds.column_values("a").collect();
        assert_eq!(values, vec![&json!(1), &json!(2)]);
    }

    #[test]
    fn test_serializes_as_record_array() {
        let ds = Dataset::from_records(vec![record(&[("a", json!(1)), ("b", Value::Null)])]).unwrap();
        let text = serde_json::to_string(&ds).unwrap();
        assert_eq!(text, r#"[{"a":1,"b":null}]"#);
    }

    #[test]
    fn test_from_reader() {
        let json = r#"[{"x": 1, "y": "a"}, {"x": 2, "y": ""}]"#;
        let ds = Dataset::from_reader(json.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.columns(), &["x", "y"]);
    }

    #[test]
    fn test_from_reader_rejects_non_array() {
        let err = Dataset::from_reader(r#"{"x": 1}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, VistaError::Json(_)));
    }
}
