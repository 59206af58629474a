//! Exact duplicate row detection.
//!
//! Rows are compared through a canonical digest: the SHA-256 of the row's
//! `(column, value)` pairs sorted by column name. Column order and object
//! key order therefore never affect equality, and each row costs one hash
//! in a single left-to-right pass.

use std::collections::HashSet;

use serde_json::{Number, Value};
use sha2::{Digest, Sha256};

use crate::dataset::{Dataset, Record};

/// Canonical digest of one row.
pub type RowDigest = [u8; 32];

/// Finds rows that repeat an earlier row.
pub struct DuplicateDetector;

impl DuplicateDetector {
    /// Ascending indices of every row equal to some earlier row. First
    /// occurrences are not included.
    pub fn detect(dataset: &Dataset) -> Vec<usize> {
        Self::from_digests(&row_digests(dataset))
    }

    /// Duplicate indices from precomputed row digests.
    pub fn from_digests(digests: &[RowDigest]) -> Vec<usize> {
        let mut seen: HashSet<&RowDigest> = HashSet::with_capacity(digests.len());
        digests
            .iter()
            .enumerate()
            .filter_map(|(index, digest)| (!seen.insert(digest)).then_some(index))
            .collect()
    }
}

/// Digest every row, in order.
pub fn row_digests(dataset: &Dataset) -> Vec<RowDigest> {
    dataset.rows().iter().map(row_digest).collect()
}

/// Canonical digest of a row, independent of key order.
pub fn row_digest(record: &Record) -> RowDigest {
    let mut pairs: Vec<(&String, &Value)> = record.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut hasher = Sha256::new();
    let mut buf = String::new();
    for (name, value) in pairs {
        buf.clear();
        write_canonical(value, &mut buf);
        update_framed(&mut hasher, name.as_bytes());
        update_framed(&mut hasher, buf.as_bytes());
    }
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Fingerprint of a whole dataset version: column names plus ordered row
/// digests.
pub fn fingerprint(columns: &[String], digests: &[RowDigest]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((columns.len() as u64).to_le_bytes());
    for name in columns {
        update_framed(&mut hasher, name.as_bytes());
    }
    for digest in digests {
        hasher.update(digest);
    }
    format!("sha256:{:x}", hasher.finalize())
}

/// Length-prefix each part so adjacent fields cannot run together.
fn update_framed(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&canonical_number(n)),
        Value::String(s) => out.push_str(&format!("{:?}", s)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&format!("{:?}:", key));
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

/// `1` and `1.0` compare equal; other floats keep their shortest form.
fn canonical_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
