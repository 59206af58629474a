//! Synthetic employee dataset for demos and benchmarks.

use serde_json::{Value, json};

use crate::dataset::{Dataset, Record};

const NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry",
];
const DEPARTMENTS: &[&str] = &["Engineering", "Marketing", "Sales", "HR", "Finance"];
const COLUMNS: &[&str] = &["id", "name", "department", "salary", "age", "joinDate"];

/// Share of cells blanked in a dirty sample.
const BLANK_RATE: f64 = 0.05;
/// A dirty sample gets one duplicate per this many rows (rounded up).
const DUPLICATE_EVERY: usize = 20;

/// Options for [`generate`].
#[derive(Debug, Clone, Default)]
pub struct SampleOptions {
    /// Number of generated rows (before duplicates are appended).
    pub rows: usize,
    /// Blank some cells and append some duplicate rows.
    pub dirty: bool,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

impl SampleOptions {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generate an employee table: id, name, department, salary, age, joinDate.
pub fn generate(options: &SampleOptions) -> Dataset {
    let mut rng = match options.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let mut rows: Vec<Record> = (0..options.rows)
        .map(|i| {
            let join_date = format!(
                "{}-{:02}-{:02}",
                2020 + rng.u32(0..4),
                rng.u32(1..=12),
                rng.u32(1..=28)
            );
            let values = [
                json!(i + 1),
                json!(NAMES[rng.usize(..NAMES.len())]),
                json!(DEPARTMENTS[rng.usize(..DEPARTMENTS.len())]),
                json!(rng.u32(30_000..130_000)),
                json!(rng.u32(22..62)),
                json!(join_date),
            ];
            COLUMNS
                .iter()
                .map(|c| c.to_string())
                .zip(values)
                .collect()
        })
        .collect();

    if options.dirty {
        dirty_up(&mut rows, &mut rng);
    }

    Dataset::empty(COLUMNS.iter().map(|c| c.to_string()).collect()).with_rows(rows)
}

/// Blank non-id cells and append copies of random rows.
fn dirty_up(rows: &mut Vec<Record>, rng: &mut fastrand::Rng) {
    for row in rows.iter_mut() {
        for (name, cell) in row.iter_mut() {
            if name != "id" && rng.f64() < BLANK_RATE {
                *cell = if rng.bool() { Value::Null } else { json!("") };
            }
        }
    }

    if rows.is_empty() {
        return;
    }
    for _ in 0..rows.len().div_ceil(DUPLICATE_EVERY) {
        let pick = rows[rng.usize(..rows.len())].clone();
        rows.push(pick);
    }
}
