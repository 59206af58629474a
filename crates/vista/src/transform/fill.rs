//! Imputation values for `Fill`.

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::config::{DateFill, FillPolicy, NumericFill, TextFill};
use crate::dataset::value::{as_date, as_number, is_missing};
use crate::dataset::Dataset;
use crate::schema::ColumnType;

/// Value to write into a column's missing cells, computed from the column's
/// present values.
pub(crate) fn fill_value(
    dataset: &Dataset,
    column: &str,
    inferred_type: ColumnType,
    policy: &FillPolicy,
) -> Value {
    let present = dataset.column_values(column).filter(|v| !is_missing(v));

    match inferred_type {
        ColumnType::Number => {
            let numbers: Vec<f64> = present.filter_map(as_number).collect();
            number_value(numeric_fill(numbers, policy.numeric))
        }
        ColumnType::Date => {
            let dated = present.filter_map(|v| as_date(v).map(|d| (d, v)));
            let pick = match policy.date {
                DateFill::Earliest => dated.min_by_key(|(d, _)| *d),
                DateFill::Latest => dated.max_by_key(|(d, _)| *d),
            };
            pick.map(|(_, v)| v.clone())
                .unwrap_or_else(|| Value::String(policy.sentinel.clone()))
        }
        ColumnType::Text => match policy.text {
            TextFill::Sentinel => Value::String(policy.sentinel.clone()),
            TextFill::Mode => mode(present).unwrap_or_else(|| Value::String(policy.sentinel.clone())),
        },
    }
}

fn numeric_fill(mut numbers: Vec<f64>, rule: NumericFill) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }

    match rule {
        NumericFill::Mean => numbers.iter().sum::<f64>() / numbers.len() as f64,
        NumericFill::Median => {
            numbers.sort_by(f64::total_cmp);
            let mid = numbers.len() / 2;
            if numbers.len() % 2 == 0 {
                (numbers[mid - 1] + numbers[mid]) / 2.0
            } else {
                numbers[mid]
            }
        }
        NumericFill::Zero => 0.0,
    }
}

/// Whole numbers are written as integers, everything else as a float.
fn number_value(x: f64) -> Value {
    if x.fract() == 0.0 && x.abs() < 9.0e15 {
        return Value::Number(Number::from(x as i64));
    }
    Number::from_f64(x)
        .map(Value::Number)
        .unwrap_or_else(|| Value::Number(Number::from(0)))
}

/// Most frequent value; the first one seen wins a tie.
fn mode<'a>(values: impl Iterator<Item = &'a Value>) -> Option<Value> {
    let mut counts: IndexMap<String, (usize, &Value)> = IndexMap::new();
    for v in values {
        counts.entry(v.to_string()).or_insert((0, v)).0 += 1;
    }

    let mut best: Option<(usize, &Value)> = None;
    for (count, value) in counts.into_values() {
        if best.is_none_or(|(n, _)| count > n) {
            best = Some((count, value));
        }
    }
    best.map(|(_, v)| v.clone())
}
