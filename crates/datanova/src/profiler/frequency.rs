//! Value counting and mode selection.

use crate::error::Result;
use crate::utils::is_float_dtype;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A distinct value and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Render every entry of a series as text, with `None` for missing entries.
///
/// NaN in float columns is treated as missing, and `-0.0` renders the
/// same as `0.0`.
pub(crate) fn text_values(series: &Series) -> Result<Vec<Option<String>>> {
    let as_text = match series.cast(&DataType::String) {
        Ok(s) => s,
        Err(_) => return Ok(any_value_text(series)),
    };

    let mut values: Vec<Option<String>> = as_text
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();

    if is_float_dtype(series.dtype()) {
        let floats = series.cast(&DataType::Float64)?;
        for (slot, v) in values.iter_mut().zip(floats.f64()?.into_iter()) {
            match v {
                Some(x) if x.is_nan() => *slot = None,
                Some(x) if x == 0.0 && x.is_sign_negative() => {
                    if let Some(text) = slot {
                        *text = text.trim_start_matches('-').to_string();
                    }
                }
                _ => {}
            }
        }
    }

    Ok(values)
}

/// Fallback for dtypes without a string cast (lists, structs).
fn any_value_text(series: &Series) -> Vec<Option<String>> {
    let series = series.rechunk();
    series
        .iter()
        .map(|av| {
            if av.is_null() {
                None
            } else {
                Some(av.to_string())
            }
        })
        .collect()
}

/// Count occurrences of each value, most frequent first.
///
/// Values with equal counts keep their first-appearance order.
pub fn count_values<I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<ValueCount> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push(ValueCount { value, count: 1 });
            }
        }
    }

    // stable: ties stay in first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Pick the most frequent value.
///
/// Ties resolve to the smallest value, numerically when `numeric` is set
/// and lexicographically otherwise.
pub fn select_mode(counts: &[ValueCount], numeric: bool) -> Option<String> {
    let top = counts.iter().map(|c| c.count).max()?;
    counts
        .iter()
        .filter(|c| c.count == top)
        .min_by(|a, b| compare_values(&a.value, &b.value, numeric))
        .map(|c| c.value.clone())
}

fn compare_values(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric && let (Ok(x), Ok(y)) = (a.parse::<f64>(), b.parse::<f64>()) {
        return x.total_cmp(&y);
    }
    a.cmp(b)
}
