use crate::error::Result;
use crate::utils::{DtypeCategory, round_to};
use polars::prelude::*;
use serde::Serialize;

/// Display headers of the profile table, in output order.
pub const DISPLAY_COLUMNS: [&str; 13] = [
    "Variable Name",
    "Variable Type",
    "Missing Count",
    "% Blank",
    "Unique Values",
    "Most Frequent Value",
    "Mean",
    "Standard Deviation",
    "Min",
    "25%",
    "Median",
    "75%",
    "Max",
];

/// Descriptive statistics of a numeric column.
///
/// Every field is NaN when the column has no valid values; `std` is also
/// NaN for a single valid value under the sample convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl NumericSummary {
    /// Summary of a column with no valid values.
    pub fn empty() -> Self {
        Self {
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            median: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Interquartile range (p75 - p25).
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }

    /// Statistics in display order: mean, std, min, 25%, median, 75%, max.
    pub fn display_values(&self) -> [f64; 7] {
        [
            self.mean,
            self.std,
            self.min,
            self.p25,
            self.median,
            self.p75,
            self.max,
        ]
    }
}

/// One row of profiling output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub kind: DtypeCategory,
    pub row_count: usize,
    pub missing_count: usize,
    /// Unrounded `missing_count / row_count * 100`; 0 for zero rows.
    pub percent_blank: f64,
    pub unique_count: usize,
    pub most_frequent: Option<String>,
    /// Present if and only if the column's declared type is numeric.
    pub numeric: Option<NumericSummary>,
}

impl ColumnSummary {
    pub fn non_missing_count(&self) -> usize {
        self.row_count - self.missing_count
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric.is_some()
    }

    /// Whether every entry of the column is missing.
    pub fn is_all_missing(&self) -> bool {
        self.missing_count == self.row_count
    }
}

/// Result of profiling a dataset: one [`ColumnSummary`] per column, in column order.
///
/// Serialize-only: NaN statistics are written as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnSummary>,
}

impl ProfileReport {
    /// Look up a column summary by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Build the display table as a DataFrame with the [`DISPLAY_COLUMNS`] headers.
    ///
    /// Statistics are rounded to `decimals`; `% Blank` to a whole number.
    /// Absent or NaN statistics become nulls.
    pub fn to_dataframe(&self, decimals: usize) -> Result<DataFrame> {
        let names: Vec<String> = self.columns.iter().map(|c| c.name.clone()).collect();
        let dtypes: Vec<String> = self.columns.iter().map(|c| c.dtype.clone()).collect();
        let missing: Vec<u64> = self.columns.iter().map(|c| c.missing_count as u64).collect();
        let blank: Vec<i64> = self
            .columns
            .iter()
            .map(|c| c.percent_blank.round() as i64)
            .collect();
        let unique: Vec<u64> = self.columns.iter().map(|c| c.unique_count as u64).collect();
        let mode: Vec<Option<String>> = self
            .columns
            .iter()
            .map(|c| c.most_frequent.clone())
            .collect();

        let stat = |idx: usize| -> Vec<Option<f64>> {
            self.columns
                .iter()
                .map(|c| {
                    c.numeric
                        .map(|n| n.display_values()[idx])
                        .filter(|v| !v.is_nan())
                        .map(|v| round_to(v, decimals))
                })
                .collect()
        };

        let df = df![
            DISPLAY_COLUMNS[0] => names,
            DISPLAY_COLUMNS[1] => dtypes,
            DISPLAY_COLUMNS[2] => missing,
            DISPLAY_COLUMNS[3] => blank,
            DISPLAY_COLUMNS[4] => unique,
            DISPLAY_COLUMNS[5] => mode,
            DISPLAY_COLUMNS[6] => stat(0),
            DISPLAY_COLUMNS[7] => stat(1),
            DISPLAY_COLUMNS[8] => stat(2),
            DISPLAY_COLUMNS[9] => stat(3),
            DISPLAY_COLUMNS[10] => stat(4),
            DISPLAY_COLUMNS[11] => stat(5),
            DISPLAY_COLUMNS[12] => stat(6),
        ]?;

        Ok(df)
    }
}
