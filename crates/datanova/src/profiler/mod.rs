//! Column profiling.
//!
//! The profiler produces one [`ColumnSummary`] per column:
//! - declared type and dtype category
//! - missing count and percentage blank (nulls, plus NaN in float columns)
//! - distinct count and most frequent value
//! - descriptive statistics for numeric columns

pub mod frequency;
pub mod statistics;

use crate::config::{ExplorerConfig, StdConvention};
use crate::error::Result;
use crate::types::{ColumnSummary, ProfileReport};
use crate::utils::{DtypeCategory, format_thousands, get_dtype_category};
use polars::prelude::*;
use tracing::{debug, info};

pub(crate) use frequency::text_values;
pub(crate) use statistics::{count_nan, valid_values};

/// Profile a dataset with the default configuration.
pub fn profile(df: &DataFrame) -> Result<ProfileReport> {
    Profiler::default().profile(df)
}

/// Data profiler for summarising every column of a dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Profiler {
    std_convention: StdConvention,
}

impl Profiler {
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            std_convention: config.std_convention,
        }
    }

    /// Profile an entire dataset.
    ///
    /// The input is not modified. A dataset without columns yields an
    /// empty report.
    pub fn profile(&self, df: &DataFrame) -> Result<ProfileReport> {
        info!(
            "ROW TOTAL = {} COLUMNS = {}",
            format_thousands(df.height()),
            format_thousands(df.width())
        );

        let columns = df
            .get_columns()
            .iter()
            .map(|column| self.profile_column(column.as_materialized_series()))
            .collect::<Result<Vec<_>>>()?;

        Ok(ProfileReport {
            row_count: df.height(),
            column_count: df.width(),
            columns,
        })
    }

    /// Profile a single column.
    pub fn profile_column(&self, series: &Series) -> Result<ColumnSummary> {
        let row_count = series.len();
        let kind = get_dtype_category(series.dtype());

        let missing_count = series.null_count() + count_nan(series)?;
        let percent_blank = if row_count > 0 {
            missing_count as f64 / row_count as f64 * 100.0
        } else {
            0.0
        };

        let counts = frequency::count_values(text_values(series)?.into_iter().flatten());
        let unique_count = counts.len();
        let most_frequent = frequency::select_mode(&counts, kind == DtypeCategory::Numeric);

        let numeric = if kind == DtypeCategory::Numeric {
            let values = valid_values(series)?;
            Some(statistics::summarize(&values, self.std_convention.ddof()))
        } else {
            None
        };

        debug!(
            "Profiled column '{}' ({}): {} missing, {} unique",
            series.name(),
            series.dtype(),
            missing_count,
            unique_count
        );

        Ok(ColumnSummary {
            name: series.name().to_string(),
            dtype: series.dtype().to_string(),
            kind,
            row_count,
            missing_count,
            percent_blank,
            unique_count,
            most_frequent,
            numeric,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wine_df() -> DataFrame {
        df![
            "country" => [Some("Italy"), Some("Portugal"), None, Some("Italy"), Some("US")],
            "points" => [87i64, 87, 90, 86, 88],
            "price" => [Some(15.0), None, Some(20.0), Some(15.0), Some(65.0)],
        ]
        .unwrap()
    }

    #[test]
    fn test_profile_one_row_per_column_in_order() {
        let report = profile(&wine_df()).unwrap();
        let names: Vec<&str> = report.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["country", "points", "price"]);
        assert_eq!(report.row_count, 5);
        assert_eq!(report.column_count, 3);
    }

    #[test]
    fn test_profile_text_column() {
        let report = profile(&wine_df()).unwrap();
        let country = report.column("country").unwrap();

        assert_eq!(country.dtype, "str");
        assert_eq!(country.kind, DtypeCategory::Text);
        assert_eq!(country.missing_count, 1);
        assert_eq!(country.percent_blank, 20.0);
        assert_eq!(country.unique_count, 3);
        assert_eq!(country.most_frequent.as_deref(), Some("Italy"));
        assert!(country.numeric.is_none());
    }

    #[test]
    fn test_profile_integer_column() {
        let report = profile(&wine_df()).unwrap();
        let points = report.column("points").unwrap();

        assert_eq!(points.missing_count, 0);
        assert_eq!(points.unique_count, 4);
        assert_eq!(points.most_frequent.as_deref(), Some("87"));

        let stats = points.numeric.unwrap();
        assert_eq!(stats.min, 86.0);
        assert_eq!(stats.p25, 87.0);
        assert_eq!(stats.median, 87.0);
        assert_eq!(stats.p75, 88.0);
        assert_eq!(stats.max, 90.0);
        assert!((stats.mean - 87.6).abs() < 1e-9);
    }

    #[test]
    fn test_profile_float_column_with_missing() {
        let report = profile(&wine_df()).unwrap();
        let price = report.column("price").unwrap();

        assert_eq!(price.missing_count, 1);
        assert_eq!(price.non_missing_count(), 4);
        assert_eq!(price.unique_count, 3);
        let stats = price.numeric.unwrap();
        assert_eq!(stats.min, 15.0);
        assert_eq!(stats.max, 65.0);
        assert_eq!(stats.median, 17.5);
    }

    #[test]
    fn test_profile_nan_counts_as_missing() {
        let df = df!["x" => [Some(1.0), Some(f64::NAN), None, Some(3.0)]].unwrap();
        let report = profile(&df).unwrap();
        let x = &report.columns[0];
        assert_eq!(x.missing_count, 2);
        assert_eq!(x.unique_count, 2);
        assert_eq!(x.numeric.unwrap().mean, 2.0);
    }

    #[test]
    fn test_profile_infinite_values_keep_quantile_order() {
        let df = df!["x" => [1.0, f64::INFINITY, f64::INFINITY, f64::INFINITY]].unwrap();
        let report = profile(&df).unwrap();
        let stats = report.columns[0].numeric.unwrap();

        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.median, f64::INFINITY);
        assert!(stats.min <= stats.p25);
        assert!(stats.p25 <= stats.median);
        assert!(stats.median <= stats.p75);
        assert!(stats.p75 <= stats.max);
    }

    #[test]
    fn test_profile_negative_zero_is_not_distinct() {
        let df = df!["x" => [0.0, -0.0, 2.0]].unwrap();
        let report = profile(&df).unwrap();
        assert_eq!(report.columns[0].unique_count, 2);
    }

    #[test]
    fn test_profile_numeric_mode_tie_prefers_smallest() {
        let df = df!["n" => [10i64, 9, 10, 9, 100]].unwrap();
        let report = profile(&df).unwrap();
        assert_eq!(report.columns[0].most_frequent.as_deref(), Some("9"));
    }

    #[test]
    fn test_profile_all_missing_numeric_column() {
        let df = df!["empty" => [None::<f64>, None, None]].unwrap();
        let report = profile(&df).unwrap();
        let col = &report.columns[0];

        assert_eq!(col.missing_count, 3);
        assert_eq!(col.percent_blank, 100.0);
        assert_eq!(col.unique_count, 0);
        assert_eq!(col.most_frequent, None);
        assert!(col.is_all_missing());
        assert!(col.numeric.unwrap().mean.is_nan());
    }

    #[test]
    fn test_profile_zero_rows() {
        let df = df![
            "a" => Vec::<i64>::new(),
            "b" => Vec::<String>::new(),
        ]
        .unwrap();
        let report = profile(&df).unwrap();

        assert_eq!(report.columns.len(), 2);
        for col in &report.columns {
            assert_eq!(col.missing_count, 0);
            assert_eq!(col.percent_blank, 0.0);
            assert_eq!(col.unique_count, 0);
        }
    }

    #[test]
    fn test_profile_empty_dataset() {
        let report = profile(&DataFrame::empty()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.row_count, 0);
        assert_eq!(report.column_count, 0);
    }

    #[test]
    fn test_profile_boolean_column_has_no_numeric_stats() {
        let df = df!["flag" => [true, false, true]].unwrap();
        let report = profile(&df).unwrap();
        let flag = &report.columns[0];

        assert_eq!(flag.kind, DtypeCategory::Boolean);
        assert_eq!(flag.most_frequent.as_deref(), Some("true"));
        assert!(flag.numeric.is_none());
    }

    #[test]
    fn test_profile_population_std() {
        let df = df!["v" => [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]].unwrap();
        let config = ExplorerConfig::builder()
            .std_convention(StdConvention::Population)
            .build()
            .unwrap();
        let report = Profiler::new(&config).profile(&df).unwrap();
        assert!((report.columns[0].numeric.unwrap().std - 2.0).abs() < 1e-12);
    }
}
