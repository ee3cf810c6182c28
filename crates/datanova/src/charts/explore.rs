//! One-call exploratory pass over every column.

use super::{Chart, bar, hist};
use crate::config::ExplorerConfig;
use crate::error::{Result, ResultExt};
use crate::profiler::count_nan;
use crate::utils::{DtypeCategory, series_dtype_category};
use polars::prelude::*;
use tracing::{debug, info};

/// Colours cycled across the charts of an EDA pass.
pub const PALETTE: [&str; 8] = [
    "#826fc2", "#143499", "#4d9b1e", "#f865c6", "#ecd378", "#ba004c", "#8f4400", "#f65656",
];

/// Palette colour for the column at `index`.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn is_all_missing(series: &Series) -> Result<bool> {
    Ok(series.null_count() + count_nan(series)? == series.len())
}

/// Chart every column of a dataset.
///
/// Numeric columns get a histogram and text columns a bar chart. Columns
/// that are entirely missing, and columns of any other type, are skipped.
/// Colours follow the column's position in the dataset, so skipped columns
/// still use up a palette entry.
pub fn eda(df: &DataFrame, config: &ExplorerConfig) -> Result<Vec<Chart>> {
    let mut charts = Vec::new();

    for (index, column) in df.get_columns().iter().enumerate() {
        let series = column.as_materialized_series();
        let name = series.name().as_str();

        if is_all_missing(series)? {
            debug!("Skipping '{}': every value is missing", name);
            continue;
        }

        let color = palette_color(index);
        let chart = match series_dtype_category(series) {
            DtypeCategory::Numeric => Chart::Histogram(
                hist(df, name, config)
                    .context(format!("Building histogram for '{}'", name))?
                    .with_color(color),
            ),
            DtypeCategory::Text => Chart::Bar(
                bar(df, name, config)
                    .context(format!("Building bar chart for '{}'", name))?
                    .with_color(color),
            ),
            other => {
                debug!("Skipping '{}': {:?} columns are not charted", name, other);
                continue;
            }
        };
        charts.push(chart);
    }

    info!("EDA produced {} charts for {} columns", charts.len(), df.width());
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_df() -> DataFrame {
        df![
            "country" => ["Italy", "US", "Italy", "Chile"],
            "points" => [87i64, 88, 86, 90],
            "empty" => [None::<f64>, None, None, None],
            "organic" => [true, false, false, true],
            "price" => [Some(15.0), None, Some(22.5), Some(40.0)],
        ]
        .unwrap()
    }

    #[test]
    fn test_eda_routes_by_type_and_skips() {
        let charts = eda(&mixed_df(), &ExplorerConfig::default()).unwrap();
        let summary: Vec<(&str, bool)> = charts
            .iter()
            .map(|c| (c.column(), matches!(c, Chart::Histogram(_))))
            .collect();

        assert_eq!(
            summary,
            vec![("country", false), ("points", true), ("price", true)]
        );
    }

    #[test]
    fn test_eda_cycles_palette() {
        let charts = eda(&mixed_df(), &ExplorerConfig::default()).unwrap();
        let colors: Vec<Option<&str>> = charts
            .iter()
            .map(|c| match c {
                Chart::Bar(b) => b.color.as_deref(),
                Chart::Histogram(h) => h.color.as_deref(),
            })
            .collect();
        // country, points and price sit at columns 0, 1 and 4
        assert_eq!(colors, vec![Some(PALETTE[0]), Some(PALETTE[1]), Some(PALETTE[4])]);
        assert_eq!(palette_color(9), PALETTE[1]);
    }

    #[test]
    fn test_eda_skipped_columns_use_up_colors() {
        let df = df![
            "empty" => [None::<f64>, None],
            "flag" => [true, false],
            "points" => [87i64, 90],
        ]
        .unwrap();
        let charts = eda(&df, &ExplorerConfig::default()).unwrap();

        assert_eq!(charts.len(), 1);
        match &charts[0] {
            Chart::Histogram(h) => assert_eq!(h.color.as_deref(), Some("#4d9b1e")),
            Chart::Bar(_) => panic!("points should be a histogram"),
        }
    }

    #[test]
    fn test_eda_titles() {
        let charts = eda(&mixed_df(), &ExplorerConfig::default()).unwrap();
        assert_eq!(charts[0].title(), "Bar Chart of country");
        assert_eq!(charts[1].title(), "Histogram of points");
    }

    #[test]
    fn test_eda_empty_dataset() {
        let charts = eda(&DataFrame::empty(), &ExplorerConfig::default()).unwrap();
        assert!(charts.is_empty());
    }
}
