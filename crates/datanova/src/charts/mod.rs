//! Chart data and text-rendered charts.
//!
//! Each chart is built in two steps: a data routine computes the table the
//! chart is drawn from ([`bar_chart_data`], [`hist_data`]), and a chart
//! builder ([`bar`], [`hist`]) combines it with presentation settings into a
//! value that can be rendered to text.

mod bar_chart;
mod explore;
mod histogram;
pub mod render;

pub use bar_chart::{BarChart, BarChartData, FrequencyRow, bar, bar_chart_data};
pub use explore::{PALETTE, eda, palette_color};
pub use histogram::{HistStats, Histogram, HistogramBin, build_histogram, hist, hist_data};

use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use polars::prelude::*;
use serde::Serialize;

/// A rendered-on-demand chart for one column.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Chart {
    Bar(BarChart),
    Histogram(Histogram),
}

impl Chart {
    /// Name of the column this chart describes.
    pub fn column(&self) -> &str {
        match self {
            Chart::Bar(chart) => &chart.data.column,
            Chart::Histogram(chart) => &chart.column,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Chart::Bar(chart) => chart.title(),
            Chart::Histogram(chart) => chart.title(),
        }
    }

    pub fn render(&self, config: &ExplorerConfig) -> String {
        match self {
            Chart::Bar(chart) => chart.render(config),
            Chart::Histogram(chart) => chart.render(config),
        }
    }
}

/// Look up a column by name, mapping a miss to [`ExplorerError::ColumnNotFound`].
pub(crate) fn lookup_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map(|c| c.as_materialized_series())
        .map_err(|_| ExplorerError::ColumnNotFound(name.to_string()))
}
