//! Histograms with a box-plot strip and summary statistics.

use super::lookup_column;
use super::render::{Align, bar_glyphs, box_strip, colorize, render_table};
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::profiler::statistics::summarize;
use crate::profiler::{count_nan, valid_values};
use crate::types::NumericSummary;
use crate::utils::{format_stat, format_thousands, is_numeric_dtype, pad_right, round_to};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An equal-width histogram bin covering `[range_start, range_end)`.
///
/// The last bin also includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: usize,
}

/// Bin `values` into `bins` equal-width bins over `range`, or over the
/// value range when none is given.
///
/// Values outside an explicit range are dropped. When all values are equal
/// a single bin holds them all.
pub fn build_histogram(
    values: &[f64],
    bins: usize,
    range: Option<(f64, f64)>,
) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }

    let (min, max) = match range {
        Some(bounds) => bounds,
        None => {
            if values.is_empty() {
                return Vec::new();
            }
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            (min, max)
        }
    };

    let in_range = values.iter().filter(|v| **v >= min && **v <= max);

    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            range_start: min,
            range_end: max,
            count: in_range.count(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in in_range {
        let idx = ((v - min) / width) as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            range_start: min + i as f64 * width,
            range_end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Summary statistics table shown next to a histogram.
///
/// Statistics are rounded to the configured number of decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistStats {
    pub min: f64,
    pub q1: f64,
    pub mean: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub std: f64,
    pub row_count: usize,
    pub non_blank_count: usize,
    /// Percentage of missing rows, rounded to 2 decimals; 0 for an empty column.
    pub percent_blank: f64,
}

impl HistStats {
    fn from_summary(
        summary: &NumericSummary,
        row_count: usize,
        non_blank: usize,
        decimals: usize,
    ) -> Self {
        let percent_blank = if row_count > 0 {
            round_to(100.0 * (1.0 - non_blank as f64 / row_count as f64), 2)
        } else {
            0.0
        };

        Self {
            min: round_to(summary.min, decimals),
            q1: round_to(summary.p25, decimals),
            mean: round_to(summary.mean, decimals),
            median: round_to(summary.median, decimals),
            q3: round_to(summary.p75, decimals),
            max: round_to(summary.max, decimals),
            std: round_to(summary.std, decimals),
            row_count,
            non_blank_count: non_blank,
            percent_blank,
        }
    }

    /// Statistic name and display value pairs, in table order.
    pub fn rows(&self, decimals: usize) -> Vec<(&'static str, String)> {
        vec![
            ("Min", format_stat(self.min, decimals)),
            ("25% Quartile", format_stat(self.q1, decimals)),
            ("Mean", format_stat(self.mean, decimals)),
            ("Median", format_stat(self.median, decimals)),
            ("75% Quartile", format_stat(self.q3, decimals)),
            ("Max", format_stat(self.max, decimals)),
            ("Standard Deviation", format_stat(self.std, decimals)),
            ("Count of Rows", format_thousands(self.row_count)),
            ("Count of Rows Not Blank", format_thousands(self.non_blank_count)),
            ("% Blank", format_stat(self.percent_blank, 2)),
        ]
    }
}

struct NumericColumn {
    summary: NumericSummary,
    values: Vec<f64>,
    row_count: usize,
}

fn numeric_column(df: &DataFrame, column: &str, config: &ExplorerConfig) -> Result<NumericColumn> {
    let series = lookup_column(df, column)?;
    if !is_numeric_dtype(series.dtype()) {
        return Err(ExplorerError::NotNumeric(column.to_string()));
    }

    let values = valid_values(series)?;
    debug!(
        "Column '{}': {} valid of {} rows ({} NaN)",
        column,
        values.len(),
        series.len(),
        count_nan(series)?
    );

    Ok(NumericColumn {
        summary: summarize(&values, config.std_convention.ddof()),
        values,
        row_count: series.len(),
    })
}

/// Compute the statistics table for a numeric column.
pub fn hist_data(df: &DataFrame, column: &str, config: &ExplorerConfig) -> Result<HistStats> {
    let col = numeric_column(df, column, config)?;
    Ok(HistStats::from_summary(
        &col.summary,
        col.row_count,
        col.values.len(),
        config.decimals,
    ))
}

/// A histogram of a numeric column with its box-plot summary.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
    /// Unrounded statistics of the valid values.
    pub summary: NumericSummary,
    pub stats: HistStats,
    /// Range the bins and the box strip are drawn over.
    pub range: Option<(f64, f64)>,
    /// Bar colour as `#rrggbb`, applied only when colour output is enabled.
    pub color: Option<String>,
    decimals: usize,
}

/// Build a histogram of `column` using `config.histogram_bins` bins and
/// the optional `config.x_range`.
pub fn hist(df: &DataFrame, column: &str, config: &ExplorerConfig) -> Result<Histogram> {
    let col = numeric_column(df, column, config)?;
    let bins = build_histogram(&col.values, config.histogram_bins, config.x_range);
    let range = config
        .x_range
        .or_else(|| (!col.values.is_empty()).then_some((col.summary.min, col.summary.max)));

    Ok(Histogram {
        column: column.to_string(),
        bins,
        stats: HistStats::from_summary(
            &col.summary,
            col.row_count,
            col.values.len(),
            config.decimals,
        ),
        summary: col.summary,
        range,
        color: None,
        decimals: config.decimals,
    })
}

impl Histogram {
    pub fn title(&self) -> String {
        format!("Histogram of {}", self.column)
    }

    /// Set the bar colour.
    pub fn with_color(mut self, hex: impl Into<String>) -> Self {
        self.color = Some(hex.into());
        self
    }

    /// Caption stating the mean and the interquartile range.
    pub fn caption(&self) -> String {
        let d = self.decimals;
        format!(
            "Mean = {}, IQR = {} to {} ({})",
            format_stat(self.summary.mean, d),
            format_stat(self.summary.p25, d),
            format_stat(self.summary.p75, d),
            format_stat(self.summary.iqr(), d)
        )
    }

    /// Render the title, box strip, bins, caption and statistics table.
    pub fn render(&self, config: &ExplorerConfig) -> String {
        let d = self.decimals;
        let color = if config.color {
            self.color.as_deref()
        } else {
            None
        };

        let mut out = String::new();
        out.push_str(&self.title());
        out.push('\n');
        out.push('\n');

        if self.bins.is_empty() {
            out.push_str("(no values)\n\n");
        } else {
            let labels: Vec<String> = self
                .bins
                .iter()
                .map(|b| {
                    format!(
                        "{} - {}",
                        format_stat(b.range_start, d),
                        format_stat(b.range_end, d)
                    )
                })
                .collect();
            let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

            if let Some((lo, hi)) = self.range {
                out.push_str(&format!(
                    "{}   {}\n",
                    " ".repeat(label_width),
                    box_strip(&self.summary, lo, hi, config.chart_width)
                ));
            }

            let max_count = self.bins.iter().map(|b| b.count).max().unwrap_or(0);
            for (bin, label) in self.bins.iter().zip(&labels) {
                out.push_str(&format!(
                    "{} | {} {}\n",
                    pad_right(label, label_width),
                    colorize(&bar_glyphs(bin.count, max_count, config.chart_width), color),
                    format_thousands(bin.count)
                ));
            }
            out.push_str(&format!("{} + Count\n\n", " ".repeat(label_width)));
        }

        out.push_str(&self.caption());
        out.push('\n');
        out.push('\n');

        let rows: Vec<Vec<String>> = self
            .stats
            .rows(d)
            .into_iter()
            .map(|(name, value)| vec![name.to_string(), value])
            .collect();
        out.push_str(&render_table(
            &["Statistic", "Value"],
            &rows,
            &[Align::Left, Align::Right],
        ));
        out
    }
}
