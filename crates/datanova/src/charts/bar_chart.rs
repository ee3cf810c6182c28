//! Top-N category bar charts.

use super::lookup_column;
use super::render::{Align, bar_glyphs, colorize, render_table};
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::profiler::frequency::count_values;
use crate::profiler::text_values;
use crate::utils::{format_stat, format_thousands, pad_right, round_to, truncate_label};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Label given to missing entries when none is configured.
pub const DEFAULT_NA_LABEL: &str = "N/A";

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub value: String,
    pub count: usize,
    /// Share of all rows, rounded to 2 decimals.
    pub percentage: f64,
    /// Running total of `percentage`, rounded to 2 decimals.
    pub cumulative_percentage: f64,
}

/// Frequency table behind a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartData {
    pub column: String,
    /// Rows in the column, missing entries included.
    pub total_count: usize,
    /// Distinct values, with missing entries counted as one value.
    pub distinct_count: usize,
    pub rows: Vec<FrequencyRow>,
}

/// Compute the top-`top_n` frequency table of a column.
///
/// Missing entries are counted under `N/A`. Rows are ordered by count,
/// highest first; equal counts keep first-appearance order.
pub fn bar_chart_data(df: &DataFrame, column: &str, top_n: usize) -> Result<BarChartData> {
    frequency_table(df, column, top_n, DEFAULT_NA_LABEL)
}

fn frequency_table(
    df: &DataFrame,
    column: &str,
    top_n: usize,
    na_label: &str,
) -> Result<BarChartData> {
    if top_n == 0 {
        return Err(ExplorerError::InvalidInput(
            "top_n must be at least 1".to_string(),
        ));
    }

    let series = lookup_column(df, column)?;
    let total_count = series.len();
    let labelled = text_values(series)?
        .into_iter()
        .map(|v| v.unwrap_or_else(|| na_label.to_string()));
    let counts = count_values(labelled);
    let distinct_count = counts.len();

    let mut cumulative = 0.0;
    let rows = counts
        .into_iter()
        .map(|vc| {
            let percentage = round_to(vc.count as f64 / total_count as f64 * 100.0, 2);
            cumulative += percentage;
            FrequencyRow {
                value: vc.value,
                count: vc.count,
                percentage,
                cumulative_percentage: round_to(cumulative, 2),
            }
        })
        .take(top_n)
        .collect();

    debug!(
        "Frequency table for '{}': {} distinct values over {} rows",
        column, distinct_count, total_count
    );

    Ok(BarChartData {
        column: column.to_string(),
        total_count,
        distinct_count,
        rows,
    })
}

/// A horizontal bar chart of the most common values of a column.
#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub data: BarChartData,
    /// Bar colour as `#rrggbb`, applied only when colour output is enabled.
    pub color: Option<String>,
}

/// Build a bar chart of the `config.top_n` most common values of `column`.
///
/// Works on columns of any type; values are shown as text.
pub fn bar(df: &DataFrame, column: &str, config: &ExplorerConfig) -> Result<BarChart> {
    let data = frequency_table(df, column, config.top_n, &config.na_label)?;
    Ok(BarChart { data, color: None })
}

impl BarChart {
    pub fn title(&self) -> String {
        format!("Bar Chart of {}", self.data.column)
    }

    /// Set the bar colour.
    pub fn with_color(mut self, hex: impl Into<String>) -> Self {
        self.color = Some(hex.into());
        self
    }

    /// Render the chart followed by its frequency table.
    pub fn render(&self, config: &ExplorerConfig) -> String {
        let color = if config.color {
            self.color.as_deref()
        } else {
            None
        };

        let labels: Vec<String> = self
            .data
            .rows
            .iter()
            .map(|r| truncate_label(&r.value, config.label_width))
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let max_count = self.data.rows.first().map(|r| r.count).unwrap_or(0);

        let mut out = String::new();
        out.push_str(&self.title());
        out.push('\n');
        out.push('\n');

        for (row, label) in self.data.rows.iter().zip(&labels) {
            let bar = bar_glyphs(row.count, max_count, config.chart_width);
            out.push_str(&format!(
                "{} | {} {}\n",
                pad_right(label, label_width),
                colorize(&bar, color),
                format_thousands(row.count)
            ));
        }
        out.push_str(&format!(
            "{} + {}\n",
            " ".repeat(label_width),
            "Occurrences"
        ));
        out.push('\n');

        let table_rows: Vec<Vec<String>> = self
            .data
            .rows
            .iter()
            .zip(&labels)
            .map(|(row, label)| {
                vec![
                    label.clone(),
                    format_thousands(row.count),
                    format_stat(row.percentage, 2),
                    format_stat(row.cumulative_percentage, 2),
                ]
            })
            .collect();

        out.push_str(&render_table(
            &[self.data.column.as_str(), "Count", "%", "Cum. %"],
            &table_rows,
            &[Align::Left, Align::Right, Align::Right, Align::Right],
        ));
        out
    }
}
