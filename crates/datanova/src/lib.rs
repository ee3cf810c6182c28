//! Quick exploratory data analysis over Polars DataFrames.
//!
//! # Overview
//!
//! - **Profiling**: per-column type, missingness, cardinality, mode and
//!   descriptive statistics ([`profile`])
//! - **Bar charts**: top-N category frequency tables and text charts
//!   ([`bar_chart_data`], [`bar`])
//! - **Histograms**: binned distributions with a box-plot strip and summary
//!   statistics ([`hist_data`], [`hist`])
//! - **EDA**: one chart per column, chosen by type ([`eda`])
//! - **Reporting**: text tables, JSON and CSV export ([`reporting`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use datanova::{ExplorerConfig, bar, hist, load_data, profile};
//!
//! let df = load_data("winemag.csv")?;
//!
//! let report = profile(&df)?;
//! for col in &report.columns {
//!     println!("{}: {:.0}% blank", col.name, col.percent_blank);
//! }
//!
//! let config = ExplorerConfig::default();
//! println!("{}", bar(&df, "country", &config)?.render(&config));
//! println!("{}", hist(&df, "points", &config)?.render(&config));
//! ```
//!
//! # Configuration
//!
//! ```rust,ignore
//! use datanova::{ExplorerConfig, StdConvention};
//!
//! let config = ExplorerConfig::builder()
//!     .top_n(10)
//!     .histogram_bins(30)
//!     .std_convention(StdConvention::Population)
//!     .build()?;
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod reporting;
pub mod types;
pub mod utils;

pub use charts::{
    BarChart, BarChartData, Chart, FrequencyRow, HistStats, Histogram, HistogramBin, bar,
    bar_chart_data, eda, hist, hist_data,
};
pub use config::{ConfigValidationError, ExplorerConfig, ExplorerConfigBuilder, StdConvention};
pub use error::{ExplorerError, Result, ResultExt};
pub use loader::load_data;
pub use profiler::{Profiler, profile};
pub use reporting::{export_csv, export_json, render_profile_table};
pub use types::{ColumnSummary, DISPLAY_COLUMNS, NumericSummary, ProfileReport};
pub use utils::DtypeCategory;
