//! Configuration types for profiling and chart rendering.
//!
//! Use [`ExplorerConfig::builder()`] for a validated configuration, or
//! [`ExplorerConfig::from_json_file`] to load one from disk.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Convention used when computing the standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StdConvention {
    /// Divide by n - 1
    #[default]
    Sample,
    /// Divide by n
    Population,
}

impl StdConvention {
    /// Delta degrees of freedom for this convention.
    pub fn ddof(self) -> usize {
        match self {
            StdConvention::Sample => 1,
            StdConvention::Population => 0,
        }
    }
}

/// Configuration shared by the profiler, the chart builders and the renderers.
///
/// # Example
///
/// ```rust,ignore
/// use datanova::config::{ExplorerConfig, StdConvention};
///
/// let config = ExplorerConfig::builder()
///     .top_n(10)
///     .histogram_bins(30)
///     .std_convention(StdConvention::Population)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Decimal places for displayed statistics.
    /// Default: 2
    pub decimals: usize,

    /// Standard deviation convention.
    /// Default: Sample
    pub std_convention: StdConvention,

    /// Number of categories shown in a bar chart.
    /// Default: 5
    pub top_n: usize,

    /// Number of equal-width histogram bins.
    /// Default: 20
    pub histogram_bins: usize,

    /// Optional fixed histogram range `(lo, hi)`.
    /// Values outside it are left out of the bins.
    /// Default: None
    pub x_range: Option<(f64, f64)>,

    /// Maximum characters of a bar label before it is truncated.
    /// Default: 12
    pub label_width: usize,

    /// Characters available to the longest bar.
    /// Default: 50
    pub chart_width: usize,

    /// Label used for missing values in bar charts.
    /// Default: "N/A"
    pub na_label: String,

    /// Emit ANSI 24-bit colour in rendered output.
    /// Default: false
    pub color: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            std_convention: StdConvention::default(),
            top_n: 5,
            histogram_bins: 20,
            x_range: None,
            label_width: 12,
            chart_width: 50,
            na_label: "N/A".to_string(),
            color: false,
        }
    }
}

impl ExplorerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ExplorerConfigBuilder {
        ExplorerConfigBuilder::default()
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ExplorerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.decimals > 10 {
            return Err(ConfigValidationError::OutOfRange {
                field: "decimals".to_string(),
                value: self.decimals,
                min: 0,
                max: 10,
            });
        }

        for (field, value, min) in [
            ("top_n", self.top_n, 1),
            ("histogram_bins", self.histogram_bins, 1),
            ("label_width", self.label_width, 4),
            ("chart_width", self.chart_width, 10),
        ] {
            if value < min {
                return Err(ConfigValidationError::TooSmall {
                    field: field.to_string(),
                    value,
                    min,
                });
            }
        }

        if let Some((lo, hi)) = self.x_range
            && !(lo.is_finite() && hi.is_finite() && lo < hi)
        {
            return Err(ConfigValidationError::InvalidRange { lo, hi });
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid value for '{field}': {value} (must be between {min} and {max})")]
    OutOfRange {
        field: String,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid value for '{field}': {value} (must be at least {min})")]
    TooSmall {
        field: String,
        value: usize,
        min: usize,
    },

    #[error("Invalid histogram range: ({lo}, {hi}) (bounds must be finite with lo < hi)")]
    InvalidRange { lo: f64, hi: f64 },
}

/// Builder for [`ExplorerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ExplorerConfigBuilder {
    decimals: Option<usize>,
    std_convention: Option<StdConvention>,
    top_n: Option<usize>,
    histogram_bins: Option<usize>,
    x_range: Option<(f64, f64)>,
    label_width: Option<usize>,
    chart_width: Option<usize>,
    na_label: Option<String>,
    color: Option<bool>,
}

impl ExplorerConfigBuilder {
    /// Set the decimal places used for displayed statistics.
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Set the standard deviation convention.
    pub fn std_convention(mut self, convention: StdConvention) -> Self {
        self.std_convention = Some(convention);
        self
    }

    /// Set the number of categories shown in a bar chart.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Restrict the histogram to `[lo, hi]`.
    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }

    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = Some(width);
        self
    }

    pub fn chart_width(mut self, width: usize) -> Self {
        self.chart_width = Some(width);
        self
    }

    /// Set the label used for missing values in bar charts.
    pub fn na_label(mut self, label: impl Into<String>) -> Self {
        self.na_label = Some(label.into());
        self
    }

    /// Enable or disable coloured output.
    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ExplorerConfig` or an error if validation fails.
    pub fn build(self) -> Result<ExplorerConfig, ConfigValidationError> {
        let defaults = ExplorerConfig::default();
        let config = ExplorerConfig {
            decimals: self.decimals.unwrap_or(defaults.decimals),
            std_convention: self.std_convention.unwrap_or_default(),
            top_n: self.top_n.unwrap_or(defaults.top_n),
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
            x_range: self.x_range,
            label_width: self.label_width.unwrap_or(defaults.label_width),
            chart_width: self.chart_width.unwrap_or(defaults.chart_width),
            na_label: self.na_label.unwrap_or(defaults.na_label),
            color: self.color.unwrap_or(defaults.color),
        };

        config.validate()?;
        Ok(config)
    }
}
