//! CLI entry point for quick exploratory data analysis.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use datanova::reporting::to_json_string;
use datanova::{
    Chart, ExplorerConfig, Profiler, bar, eda, export_csv, export_json, hist, load_data,
    render_profile_table,
};
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Quick exploratory data analysis for CSV and Parquet files",
    long_about = "Profile every column of a dataset, or chart a single column.\n\n\
                  EXAMPLES:\n  \
                  # Column profile table\n  \
                  datanova profile winemag.csv\n\n  \
                  # Top 10 countries\n  \
                  datanova bar winemag.csv country --top-n 10\n\n  \
                  # Histogram of prices between 0 and 200\n  \
                  datanova hist winemag.csv price --range 0 200\n\n  \
                  # Chart every column\n  \
                  datanova eda winemag.csv --color"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON configuration file (missing fields use defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Colour charts and tables with 24-bit ANSI escapes
    #[arg(long, global = true)]
    color: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print JSON to stdout instead of text
    ///
    /// Disables all logging so stdout only contains the JSON document.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Profile every column: type, missingness, cardinality, mode and statistics
    Profile {
        /// CSV or Parquet file
        input: PathBuf,

        /// Also write the profile table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the profile as a JSON report
        #[arg(short = 'r', long)]
        report: Option<PathBuf>,
    },

    /// Bar chart of the most common values of a column
    Bar {
        input: PathBuf,
        column: String,

        /// Number of categories to show
        #[arg(long)]
        top_n: Option<usize>,
    },

    /// Histogram, box plot and statistics of a numeric column
    Hist {
        input: PathBuf,
        column: String,

        /// Number of bins
        #[arg(long)]
        bins: Option<usize>,

        /// Fixed histogram range
        #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
        range: Option<Vec<f64>>,
    },

    /// Chart every column: histograms for numeric, bar charts for text
    Eda { input: PathBuf },
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Merge the config file, command-line overrides and defaults, then validate.
fn build_config(args: &Args) -> Result<ExplorerConfig> {
    let mut config = match &args.config {
        Some(path) => ExplorerConfig::from_json_file(path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => ExplorerConfig::default(),
    };

    if args.color {
        config.color = true;
    }

    match &args.command {
        Command::Bar { top_n: Some(n), .. } => config.top_n = *n,
        Command::Hist { bins, range, .. } => {
            if let Some(b) = bins {
                config.histogram_bins = *b;
            }
            if let Some(bounds) = range {
                let [lo, hi] = bounds.as_slice() else {
                    return Err(anyhow!("--range takes exactly two values"));
                };
                config.x_range = Some((*lo, *hi));
            }
        }
        _ => {}
    }

    config.validate()?;
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn load(input: &Path) -> Result<DataFrame> {
    let df = load_data(input).with_context(|| format!("Loading {}", input.display()))?;
    Ok(df)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = build_config(&args)?;

    match &args.command {
        Command::Profile { input, csv, report } => {
            run_profile(&args, &config, input, csv.as_deref(), report.as_deref())
        }
        Command::Bar { input, column, .. } => {
            let df = load(input)?;
            let chart = bar(&df, column, &config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("{}", chart.render(&config));
            }
            Ok(())
        }
        Command::Hist { input, column, .. } => {
            let df = load(input)?;
            let chart = hist(&df, column, &config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                println!("{}", chart.render(&config));
            }
            Ok(())
        }
        Command::Eda { input } => run_eda(&args, &config, input),
    }
}

/// Print the profile table and write any requested exports.
///
/// Note: this uses `println!` intentionally for the primary CLI output,
/// which should be visible regardless of log level settings.
fn run_profile(
    args: &Args,
    config: &ExplorerConfig,
    input: &Path,
    csv: Option<&Path>,
    report_path: Option<&Path>,
) -> Result<()> {
    let df = load(input)?;
    let report = Profiler::new(config).profile(&df)?;

    if args.json {
        println!(
            "{}",
            to_json_string(&report, Some(&input.display().to_string()))?
        );
    } else {
        println!();
        println!("{}", "=".repeat(80));
        println!("PROFILE: {}", input.display());
        println!("{}", "=".repeat(80));
        println!();
        print!("{}", render_profile_table(&report, config));
        println!();
    }

    if let Some(path) = csv {
        let written = export_csv(&report, path, config.decimals)?;
        info!("Wrote profile table to {}", written.display());
    }
    if let Some(path) = report_path {
        let written = export_json(&report, path)?;
        info!("Wrote JSON report to {}", written.display());
    }

    Ok(())
}

fn run_eda(args: &Args, config: &ExplorerConfig, input: &Path) -> Result<()> {
    let df = load(input)?;
    let charts: Vec<Chart> = eda(&df, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&charts)?);
        return Ok(());
    }

    for chart in &charts {
        println!("{}", "=".repeat(80));
        println!("{}", chart.render(config));
    }
    println!("{}", "=".repeat(80));
    println!(
        "{} charts for {} columns ({} skipped)",
        charts.len(),
        df.width(),
        df.width() - charts.len()
    );
    Ok(())
}
