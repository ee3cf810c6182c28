//! Dataset loading from CSV and Parquet files.

use crate::error::{ExplorerError, Result, ResultExt};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rows scanned when inferring CSV column types.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Load a dataset, choosing the reader from the file extension.
///
/// Supports `.csv` and `.parquet`. Excel workbooks and any other extension
/// are rejected with [`ExplorerError::InvalidInput`].
pub fn load_data(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ExplorerError::InvalidInput(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    info!("Loading dataset from: {}", path.display());
    let df = match extension.as_str() {
        "csv" => load_csv_with_fallbacks(path)?,
        "parquet" => load_parquet(path)?,
        "xlsx" | "xls" => {
            return Err(ExplorerError::InvalidInput(format!(
                "Excel workbooks are not supported ('{}'); export the sheet to CSV or Parquet",
                path.display()
            )));
        }
        other => {
            return Err(ExplorerError::InvalidInput(format!(
                "Unsupported file extension: '{}'",
                other
            )));
        }
    };

    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

fn load_parquet(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)?;
    ParquetReader::new(file)
        .finish()
        .context(format!("Reading parquet file {}", path.display()))
}

/// Load CSV with multiple fallback strategies.
fn load_csv_with_fallbacks(path: &Path) -> Result<DataFrame> {
    // Strategy 1: standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Standard loading failed: {}", e),
    }

    // Strategy 2: without quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(None))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Loading without quotes failed: {}", e),
    }

    // Strategy 3: pre-clean content
    let content = std::fs::read_to_string(path)?;
    CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(clean_csv_content(&content)))
        .finish()
        .context(format!("Reading CSV file {}", path.display()))
}

/// Collapse doubled quotes and drop blank lines.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
