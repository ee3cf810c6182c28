use crate::error::Result;
use crate::types::ProfileReport;
use chrono::Local;
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// A profile report with provenance, as written to JSON.
#[derive(Debug, Serialize)]
pub struct ProfileDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    pub generated_at: String,
    #[serde(flatten)]
    pub report: &'a ProfileReport,
}

impl<'a> ProfileDocument<'a> {
    pub fn new(report: &'a ProfileReport, source: Option<&'a str>) -> Self {
        Self {
            source,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            report,
        }
    }
}

/// Serialize a report to pretty JSON. NaN statistics become `null`.
pub fn to_json_string(report: &ProfileReport, source: Option<&str>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ProfileDocument::new(
        report, source,
    ))?)
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write a report to a JSON file, creating parent directories as needed.
pub fn export_json(report: &ProfileReport, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    create_parent_dir(path)?;

    let mut file = File::create(path)?;
    file.write_all(to_json_string(report, None)?.as_bytes())?;

    info!("Report saved: {}", path.display());
    Ok(path.to_path_buf())
}

/// Write the display table of a report to a CSV file.
pub fn export_csv(report: &ProfileReport, path: impl AsRef<Path>, decimals: usize) -> Result<PathBuf> {
    let path = path.as_ref();
    create_parent_dir(path)?;

    let mut df = report.to_dataframe(decimals)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .with_quote_char(b'"')
        .finish(&mut df)?;

    info!("Profile table saved: {}", path.display());
    Ok(path.to_path_buf())
}
