//! Report output for profiling results.
//!
//! - [`render_profile_table`]: aligned text table for the terminal
//! - [`export_json`]: pretty JSON with a generation timestamp
//! - [`export_csv`]: the display table written as CSV

mod export;
mod table;

pub use export::{ProfileDocument, export_csv, export_json, to_json_string};
pub use table::{BLANK_SCALE, blank_severity_color, render_profile_table};
