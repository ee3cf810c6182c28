use crate::charts::render::{Align, render_table, render_table_painted};
use crate::config::ExplorerConfig;
use crate::types::{DISPLAY_COLUMNS, ProfileReport};
use crate::utils::{format_stat, format_thousands, truncate_label};

/// Blank-severity colours from worst (> 95 % blank) to best (0-5 %).
pub const BLANK_SCALE: [&str; 20] = [
    "#b80000", "#c11e11", "#c62d19", "#ca3b21", "#cf4a2a", "#d35932", "#d8673a", "#dc7643",
    "#e0854b", "#e59353", "#e9a25b", "#eeb164", "#f2bf6c", "#f7ce74", "#fbdd7c", "#ffeb84",
    "#d7df81", "#b0d47f", "#8ac97d", "#63be7b",
];

const MODE_DISPLAY_CHARS: usize = 24;

/// Position of `% Blank` in [`DISPLAY_COLUMNS`].
const BLANK_COLUMN: usize = 3;

/// Colour for a `% Blank` value, stepping every 5 percentage points.
pub fn blank_severity_color(percent_blank: f64) -> &'static str {
    for (i, color) in BLANK_SCALE.iter().take(BLANK_SCALE.len() - 1).enumerate() {
        let threshold = 95.0 - 5.0 * i as f64;
        if percent_blank > threshold {
            return *color;
        }
    }
    BLANK_SCALE[BLANK_SCALE.len() - 1]
}

/// Render a profile report as an aligned text table.
///
/// With colour enabled the `% Blank` cell of each row is painted with its
/// blank-severity colour.
pub fn render_profile_table(report: &ProfileReport, config: &ExplorerConfig) -> String {
    let d = config.decimals;
    let rows: Vec<Vec<String>> = report
        .columns
        .iter()
        .map(|col| {
            let mut cells = vec![
                col.name.clone(),
                col.dtype.clone(),
                format_thousands(col.missing_count),
                format!("{}", col.percent_blank.round() as i64),
                format_thousands(col.unique_count),
                col.most_frequent
                    .as_deref()
                    .map(|m| truncate_label(m, MODE_DISPLAY_CHARS))
                    .unwrap_or_default(),
            ];
            match col.numeric {
                Some(stats) => cells.extend(stats.display_values().iter().map(|v| format_stat(*v, d))),
                None => cells.extend(std::iter::repeat_n(String::new(), 7)),
            }
            cells
        })
        .collect();

    let mut alignments = vec![Align::Left, Align::Left];
    alignments.extend(std::iter::repeat_n(Align::Right, 3));
    alignments.push(Align::Left);
    alignments.extend(std::iter::repeat_n(Align::Right, 7));

    let table = if config.color {
        render_table_painted(&DISPLAY_COLUMNS, &rows, &alignments, |r, c| {
            (c == BLANK_COLUMN).then(|| blank_severity_color(report.columns[r].percent_blank))
        })
    } else {
        render_table(&DISPLAY_COLUMNS, &rows, &alignments)
    };

    let mut out = format!(
        "ROW TOTAL = {} COLUMNS = {}\n\n",
        format_thousands(report.row_count),
        format_thousands(report.column_count)
    );
    out.push_str(&table);
    out
}
