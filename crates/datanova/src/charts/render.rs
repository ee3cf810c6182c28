//! Text drawing primitives shared by the charts and the profile table.

use crate::types::NumericSummary;
use crate::utils::{pad_right, paint};

/// Glyph used for bar bodies.
pub const BAR_GLYPH: char = '█';

/// Draw a bar proportional to `value / max` within `width` characters.
///
/// Any non-zero value gets at least one glyph.
pub fn bar_glyphs(value: usize, max: usize, width: usize) -> String {
    if value == 0 || max == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * width as f64).round() as usize;
    BAR_GLYPH.to_string().repeat(len.clamp(1, width))
}

/// Optionally colour a fragment of chart output.
pub fn colorize(text: &str, color: Option<&str>) -> String {
    match color {
        Some(hex) if !text.is_empty() => paint(text, hex),
        _ => text.to_string(),
    }
}

/// Column alignment inside [`render_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Render an aligned text table with a header rule.
///
/// `alignments` applies per column; missing entries default to left.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], alignments: &[Align]) -> String {
    render_table_painted(headers, rows, alignments, |_, _| None)
}

/// Like [`render_table`], but body cells for which `cell_color(row, column)`
/// returns a colour are painted after padding, so alignment is unaffected.
pub fn render_table_painted<F>(
    headers: &[&str],
    rows: &[Vec<String>],
    alignments: &[Align],
    cell_color: F,
) -> String
where
    F: Fn(usize, usize) -> Option<&'static str>,
{
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(headers.iter().copied(), &widths, alignments, |_| None));
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for (r, row) in rows.iter().enumerate() {
        out.push_str(&format_row(
            row.iter().map(String::as_str),
            &widths,
            alignments,
            |c| cell_color(r, c),
        ));
        out.push('\n');
    }
    out
}

fn format_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    alignments: &[Align],
    color: impl Fn(usize) -> Option<&'static str>,
) -> String {
    cells
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            let padded = match alignments.get(i).copied().unwrap_or(Align::Left) {
                Align::Left => pad_right(cell, width),
                Align::Right => format!("{:>width$}", cell, width = width),
            };
            colorize(&padded, color(i))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Draw a one-line box plot of `summary` scaled to `[lo, hi]`.
///
/// Whiskers span min..max (`|---|`), the box spans q1..q3 (`[===]`) and
/// the median is marked with `:`. Positions outside the range are clipped.
/// Returns an empty strip when any bound or summary value is not finite.
pub fn box_strip(summary: &NumericSummary, lo: f64, hi: f64, width: usize) -> String {
    let marks = [
        summary.min,
        summary.p25,
        summary.median,
        summary.p75,
        summary.max,
    ];
    if width < 2 || !lo.is_finite() || !hi.is_finite() || !marks.iter().all(|v| v.is_finite()) {
        return String::new();
    }

    let span = hi - lo;
    let position = |v: f64| -> usize {
        if span <= 0.0 {
            return width / 2;
        }
        let frac = ((v - lo) / span).clamp(0.0, 1.0);
        (frac * (width - 1) as f64).round() as usize
    };

    let mut cells = vec![' '; width];
    let (p_min, p_q1, p_med, p_q3, p_max) = (
        position(summary.min),
        position(summary.p25),
        position(summary.median),
        position(summary.p75),
        position(summary.max),
    );
    if p_min > p_max || p_q1 > p_q3 {
        return String::new();
    }

    for cell in &mut cells[p_min..=p_max] {
        *cell = '-';
    }
    for cell in &mut cells[p_q1..=p_q3] {
        *cell = '=';
    }
    cells[p_min] = '|';
    cells[p_max] = '|';
    cells[p_q1] = '[';
    cells[p_q3] = ']';
    cells[p_med] = ':';

    cells.into_iter().collect::<String>().trim_end().to_string()
}
