// src/markdown.rs
use crate::core::sanitize::markdown_cell;
use crate::data::{Dataset, Summary};
use crate::params::SUMMARY_HEADING;

/* ---------------- Table ---------------- */

/// Render a padded pipe table:
/// ```text
/// | Date  | SQL   |
/// |:------|:------|
/// | Oct 1 | Joins |
/// ```
/// Every column is padded to its widest cell; the divider is left-aligned.
/// No trailing newline — the splice layer supplies surrounding newlines.
pub fn render_table(ds: &Dataset) -> String {
    let headers: Vec<String> = ds.headers.iter().map(|h| markdown_cell(h)).collect();
    let rows: Vec<Vec<String>> = ds
        .rows
        .iter()
        .map(|r| {
            (0..headers.len())
                .map(|i| markdown_cell(r.get(i).map(String::as_str).unwrap_or("")))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in &rows {
        for (i, cell) in r.iter().enumerate() {
            let w = cell.chars().count();
            if w > widths[i] {
                widths[i] = w;
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(fmt_row(&headers, &widths));
    lines.push(fmt_divider(&widths));
    for r in &rows {
        lines.push(fmt_row(r, &widths));
    }
    lines.join("\n")
}

fn fmt_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = s!("|");
    for (cell, &w) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        for _ in 0..w - cell.chars().count() {
            line.push(' ');
        }
        line.push_str(" |");
    }
    line
}

fn fmt_divider(widths: &[usize]) -> String {
    let mut line = s!("|");
    for &w in widths {
        line.push(':');
        for _ in 0..w + 1 {
            line.push('-');
        }
        line.push('|');
    }
    line
}

/* ---------------- Summary ---------------- */

/// Progress summary heading plus one bold bullet per counter.
pub fn render_summary(summary: &Summary) -> String {
    let mut lines = vec![s!(SUMMARY_HEADING), s!()];
    lines.push(format!("- **Total Days Logged:** {}", summary.total_days));
    for (label, n) in &summary.counts {
        lines.push(format!("- **{}:** {} days", label, n));
    }
    lines.join("\n")
}
