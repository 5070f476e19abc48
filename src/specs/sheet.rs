// src/specs/sheet.rs
//! Extraction spec for one month worksheet.
//!
//! Layout assumptions (by the workbook's convention):
//! - The header row is the first row with any non-empty cell; blank rows
//!   above it are decoration.
//! - Columns are the non-empty header cells; data rows are truncated to
//!   that width.
//! - A data row must have at least one non-empty cell, otherwise skipped.
//! - A cell carrying a hyperlink exports as `[text](url)`; an empty cell
//!   value falls back to the URL as link text.

use std::error::Error;

use umya_spreadsheet::Worksheet;

#[derive(Debug)]
pub struct SheetBundle {
    pub year: String,
    pub month: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn extract(ws: &Worksheet, year: &str, month: &str) -> Result<SheetBundle, Box<dyn Error>> {
    let (max_col, max_row) = ws.get_highest_column_and_row();

    let header_row = (1..=max_row)
        .find(|&r| (1..=max_col).any(|c| !ws.get_value((c, r)).trim().is_empty()))
        .ok_or_else(|| format!("No header row in sheet: {}", ws.get_name()))?;

    let headers: Vec<String> = (1..=max_col)
        .map(|c| ws.get_value((c, header_row)))
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().to_string())
        .collect();
    let ncols = headers.len() as u32;

    let mut rows = Vec::new();
    for r in header_row + 1..=max_row {
        let blank = (1..=max_col).all(|c| ws.get_value((c, r)).trim().is_empty());
        if blank { continue; }
        let row = (1..=ncols).map(|c| cell_text(ws, c, r)).collect();
        rows.push(row);
    }

    Ok(SheetBundle {
        year: s!(year),
        month: s!(month),
        headers,
        rows,
    })
}

/* ---------- helpers ---------- */

/// Cell text with hyperlink substitution.
fn cell_text(ws: &Worksheet, col: u32, row: u32) -> String {
    let value = ws.get_value((col, row));
    if let Some(cell) = ws.get_cell((col, row)) {
        if let Some(link) = cell.get_hyperlink() {
            let url = link.get_url();
            let text = value.trim();
            let text = if text.is_empty() { url } else { text };
            return format!("[{}]({})", text, url);
        }
    }
    value
}
