// src/workbook.rs
//
// Workbook loading. The one seam that touches the spreadsheet file.

use std::{error::Error, path::Path};

use umya_spreadsheet::Spreadsheet;

pub fn open(path: &Path) -> Result<Spreadsheet, Box<dyn Error>> {
    umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|e| format!("Failed to open workbook {}: {:?}", path.display(), e).into())
}

pub fn sheet_names(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection()
        .iter()
        .map(|ws| ws.get_name().to_string())
        .collect()
}

/// "2025 - October" → ("2025", "October").
pub fn split_sheet_name(name: &str) -> Result<(String, String), Box<dyn Error>> {
    match name.split_once(" - ") {
        Some((year, month)) if !year.trim().is_empty() && !month.trim().is_empty() => {
            Ok((year.trim().to_string(), month.trim().to_string()))
        }
        _ => Err(format!("Sheet name not in 'YYYY - Month' form: {}", name).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::split_sheet_name;

    #[test]
    fn splits_year_and_month() {
        let (y, m) = split_sheet_name("2025 - October").unwrap();
        assert_eq!(y, "2025");
        assert_eq!(m, "October");
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(split_sheet_name("October 2025").is_err());
        assert!(split_sheet_name(" - ").is_err());
    }
}
