// tests/sheet_extract.rs
//
// Worksheet extraction: header scan, blank-row skipping, hyperlink cells.
//
use readme_sync::specs::sheet;
use umya_spreadsheet::{Hyperlink, Spreadsheet};

fn sample_book() -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    let ws = book.get_sheet_by_name_mut("Sheet1").unwrap();

    // Header on row 2; row 1 is blank decoration
    ws.get_cell_mut("A2").set_value("Date");
    ws.get_cell_mut("B2").set_value("SQL");
    ws.get_cell_mut("C2").set_value("Notes");

    ws.get_cell_mut("A3").set_value("Oct 1");
    ws.get_cell_mut("B3").set_value("Joins");
    ws.get_cell_mut("C3").set_value("practice set");

    // Row 4 left blank, must be skipped

    ws.get_cell_mut("A5").set_value("Oct 2");
    let cell = ws.get_cell_mut("B5");
    cell.set_value("Window functions");
    let mut link = Hyperlink::default();
    link.set_url("https://example.com/wf");
    cell.set_hyperlink(link);

    book
}

#[test]
fn header_scan_and_rows() {
    let book = sample_book();
    let ws = book.get_sheet_by_name("Sheet1").unwrap();
    let b = sheet::extract(ws, "2025", "October").unwrap();

    assert_eq!(b.year, "2025");
    assert_eq!(b.month, "October");
    assert_eq!(b.headers, vec!["Date", "SQL", "Notes"]);
    assert_eq!(b.rows.len(), 2);
    assert_eq!(b.rows[0], vec!["Oct 1", "Joins", "practice set"]);
}

#[test]
fn hyperlink_cell_becomes_markdown_link() {
    let book = sample_book();
    let ws = book.get_sheet_by_name("Sheet1").unwrap();
    let b = sheet::extract(ws, "2025", "October").unwrap();

    assert_eq!(b.rows[1][0], "Oct 2");
    assert_eq!(b.rows[1][1], "[Window functions](https://example.com/wf)");
    assert_eq!(b.rows[1][2], "");
}

#[test]
fn hyperlink_with_empty_value_uses_url_as_text() {
    let mut book = umya_spreadsheet::new_file();
    let ws = book.get_sheet_by_name_mut("Sheet1").unwrap();
    ws.get_cell_mut("A1").set_value("Date");
    ws.get_cell_mut("B1").set_value("Notes");
    ws.get_cell_mut("A2").set_value("Oct 3");
    let mut link = Hyperlink::default();
    link.set_url("https://example.com/raw");
    ws.get_cell_mut("B2").set_hyperlink(link);

    let ws = book.get_sheet_by_name("Sheet1").unwrap();
    let b = sheet::extract(ws, "2025", "October").unwrap();
    assert_eq!(
        b.rows[0][1],
        "[https://example.com/raw](https://example.com/raw)"
    );
}

#[test]
fn empty_sheet_is_an_error() {
    let book = umya_spreadsheet::new_file();
    let ws = book.get_sheet_by_name("Sheet1").unwrap();
    let err = sheet::extract(ws, "2025", "October").unwrap_err();
    assert!(err.to_string().contains("No header row"));
}
