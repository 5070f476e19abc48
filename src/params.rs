// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_WORKBOOK: &str = "DataWorks Progress Plan.xlsx";
pub const DEFAULT_README: &str = "README.md";

/// Month sheets, in the order they appear in the README table.
pub const SHEETS_IN_ORDER: &[&str] = &[
    "2025 - October",
    "2025 - November",
    "2025 - December",
];

// Sentinel markers in the README
pub const START_TABLE: &str = "<!-- START_TABLE -->";
pub const END_TABLE: &str = "<!-- END_TABLE -->";
pub const START_SUMMARY: &str = "<!-- START_SUMMARY -->";
pub const END_SUMMARY: &str = "<!-- END_SUMMARY -->";

pub const SUMMARY_HEADING: &str = "## 📊 Progress Summary";

/// Tracked columns and their summary-bullet labels.
pub const SUMMARY_COLUMNS: &[(&str, &str)] = &[
    ("SQL", "SQL Topics Covered"),
    ("Big Data", "Big Data Activities"),
    ("Data Science", "Data Science Activities"),
    ("Job Search", "Job Search Activities"),
];

#[derive(Clone, Debug)]
pub struct Params {
    pub workbook: PathBuf,     // tracking spreadsheet to read
    pub readme: PathBuf,       // README to rewrite
    pub sheets: Vec<String>,   // sheet names, in output order
    pub list_sheets: bool,     // list workbook sheets then exit
    pub dry_run: bool,         // print Markdown instead of writing
}

impl Params {
    pub fn new() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            readme: PathBuf::from(DEFAULT_README),
            sheets: SHEETS_IN_ORDER.iter().map(|s| s.to_string()).collect(),
            list_sheets: false,
            dry_run: false,
        }
    }
}
