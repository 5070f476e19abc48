// src/readme.rs
//
// Marker-based splicing of generated blocks into the README.
// The whole document is assembled in memory; the file is written once.

use std::{error::Error, fs, path::Path};

use crate::params::{END_SUMMARY, END_TABLE, START_SUMMARY, START_TABLE};

pub fn load(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

pub fn write(path: &Path, content: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, content)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e).into())
}

/// Replace everything between the first `start` and the last `end` marker.
/// Returns None when either marker is missing (or out of order).
pub fn splice_between(content: &str, start: &str, end: &str, block: &str) -> Option<String> {
    let s = content.find(start)?;
    let e = content.rfind(end)?;
    if e < s {
        return None;
    }
    Some(join!(
        &content[..s],
        start, "\n", block, "\n", end,
        &content[e + end.len()..],
    ))
}

/// Summary block: replace between markers, or prepend when absent.
pub fn apply_summary(content: &str, block: &str) -> String {
    match splice_between(content, START_SUMMARY, END_SUMMARY, block) {
        Some(updated) => updated,
        None => join!(block, "\n\n", content),
    }
}

/// Table block: both markers are required.
pub fn apply_table(content: &str, block: &str) -> Result<String, Box<dyn Error>> {
    splice_between(content, START_TABLE, END_TABLE, block)
        .ok_or_else(|| format!("README is missing {} / {} markers", START_TABLE, END_TABLE).into())
}
