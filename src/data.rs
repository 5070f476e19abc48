// src/data.rs
//
// Merged table assembly and summary counters.
//
// Sheets keep their own column layouts; the README table uses the union of
// all sheet headers in first-appearance order, with rows remapped by header
// name. Summary counters run over data rows only (separators excluded).

use std::error::Error;

use crate::specs::sheet::SheetBundle;

/// Header row + data rows, positionally aligned.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Union of all bundle headers, first-appearance order.
pub fn union_headers(bundles: &[SheetBundle]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for b in bundles {
        for h in &b.headers {
            if !out.iter().any(|e| e == h) {
                out.push(h.clone());
            }
        }
    }
    out
}

/// Concatenate all sheets into one table, one bold month separator row
/// ahead of each sheet's rows.
pub fn merge(bundles: &[SheetBundle]) -> Dataset {
    let headers = union_headers(bundles);
    let mut rows = Vec::new();

    for b in bundles {
        let mut sep = vec![s!(); headers.len()];
        if let Some(first) = sep.first_mut() {
            *first = format!("**{} {}**", b.month, b.year);
        }
        rows.push(sep);

        // Remap this sheet's layout into the union layout.
        let idx: Vec<Option<usize>> = headers
            .iter()
            .map(|h| b.headers.iter().position(|bh| bh == h))
            .collect();
        for r in &b.rows {
            let row = idx
                .iter()
                .map(|i| i.and_then(|i| r.get(i)).cloned().unwrap_or_default())
                .collect();
            rows.push(row);
        }
    }

    Dataset { headers, rows }
}

#[derive(Debug)]
pub struct Summary {
    pub total_days: usize,
    /// (bullet label, days) per tracked column, in tracked order.
    pub counts: Vec<(String, usize)>,
}

/// Count logged days overall and per tracked column.
/// A day counts for a column when its cell is non-empty after trimming.
pub fn summarize(
    bundles: &[SheetBundle],
    tracked: &[(&str, &str)],
) -> Result<Summary, Box<dyn Error>> {
    let headers = union_headers(bundles);
    let total_days = bundles.iter().map(|b| b.rows.len()).sum();

    let mut counts = Vec::with_capacity(tracked.len());
    for (col, label) in tracked {
        if !headers.iter().any(|h| h == col) {
            return Err(format!("Summary column not found in workbook: {}", col).into());
        }
        let mut n = 0;
        for b in bundles {
            let Some(i) = b.headers.iter().position(|h| h == col) else {
                continue;
            };
            n += b
                .rows
                .iter()
                .filter(|r| r.get(i).is_some_and(|v| !v.trim().is_empty()))
                .count();
        }
        counts.push((s!(*label), n));
    }

    Ok(Summary { total_days, counts })
}
