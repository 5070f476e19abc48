// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    data, markdown, readme, workbook,
    params::{Params, SUMMARY_COLUMNS},
    progress::Progress,
    specs,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub sheets_used: Vec<String>,
    pub rows_written: usize,
    pub readme: PathBuf,
}

/// Top-level runner: workbook → per-sheet bundles → merged table → README.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let book = workbook::open(&params.workbook)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(params.sheets.len());
    }

    let mut bundles = Vec::new();
    let mut sheets_used = Vec::new();
    for name in &params.sheets {
        let Some(ws) = book.get_sheet_by_name(name) else {
            logf!("Sheet not in workbook, skipping: {}", name);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Sheet not in workbook, skipping: {}", name));
            }
            continue;
        };
        let (year, month) = workbook::split_sheet_name(name)?;
        let bundle = specs::sheet::extract(ws, &year, &month)?;
        logd!("{}: {} rows", name, bundle.rows.len());
        if let Some(p) = progress.as_deref_mut() {
            p.sheet_done(name, bundle.rows.len());
        }
        sheets_used.push(name.clone());
        bundles.push(bundle);
    }

    if bundles.is_empty() {
        loge!(
            "No configured sheets present in {}",
            params.workbook.display()
        );
        return Err("None of the configured sheets exist in the workbook".into());
    }

    let table = data::merge(&bundles);
    let summary = data::summarize(&bundles, SUMMARY_COLUMNS)?;

    let table_md = markdown::render_table(&table);
    let summary_md = markdown::render_summary(&summary);

    if params.dry_run {
        println!("{}\n\n{}", summary_md, table_md);
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        return Ok(RunSummary {
            sheets_used,
            rows_written: table.rows.len(),
            readme: params.readme.clone(),
        });
    }

    // Assemble the full document in memory before touching the file.
    let content = readme::load(&params.readme)?;
    let content = readme::apply_summary(&content, &summary_md);
    let content = readme::apply_table(&content, &table_md).inspect_err(|e| loge!("{}", e))?;
    readme::write(&params.readme, &content)?;

    logf!(
        "Updated {} from {} sheet(s)",
        params.readme.display(),
        sheets_used.len()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        sheets_used,
        rows_written: table.rows.len(),
        readme: params.readme.clone(),
    })
}
