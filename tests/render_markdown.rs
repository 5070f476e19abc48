// tests/render_markdown.rs
//
// Pipe-table padding/divider and the summary block.
//
use readme_sync::data::{Dataset, Summary};
use readme_sync::markdown;

fn ds(headers: &[&str], rows: &[&[&str]]) -> Dataset {
    Dataset {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

#[test]
fn table_is_padded_and_left_aligned() {
    let t = ds(
        &["Date", "SQL"],
        &[&["**October 2025**", ""], &["Oct 1", "Joins"]],
    );
    let md = markdown::render_table(&t);
    let expected = "\
| Date             | SQL   |
|:-----------------|:------|
| **October 2025** |       |
| Oct 1            | Joins |";
    assert_eq!(md, expected);
}

#[test]
fn table_lines_share_one_width() {
    let t = ds(
        &["Date", "SQL", "Notes"],
        &[
            &["Oct 1", "Joins", "[set](https://example.com/a)"],
            &["Oct 22", "", "short"],
        ],
    );
    let md = markdown::render_table(&t);
    let widths: Vec<usize> = md.lines().map(|l| l.chars().count()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    assert!(md.lines().nth(1).unwrap().starts_with("|:--"));
    assert!(!md.ends_with('\n'));
}

#[test]
fn pipes_and_newlines_in_cells_are_tamed() {
    let t = ds(&["Notes"], &[&["a|b"], &["line one\nline two"]]);
    let md = markdown::render_table(&t);
    assert!(md.contains("a\\|b"));
    assert!(md.contains("line one line two"));
    // Exactly 4 lines: header, divider, two rows
    assert_eq!(md.lines().count(), 4);
}

#[test]
fn short_rows_render_empty_trailing_cells() {
    let t = ds(&["Date", "SQL"], &[&["Oct 1"]]);
    let md = markdown::render_table(&t);
    assert!(md.lines().last().unwrap().starts_with("| Oct 1"));
}

#[test]
fn summary_block_layout() {
    let s = Summary {
        total_days: 12,
        counts: vec![
            ("SQL Topics Covered".to_string(), 8),
            ("Job Search Activities".to_string(), 2),
        ],
    };
    let md = markdown::render_summary(&s);
    let expected = "\
## 📊 Progress Summary

- **Total Days Logged:** 12
- **SQL Topics Covered:** 8 days
- **Job Search Activities:** 2 days";
    assert_eq!(md, expected);
}
