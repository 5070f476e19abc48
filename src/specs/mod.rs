// src/specs/mod.rs
//! Extraction "specs" for the tracking workbook.
//!
//! Each spec knows *where the ground truth lives in a worksheet* and how to
//! pull it out: which row is the header, which rows carry data, how a
//! hyperlinked cell becomes Markdown link syntax. Shaping results into the
//! merged README table, summary counters and file splicing live in higher
//! layers (`data`, `markdown`, `readme`); specs only extract.

pub mod sheet;
