// src/progress.rs
/// Lightweight progress reporting for a sync run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sheets selected.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one worksheet has been extracted.
    fn sheet_done(&mut self, _name: &str, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per event. Used by the CLI.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Reading {} sheet(s)…", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn sheet_done(&mut self, name: &str, rows: usize) {
        eprintln!("  {}: {} rows", name, rows);
    }
}
