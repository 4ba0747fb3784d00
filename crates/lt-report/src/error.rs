//! Report error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a whole report run.
///
/// Per-row problems (blank keys, failed lookups) never surface here; they
/// are recorded in the output rows instead.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem error while reading, writing or replacing a report file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed delimited data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input had no rows at all, not even a header.
    #[error("input file is empty: {}", .0.display())]
    EmptyInput(PathBuf),
}
