//! # lt-report
//!
//! Turns an issue list into a lead-time report.
//!
//! - [`read_rows`] / [`write_rows`] move rows between delimited files and
//!   memory. Output is replaced atomically.
//! - [`BatchDriver`] walks the rows one at a time, asks an
//!   [`IssueTracker`](lt_core::IssueTracker) for each issue's history and
//!   appends the derived columns.

mod csv_io;
mod driver;
mod error;

pub use csv_io::{read_rows, write_rows};
pub use driver::{
    BatchDriver, BatchReport, DERIVED_HEADERS, Row, RowError, RowStatus, RunSummary, parse_row,
};
pub use error::ReportError;
