//! Sequential per-issue report driver.
//!
//! Row handling:
//!
//! ```text
//! header                → header + DERIVED_HEADERS
//! blank first field     → row + ["", "", ""]            (no tracker call)
//! tracker lookup fails  → row + [marker, marker, marker]
//! otherwise             → row + outcome.report_fields()
//! ```
//!
//! Rows are processed strictly in input order with one tracker call in
//! flight at a time. A failing row never stops the batch.

use lt_core::{IssueKey, IssueTracker, build_outcome};
use thiserror::Error;

/// One record of the spreadsheet: the issue key first, then any other
/// columns, all kept as text.
pub type Row = Vec<String>;

/// Column names appended to the header row.
pub const DERIVED_HEADERS: [&str; 3] = [
    "First_In_Progress_Date",
    "Last_Done_Date",
    "Days_In_Progress_To_Done",
];

/// Default text written into the derived cells of a failed row.
const DEFAULT_ERROR_MARKER: &str = "ERROR";

/// Why a data row was skipped without contacting the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Row {row}: Empty row")]
    EmptyRow { row: usize },

    #[error("Row {row}: Empty issue key")]
    EmptyIssueKey { row: usize },
}

/// Extract the issue key from the first field of a data row.
///
/// `row_number` counts data rows from 1 and is only used in the error.
///
/// # Errors
///
/// Returns [`RowError::EmptyRow`] for a row with no fields and
/// [`RowError::EmptyIssueKey`] when the first field is blank.
pub fn parse_row(row: &[String], row_number: usize) -> Result<IssueKey, RowError> {
    let first = row.first().ok_or(RowError::EmptyRow { row: row_number })?;
    IssueKey::parse(first).map_err(|_| RowError::EmptyIssueKey { row: row_number })
}

/// What happened to a single data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
    /// Milestones derived and appended.
    Processed { issue_key: IssueKey },
    /// No usable issue key; blank derived cells appended.
    Skipped(RowError),
    /// The tracker lookup failed; error markers appended.
    Failed { issue_key: IssueKey, message: String },
}

/// Row counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Number of data rows seen.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.processed + self.skipped + self.failed
    }

    fn record(&mut self, status: &RowStatus) {
        match status {
            RowStatus::Processed { .. } => self.processed += 1,
            RowStatus::Skipped(_) => self.skipped += 1,
            RowStatus::Failed { .. } => self.failed += 1,
        }
    }
}

/// Output rows plus the per-run counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub rows: Vec<Row>,
    pub summary: RunSummary,
}

/// Drives one report run against a tracker.
pub struct BatchDriver<'a, T> {
    tracker: &'a T,
    error_marker: String,
}

impl<'a, T: IssueTracker> BatchDriver<'a, T> {
    #[must_use]
    pub fn new(tracker: &'a T) -> Self {
        Self {
            tracker,
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
        }
    }

    /// Replace the text written into failed rows.
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Process `rows` (header first) and return the augmented rows.
    pub async fn run(&self, rows: Vec<Row>) -> BatchReport {
        self.run_with_observer(rows, |_, _| {}).await
    }

    /// Like [`run`](Self::run), calling `observer` after each data row with
    /// its 1-based number and outcome.
    pub async fn run_with_observer<F>(&self, rows: Vec<Row>, mut observer: F) -> BatchReport
    where
        F: FnMut(usize, &RowStatus),
    {
        let mut rows = rows.into_iter();
        let mut output = Vec::with_capacity(rows.len());
        let mut summary = RunSummary::default();

        let Some(mut header) = rows.next() else {
            return BatchReport {
                rows: output,
                summary,
            };
        };
        header.extend(DERIVED_HEADERS.iter().map(ToString::to_string));
        output.push(header);

        for (index, row) in rows.enumerate() {
            let row_number = index + 1;
            let (row, status) = self.process_row(row, row_number).await;
            summary.record(&status);
            observer(row_number, &status);
            output.push(row);
        }

        tracing::info!(
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            "batch complete"
        );
        BatchReport {
            rows: output,
            summary,
        }
    }

    async fn process_row(&self, mut row: Row, row_number: usize) -> (Row, RowStatus) {
        let issue_key = match parse_row(&row, row_number) {
            Ok(key) => key,
            Err(error) => {
                tracing::warn!(%error, "skipping row");
                row.extend(std::iter::repeat_n(String::new(), DERIVED_HEADERS.len()));
                return (row, RowStatus::Skipped(error));
            }
        };

        match self.tracker.fetch_history(issue_key.as_str()).await {
            Ok(events) => {
                let outcome = build_outcome(issue_key.clone(), events);
                if outcome.is_inverted() {
                    tracing::warn!(
                        issue = %issue_key,
                        days = ?outcome.days_between(),
                        "last done transition precedes first in-progress transition"
                    );
                }
                tracing::info!(issue = %issue_key, row = row_number, "processed");
                row.extend(outcome.report_fields());
                (row, RowStatus::Processed { issue_key })
            }
            Err(error) => {
                tracing::error!(issue = %issue_key, row = row_number, %error, "failed to fetch history");
                row.extend(std::iter::repeat_n(
                    self.error_marker.clone(),
                    DERIVED_HEADERS.len(),
                ));
                (
                    row,
                    RowStatus::Failed {
                        issue_key,
                        message: error.to_string(),
                    },
                )
            }
        }
    }
}
