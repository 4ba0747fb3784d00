//! The derived per-issue result.

use chrono::NaiveDate;

use crate::extract::days_between;
use crate::issue_key::IssueKey;

/// Output layout for milestone dates in reports.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Milestone dates and the day count derived for one issue.
///
/// `days_between` is present exactly when both dates are present. The value
/// is computed here from the two dates, so it cannot drift from them. A
/// negative count means the last "done" transition predates the first
/// "in progress" one; it is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueOutcome {
    issue_key: IssueKey,
    first_in_progress_date: Option<NaiveDate>,
    last_done_date: Option<NaiveDate>,
    days_between: Option<i64>,
}

impl IssueOutcome {
    #[must_use]
    pub fn from_dates(
        issue_key: IssueKey,
        first_in_progress_date: Option<NaiveDate>,
        last_done_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            issue_key,
            first_in_progress_date,
            last_done_date,
            days_between: days_between(first_in_progress_date, last_done_date),
        }
    }

    #[must_use]
    pub const fn issue_key(&self) -> &IssueKey {
        &self.issue_key
    }

    #[must_use]
    pub const fn first_in_progress_date(&self) -> Option<NaiveDate> {
        self.first_in_progress_date
    }

    #[must_use]
    pub const fn last_done_date(&self) -> Option<NaiveDate> {
        self.last_done_date
    }

    #[must_use]
    pub const fn days_between(&self) -> Option<i64> {
        self.days_between
    }

    /// True when the day count is negative.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.days_between.is_some_and(|days| days < 0)
    }

    /// The three report cells: first in-progress date, last done date and
    /// day count. Absent values render as empty text.
    #[must_use]
    pub fn report_fields(&self) -> [String; 3] {
        [
            format_date(self.first_in_progress_date),
            format_date(self.last_done_date),
            self.days_between.map(|days| days.to_string()).unwrap_or_default(),
        ]
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(REPORT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
