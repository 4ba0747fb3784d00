//! Error types raised by core value constructors.
//!
//! Extraction itself never fails: missing milestones are represented as
//! `None`, not signalled. Only building the input values can be rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An issue key was empty or whitespace only.
    #[error("Issue key is empty")]
    EmptyIssueKey,

    /// A changelog timestamp did not start with a `YYYY-MM-DD` date.
    #[error("Invalid changelog timestamp '{raw}': {reason}")]
    InvalidTimestamp { raw: String, reason: String },
}
