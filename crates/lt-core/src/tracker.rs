//! The seam between the batch driver and a remote issue tracker.

use std::future::Future;

use crate::event::StatusChangeEvent;

/// A source of per-issue status histories.
///
/// Implementations own their transport, authentication and configuration;
/// callers only see events or an error. Histories should be returned in the
/// tracker's native order. Consumers sort them before selecting milestones,
/// so chronological order is preferred but not required.
pub trait IssueTracker {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Check that the tracker is reachable and accepts the credential.
    fn connect(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch every status transition recorded for `issue_key`.
    fn fetch_history(
        &self,
        issue_key: &str,
    ) -> impl Future<Output = Result<Vec<StatusChangeEvent>, Self::Error>> + Send;
}
