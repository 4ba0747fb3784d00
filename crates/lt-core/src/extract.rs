//! Milestone extraction.
//!
//! An issue's changelog is reduced to two milestones:
//!
//! ```text
//! first transition whose target status contains "progress"  → start
//! last transition whose target status contains "done"       → end
//! end - start (calendar days)                               → lead time
//! ```
//!
//! Matching is a case-insensitive substring test on the target status, so
//! `In Progress`, `IN-PROGRESS-REVIEW`, `Done` and `done-duplicate` all
//! qualify. Both rules are checked independently for every event.

use chrono::NaiveDate;

use crate::event::StatusChangeEvent;
use crate::issue_key::IssueKey;
use crate::outcome::IssueOutcome;

const IN_PROGRESS_MARKER: &str = "progress";
const DONE_MARKER: &str = "done";

/// The two milestone events selected from one issue's changelog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Milestones<'a> {
    pub first_in_progress: Option<&'a StatusChangeEvent>,
    pub last_done: Option<&'a StatusChangeEvent>,
}

/// Whether `event` moves the issue into an in-progress state.
#[must_use]
pub fn is_in_progress(event: &StatusChangeEvent) -> bool {
    target_contains(event, IN_PROGRESS_MARKER)
}

/// Whether `event` moves the issue into a done state.
#[must_use]
pub fn is_done(event: &StatusChangeEvent) -> bool {
    target_contains(event, DONE_MARKER)
}

fn target_contains(event: &StatusChangeEvent, marker: &str) -> bool {
    event
        .to_status()
        .filter(|status| !status.is_empty())
        .is_some_and(|status| status.to_lowercase().contains(marker))
}

/// Pick the first in-progress and the last done transition, scanning
/// `events` in the order given.
///
/// The result is only meaningful when `events` is chronological;
/// [`build_outcome`] takes care of that through [`chronological`].
#[must_use]
pub fn select_milestones(events: &[StatusChangeEvent]) -> Milestones<'_> {
    let mut milestones = Milestones::default();
    for event in events {
        if milestones.first_in_progress.is_none() && is_in_progress(event) {
            milestones.first_in_progress = Some(event);
        }
        if is_done(event) {
            milestones.last_done = Some(event);
        }
    }
    milestones
}

/// Whole calendar days from `start` to `end`, or `None` if either is absent.
///
/// The result is negative when `end` precedes `start`.
#[must_use]
pub fn days_between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<i64> {
    Some(end?.signed_duration_since(start?).num_days())
}

/// Order events by day, oldest first.
///
/// The sort is stable: events on the same day keep the relative order the
/// tracker delivered them in, which is the only intra-day ordering left once
/// time of day has been discarded.
#[must_use]
pub fn chronological(mut events: Vec<StatusChangeEvent>) -> Vec<StatusChangeEvent> {
    events.sort_by_key(StatusChangeEvent::occurred_at);
    events
}

/// Derive the [`IssueOutcome`] for one issue from its raw changelog.
///
/// Events are put in chronological order first, so trackers that return
/// newest-first or unordered histories still yield the right milestones.
/// Missing milestones are represented as absent values, never as errors.
#[must_use]
pub fn build_outcome(issue_key: IssueKey, events: Vec<StatusChangeEvent>) -> IssueOutcome {
    let events = chronological(events);
    let milestones = select_milestones(&events);
    IssueOutcome::from_dates(
        issue_key,
        milestones
            .first_in_progress
            .map(StatusChangeEvent::occurred_at),
        milestones.last_done.map(StatusChangeEvent::occurred_at),
    )
}
