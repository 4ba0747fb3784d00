//! # lt-core
//!
//! Core types and the milestone extraction algorithm for leadtime.
//!
//! This crate has no I/O. It provides:
//! - [`StatusChangeEvent`], one observed status transition of an issue
//! - [`IssueKey`] and [`IssueOutcome`], the per-issue derived result
//! - The pure extraction functions in [`extract`]
//! - The [`IssueTracker`] seam that remote tracker clients implement

pub mod errors;
pub mod event;
pub mod extract;
pub mod issue_key;
pub mod outcome;
pub mod tracker;

pub use errors::CoreError;
pub use event::StatusChangeEvent;
pub use extract::{Milestones, build_outcome, chronological, days_between, select_milestones};
pub use issue_key::IssueKey;
pub use outcome::IssueOutcome;
pub use tracker::IssueTracker;
