//! Issue tracker access through the GitHub CLI (`gh`).
//!
//! The `IssueTracker` trait is the seam between the commands and the `gh`
//! subprocess; tests substitute `MockTracker`.

mod error;
#[cfg(test)]
mod mock;
mod models;
mod tracker;

pub use error::TrackerError;
#[cfg(test)]
pub use mock::MockTracker;
pub use models::{Assignee, Issue, IssueState, IssueSummary, Label};
pub use tracker::{GhCli, IssueTracker};
