//! In-memory `IssueTracker` for tests.

use std::cell::RefCell;

use super::error::TrackerError;
use super::models::{Issue, IssueSummary};
use super::tracker::IssueTracker;

/// Canned tracker responses.
///
/// ```ignore
/// let tracker = MockTracker::default().with_summaries(vec![...]);
/// let tracker = MockTracker::default().with_issue(issue());
/// let tracker = MockTracker::default().failing("HTTP 404");
/// let tracker = MockTracker::default().not_installed();
/// ```
#[derive(Debug, Default)]
pub struct MockTracker {
    summaries: Vec<IssueSummary>,
    issue: Option<Issue>,
    failure: Option<String>,
    missing: bool,
    calls: RefCell<Vec<String>>,
}

impl MockTracker {
    pub fn with_summaries(mut self, summaries: Vec<IssueSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issue = Some(issue);
        self
    }

    /// Every query fails as if `gh` exited non-zero with `stderr`.
    pub fn failing(mut self, stderr: &str) -> Self {
        self.failure = Some(stderr.to_string());
        self
    }

    /// Every query fails as if `gh` were not installed.
    pub fn not_installed(mut self) -> Self {
        self.missing = true;
        self
    }

    /// Queries received so far, e.g. `["view acme/widgets 32"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn check(&self, command: &str) -> Result<(), TrackerError> {
        if self.missing {
            return Err(TrackerError::NotInstalled {
                program: "gh".to_string(),
            });
        }
        if let Some(stderr) = &self.failure {
            return Err(TrackerError::CommandFailed {
                command: command.to_string(),
                status: failed_status(),
                stderr: stderr.clone(),
            });
        }
        Ok(())
    }
}

impl IssueTracker for MockTracker {
    fn list_open_issues(
        &self,
        repo: Option<&str>,
        limit: u32,
    ) -> Result<Vec<IssueSummary>, TrackerError> {
        self.calls
            .borrow_mut()
            .push(format!("list {} {limit}", repo.unwrap_or("-")));
        self.check("gh issue list")?;
        Ok(self.summaries.iter().take(limit as usize).cloned().collect())
    }

    fn view_issue(&self, repo: &str, number: u64) -> Result<Issue, TrackerError> {
        self.calls.borrow_mut().push(format!("view {repo} {number}"));
        self.check("gh issue view")?;
        match &self.issue {
            Some(issue) if issue.number == number => Ok(issue.clone()),
            _ => Err(TrackerError::CommandFailed {
                command: "gh issue view".to_string(),
                status: failed_status(),
                stderr: format!("GraphQL: Could not resolve to an issue with the number of {number}."),
            }),
        }
    }
}

#[cfg(unix)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1)
}
