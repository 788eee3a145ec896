use std::path::{Path, PathBuf};
use std::process::Command;

use serde::de::DeserializeOwned;

use super::error::TrackerError;
use super::models::{Issue, IssueSummary};

const GH: &str = "gh";

const LIST_FIELDS: &str = "number,title,labels";
const VIEW_FIELDS: &str = "number,title,body,url,state,labels,assignees,createdAt,updatedAt";

/// Read-only queries against the issue tracker.
pub trait IssueTracker {
    /// List open issues. `repo` of `None` means the repository of the
    /// current directory.
    fn list_open_issues(
        &self,
        repo: Option<&str>,
        limit: u32,
    ) -> Result<Vec<IssueSummary>, TrackerError>;

    /// Fetch the full detail of one issue.
    fn view_issue(&self, repo: &str, number: u64) -> Result<Issue, TrackerError>;
}

/// `IssueTracker` backed by the `gh` executable.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: PathBuf,
}

impl GhCli {
    /// Run `gh` as resolved from PATH when the command is spawned.
    pub fn new() -> Self {
        Self::with_program(GH)
    }

    /// Use a specific executable instead of searching PATH.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run_json<T: DeserializeOwned>(&self, args: &[String]) -> Result<T, TrackerError> {
        let command = describe(args);
        tracing::debug!(program = %self.program.display(), ?args, "running {command}");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TrackerError::NotInstalled {
                    program: GH.to_string(),
                },
                _ => TrackerError::Spawn {
                    program: self.program.display().to_string(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            return Err(TrackerError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|source| TrackerError::Parse { command, source })
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueTracker for GhCli {
    fn list_open_issues(
        &self,
        repo: Option<&str>,
        limit: u32,
    ) -> Result<Vec<IssueSummary>, TrackerError> {
        let mut args = vec![
            "issue".to_string(),
            "list".to_string(),
            "--state".to_string(),
            "open".to_string(),
            "--json".to_string(),
            LIST_FIELDS.to_string(),
            "--limit".to_string(),
            limit.to_string(),
        ];
        if let Some(repo) = repo {
            args.push("--repo".to_string());
            args.push(repo.to_string());
        }
        self.run_json(&args)
    }

    fn view_issue(&self, repo: &str, number: u64) -> Result<Issue, TrackerError> {
        let args = [
            "issue".to_string(),
            "view".to_string(),
            number.to_string(),
            "--repo".to_string(),
            repo.to_string(),
            "--json".to_string(),
            VIEW_FIELDS.to_string(),
        ];
        self.run_json(&args)
    }
}

/// Short form for messages, e.g. "gh issue list".
fn describe(args: &[String]) -> String {
    std::iter::once(GH)
        .chain(args.iter().take(2).map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
