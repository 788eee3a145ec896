use clap::Parser;

use crate::github::{GhCli, IssueSummary, IssueTracker};

/// Labels that mark an issue as actively being worked on.
pub const ACTIVE_LABELS: [&str; 2] = ["in-progress", "ready"];

const DEFAULT_LIMIT: u32 = 50;

/// List open issues labeled in-progress or ready
#[derive(Parser, Clone, PartialEq, Eq, Debug)]
#[command(name = "list-issues", version, about)]
pub struct ListArgs {
    /// Repository in owner/repo form (default: repository of the current directory)
    #[arg(long)]
    pub repo: Option<String>,

    /// Maximum number of open issues to fetch
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

pub fn run(args: &ListArgs) -> anyhow::Result<()> {
    let tracker = GhCli::new();
    let output = run_with_tracker(args, &tracker)?;
    print!("{output}");
    Ok(())
}

/// Internal implementation that returns the formatted output for testability.
pub fn run_with_tracker(args: &ListArgs, tracker: &dyn IssueTracker) -> anyhow::Result<String> {
    let issues = tracker.list_open_issues(args.repo.as_deref(), args.limit)?;
    tracing::debug!(fetched = issues.len(), "open issues");

    Ok(filter_active(&issues)
        .into_iter()
        .map(|issue| format!("{}\n", format_issue_line(issue)))
        .collect())
}

/// Issues carrying at least one of [`ACTIVE_LABELS`], in tracker order.
pub fn filter_active(issues: &[IssueSummary]) -> Vec<&IssueSummary> {
    issues.iter().filter(|issue| is_active(issue)).collect()
}

fn is_active(issue: &IssueSummary) -> bool {
    issue
        .labels
        .iter()
        .any(|label| ACTIVE_LABELS.contains(&label.name.as_str()))
}

/// `32: Login fails - Labels: bug,ready`
pub fn format_issue_line(issue: &IssueSummary) -> String {
    format!(
        "{}: {} - Labels: {}",
        issue.number,
        issue.title,
        issue.label_names().join(",")
    )
}
