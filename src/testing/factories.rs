//! Test factories for creating test data with sensible defaults.
//!
//! Use `*_with()` variants to customize specific fields.
//!
//! # Example
//! ```ignore
//! use crate::testing::factories::{issue, issue_with};
//!
//! let i = issue();
//! let i = issue_with(|i| {
//!     i.title = "Custom Title".to_string();
//!     i.labels.clear();
//! });
//! ```

use std::path::PathBuf;

use crate::github::{Assignee, Issue, IssueState, IssueSummary, Label};
use crate::shared::config::{EmailSettings, GitHubSettings, Settings, TestResultsSettings};

// =============================================================================
// Issue factories
// =============================================================================

/// Create an Issue with default test values.
pub fn issue() -> Issue {
    Issue {
        number: 32,
        title: "Login fails".to_string(),
        body: Some("Steps to reproduce".to_string()),
        url: "https://github.com/acme/widgets/issues/32".to_string(),
        state: IssueState::Open,
        labels: labels(&["ready"]),
        assignees: vec![Assignee {
            login: "octocat".to_string(),
        }],
        created_at: "2024-01-02T10:00:00Z".to_string(),
        updated_at: "2024-01-03T09:00:00Z".to_string(),
    }
}

/// Create an Issue with customizations applied via closure.
pub fn issue_with(f: impl FnOnce(&mut Issue)) -> Issue {
    let mut i = issue();
    f(&mut i);
    i
}

/// Create a list-row summary with the given labels.
pub fn summary(number: u64, title: &str, label_names: &[&str]) -> IssueSummary {
    IssueSummary {
        number,
        title: title.to_string(),
        labels: labels(label_names),
    }
}

pub fn labels(names: &[&str]) -> Vec<Label> {
    names
        .iter()
        .map(|name| Label {
            name: name.to_string(),
        })
        .collect()
}

// =============================================================================
// Settings factories
// =============================================================================

pub fn email_settings() -> EmailSettings {
    EmailSettings {
        from_address: "ci@acme.test".to_string(),
        to_addresses: vec!["lead@acme.test".to_string(), "qa@acme.test".to_string()],
        smtp_host: "smtp.acme.test".to_string(),
        smtp_port: 587,
        smtp_username: "mailer".to_string(),
        smtp_password: "secret".to_string(),
    }
}

/// Create Settings whose test-result directory is `output_directory`.
pub fn settings(output_directory: impl Into<PathBuf>) -> Settings {
    Settings {
        github: GitHubSettings {
            repository: "acme/widgets".to_string(),
            repository_name: "widgets".to_string(),
        },
        email: email_settings(),
        test_results: TestResultsSettings {
            output_directory: output_directory.into(),
        },
    }
}
