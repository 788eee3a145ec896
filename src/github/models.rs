use std::fmt;

use serde::{Deserialize, Serialize};

/// Full issue detail as returned by `gh issue view --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub url: String,
    pub state: IssueState,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
    pub created_at: String,
    pub updated_at: String,
}

/// One row of `gh issue list --json number,title,labels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub login: String,
}

/// Issue state as reported by `gh`. States other than OPEN and CLOSED keep
/// their original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueState {
    Open,
    Closed,
    Other(String),
}

impl IssueState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Other(state) => state,
        }
    }
}

impl From<String> for IssueState {
    fn from(state: String) -> Self {
        match state.as_str() {
            "OPEN" => Self::Open,
            "CLOSED" => Self::Closed,
            _ => Self::Other(state),
        }
    }
}

impl From<IssueState> for String {
    fn from(state: IssueState) -> Self {
        match state {
            IssueState::Other(state) => state,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Issue {
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn assignee_logins(&self) -> Vec<&str> {
        self.assignees.iter().map(|a| a.login.as_str()).collect()
    }
}

impl IssueSummary {
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|l| l.name.as_str()).collect()
    }
}
