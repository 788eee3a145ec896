//! Locate the newest test-result artifact for an issue.
//!
//! Artifacts are written by the test runner as
//! `Test-Results-GH<issue>-<MM-DD-YYYY-HH-MM-SS>.htm[l]`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use lazy_regex::{Lazy, Regex, lazy_regex};

static ARTIFACT_RE: Lazy<Regex> =
    lazy_regex!(r"^Test-Results-GH(\d+)-(\d{2}-\d{2}-\d{4}-\d{2}-\d{2}-\d{2})\.html?$");

const TIMESTAMP_FORMAT: &str = "%m-%d-%Y-%H-%M-%S";

/// Result of looking for an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactLookup {
    Found(PathBuf),
    /// The output directory does not exist (or is not a directory).
    DirectoryMissing,
    /// The directory exists but holds no parseable artifact for the issue.
    NoMatch,
}

impl ArtifactLookup {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::DirectoryMissing | Self::NoMatch => None,
        }
    }
}

/// Return the artifact for `issue_number` with the latest embedded timestamp.
///
/// Names with an impossible timestamp (month 13, Feb 30, ...) are skipped.
/// Equal timestamps are resolved by the greater file name, so the result does
/// not depend on directory order.
pub fn find_latest_test_result(dir: &Path, issue_number: u64) -> ArtifactLookup {
    if !dir.is_dir() {
        return ArtifactLookup::DirectoryMissing;
    }
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), "cannot list directory: {e}");
            return ArtifactLookup::DirectoryMissing;
        }
    };

    let newest = entries
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter_map(|name| {
            let timestamp = parse_artifact_name(&name, issue_number)?;
            tracing::debug!(%name, %timestamp, "artifact candidate");
            Some((timestamp, name))
        })
        .max();

    match newest {
        Some((_, name)) => ArtifactLookup::Found(dir.join(name)),
        None => ArtifactLookup::NoMatch,
    }
}

/// Timestamp embedded in `name` if it is an artifact for `issue_number`.
pub fn parse_artifact_name(name: &str, issue_number: u64) -> Option<NaiveDateTime> {
    let caps = ARTIFACT_RE.captures(name)?;
    if caps[1] != issue_number.to_string() {
        return None;
    }
    NaiveDateTime::parse_from_str(&caps[2], TIMESTAMP_FORMAT).ok()
}
