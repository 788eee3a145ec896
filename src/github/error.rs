//! Issue tracker error types.

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("'{program}' command not found. Please install GitHub CLI.")]
    NotInstalled { program: String },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to parse output of `{command}`: {source}")]
    Parse {
        command: String,
        source: serde_json::Error,
    },
}
