//! Centralized reader for ISSUE_MAILER_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

use std::path::PathBuf;

const CONFIG: &str = "ISSUE_MAILER_CONFIG";
const LOG: &str = "ISSUE_MAILER_LOG";

/// Snapshot of all ISSUE_MAILER_* environment variables at load time.
#[derive(Debug, Default)]
pub struct EnvVars {
    /// Settings file to use when `--config` is not given.
    pub config_path: Option<PathBuf>,

    /// Diagnostic log filter in `tracing_subscriber::EnvFilter` syntax.
    pub log_filter: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all ISSUE_MAILER_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            config_path: non_empty_var(CONFIG).map(PathBuf::from),
            log_filter: non_empty_var(LOG),
        }
    }
}
