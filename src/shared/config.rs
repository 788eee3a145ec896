use std::fmt;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};

/// Settings file looked up in the working directory when nothing else is given.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.ini";

/// Top-level settings, loaded once per invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub github: GitHubSettings,
    pub email: EmailSettings,
    pub test_results: TestResultsSettings,
}

/// `[GitHub]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubSettings {
    /// Repository in `owner/repo` form.
    pub repository: String,

    /// Display name used as the subject prefix (default: the `repo` part).
    pub repository_name: String,
}

/// `[Email]` section.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub from_address: String,
    pub to_addresses: Vec<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
}

impl fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSettings")
            .field("from_address", &self.from_address)
            .field("to_addresses", &self.to_addresses)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"<redacted>")
            .finish()
    }
}

/// `[TestResults]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResultsSettings {
    pub output_directory: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read settings file (missing, permission error, etc.)
    #[error("Failed to read settings file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// INI syntax error
    #[error("Invalid settings file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Missing required setting {key} in {path}")]
    MissingKey { path: PathBuf, key: String },

    #[error("Invalid value for {key} in {path}: {message}")]
    InvalidValue {
        path: PathBuf,
        key: String,
        message: String,
    },
}

/// Load settings from an INI file.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&content, path).map_err(Into::into)
}

/// Parse INI content into Settings.
///
/// Values are taken literally: no quote stripping and no backslash escapes,
/// so Windows paths survive unchanged.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings, ConfigError> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, options).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let reader = SectionReader { ini: &ini, path };

    let repository = reader.required("GitHub", "Repository")?;
    if !is_owner_repo(repository) {
        return Err(reader.invalid(
            "GitHub",
            "Repository",
            format!("expected owner/repo, got '{repository}'"),
        ));
    }
    let repository_name = reader
        .optional("GitHub", "RepositoryName")
        .unwrap_or_else(|| default_repository_name(repository))
        .to_string();

    let to_addresses = split_addresses(reader.required("Email", "ToAddresses")?);
    if to_addresses.is_empty() {
        return Err(reader.invalid("Email", "ToAddresses", "no recipients listed".to_string()));
    }
    let port = reader.required("Email", "SMTPPort")?;
    let smtp_port = port
        .parse::<u16>()
        .map_err(|e| reader.invalid("Email", "SMTPPort", format!("'{port}': {e}")))?;

    Ok(Settings {
        github: GitHubSettings {
            repository: repository.to_string(),
            repository_name,
        },
        email: EmailSettings {
            from_address: reader.required("Email", "FromAddress")?.to_string(),
            to_addresses,
            smtp_host: reader.required("Email", "SMTPHost")?.to_string(),
            smtp_port,
            smtp_username: reader.required("Email", "SMTPUsername")?.to_string(),
            smtp_password: reader.required("Email", "SMTPPassword")?.to_string(),
        },
        test_results: TestResultsSettings {
            output_directory: PathBuf::from(reader.required("TestResults", "OutputDirectory")?),
        },
    })
}

struct SectionReader<'a> {
    ini: &'a Ini,
    path: &'a Path,
}

impl<'a> SectionReader<'a> {
    /// Keys match regardless of case (`SMTPPort`, `smtpport`); section names
    /// must match exactly.
    fn optional(&self, section: &str, key: &str) -> Option<&'a str> {
        self.ini
            .section(Some(section))?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    fn required(&self, section: &str, key: &str) -> Result<&'a str, ConfigError> {
        self.optional(section, key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingKey {
                path: self.path.to_path_buf(),
                key: format!("{section}.{key}"),
            })
    }

    fn invalid(&self, section: &str, key: &str, message: String) -> ConfigError {
        ConfigError::InvalidValue {
            path: self.path.to_path_buf(),
            key: format!("{section}.{key}"),
            message,
        }
    }
}

fn is_owner_repo(repository: &str) -> bool {
    matches!(
        repository.split_once('/'),
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/')
    )
}

fn default_repository_name(repository: &str) -> &str {
    repository.rsplit('/').next().unwrap_or(repository)
}

/// Split a comma-separated address list, trimming entries and dropping empties.
fn split_addresses(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(str::to_string)
        .collect()
}
