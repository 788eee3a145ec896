use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::github::{GhCli, IssueTracker};
use crate::notify::{Mailer, SmtpMailer, build_issue_email};
use crate::shared::config::{DEFAULT_SETTINGS_FILE, Settings, load_settings};
use crate::shared::env_var::EnvVars;
use crate::test_results::{ArtifactLookup, find_latest_test_result};

/// Email a GitHub issue summary with its latest test results attached
#[derive(Parser, Clone, PartialEq, Eq, Debug)]
#[command(name = "send-issue-email", version, about)]
pub struct SendArgs {
    /// Issue number, e.g. 32
    #[arg(value_parser = parse_issue_number)]
    pub issue_number: u64,

    /// Settings file (default: $ISSUE_MAILER_CONFIG, then ./settings.ini)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Build the email and report what would be sent without sending it
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_issue_number(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| "Issue number must be a positive integer".to_string())
}

pub fn run(args: &SendArgs, env: &EnvVars) -> anyhow::Result<()> {
    let config_path = resolve_config_path(args.config.as_deref(), env);
    tracing::debug!(path = %config_path.display(), "loading settings");
    let settings = load_settings(&config_path)?;

    let tracker = GhCli::new();
    let mailer = SmtpMailer::new(&settings.email)?;
    tracing::debug!(
        host = %settings.email.smtp_host,
        port = settings.email.smtp_port,
        "SMTP endpoint"
    );

    let mut stdout = std::io::stdout().lock();
    run_with(args, &settings, &tracker, &mailer, &mut stdout)
}

/// `--config` wins over `ISSUE_MAILER_CONFIG`, which wins over `./settings.ini`.
pub fn resolve_config_path(flag: Option<&Path>, env: &EnvVars) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| env.config_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

/// Fetch, render and deliver, writing progress to `out`.
pub fn run_with(
    args: &SendArgs,
    settings: &Settings,
    tracker: &dyn IssueTracker,
    mailer: &dyn Mailer,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let number = args.issue_number;
    let repository = &settings.github.repository;

    writeln!(out, "Fetching issue #{number} from {repository}...")?;
    let issue = tracker
        .view_issue(repository, number)
        .with_context(|| format!("Failed to fetch issue #{number}"))?;
    writeln!(out, "Found: {}", issue.title)?;

    let output_dir = &settings.test_results.output_directory;
    writeln!(out, "Searching for test results in {}...", output_dir.display())?;
    let lookup = find_latest_test_result(output_dir, number);
    match &lookup {
        ArtifactLookup::Found(path) => writeln!(out, "Found test result: {}", file_name(path))?,
        ArtifactLookup::DirectoryMissing => writeln!(
            out,
            "Warning: {} directory not found.",
            output_dir.display()
        )?,
        ArtifactLookup::NoMatch => {
            writeln!(out, "Warning: No test result files found for issue #{number}")?
        }
    }

    if args.dry_run {
        writeln!(out, "Preparing email (dry run)...")?;
    } else {
        writeln!(out, "Sending email...")?;
    }
    let email = build_issue_email(
        &settings.email,
        &settings.github.repository_name,
        &issue,
        lookup.path(),
    )?;
    if let Some(name) = &email.attachment {
        writeln!(out, "Attached: {name}")?;
    }

    let recipients = email.recipients.join(", ");
    if args.dry_run {
        writeln!(out, "Dry run: email not sent to: {recipients}")?;
    } else {
        mailer
            .send(&email.message)
            .context("Failed to send email")?;
        writeln!(out, "Email sent successfully to: {recipients}")?;
    }

    writeln!(out, "Done!")?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
