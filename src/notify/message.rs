use std::fs;
use std::path::Path;

use lettre::Message;
use lettre::message::header::{ContentTransferEncoding, ContentType};
use lettre::message::{Attachment, Body, Mailbox, MultiPart, SinglePart};

use super::error::MailError;
use super::html::render_issue_html;
use crate::github::Issue;
use crate::shared::config::EmailSettings;

const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// A fully assembled notification, ready to hand to a `Mailer`.
#[derive(Debug, Clone)]
pub struct IssueEmail {
    pub message: Message,
    pub recipients: Vec<String>,
    /// File name of the attached artifact, if one was attached.
    pub attachment: Option<String>,
}

/// Subject line, e.g. `Widgets GH-32: Login fails`.
pub fn subject_for(repo_name: &str, issue: &Issue) -> String {
    if repo_name.is_empty() {
        format!("GH-{}: {}", issue.number, issue.title)
    } else {
        format!("{repo_name} GH-{}: {}", issue.number, issue.title)
    }
}

/// Build the notification for `issue`.
///
/// The artifact is attached only when `attachment` names an existing file;
/// a missing file is skipped without error.
pub fn build_issue_email(
    email: &EmailSettings,
    repo_name: &str,
    issue: &Issue,
    attachment: Option<&Path>,
) -> Result<IssueEmail, MailError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&email.from_address)?)
        .subject(subject_for(repo_name, issue));
    for address in &email.to_addresses {
        builder = builder.to(parse_mailbox(address)?);
    }

    let mut body = MultiPart::mixed().singlepart(SinglePart::html(render_issue_html(issue)));
    let mut attached = None;

    match attachment {
        Some(path) if path.is_file() => {
            let (file_name, part) = attachment_part(path)?;
            body = body.singlepart(part);
            attached = Some(file_name);
        }
        Some(path) => {
            tracing::debug!(path = %path.display(), "attachment does not exist, sending without it");
        }
        None => {}
    }

    Ok(IssueEmail {
        message: builder.multipart(body)?,
        recipients: email.to_addresses.clone(),
        attachment: attached,
    })
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse()
        .map_err(|source| MailError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

/// Base64-encoded `application/octet-stream` part named after the file.
fn attachment_part(path: &Path) -> Result<(String, SinglePart), MailError> {
    let content = fs::read(path).map_err(|source| MailError::Attachment {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());

    let body = Body::new_with_encoding(content, ContentTransferEncoding::Base64)
        .unwrap_or_else(Body::new);
    let content_type = ContentType::parse(ATTACHMENT_CONTENT_TYPE)?;
    let part = Attachment::new(file_name.clone()).body(body, content_type);

    Ok((file_name, part))
}
