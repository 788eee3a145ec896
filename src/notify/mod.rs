//! Issue notification email: rendering, message assembly and delivery.

mod error;
mod html;
mod mailer;
mod message;

pub use error::MailError;
pub use html::{escape_html, render_issue_html};
#[cfg(test)]
pub use mailer::RecordingMailer;
pub use mailer::{Mailer, SmtpMailer};
pub use message::{IssueEmail, build_issue_email, subject_for};
