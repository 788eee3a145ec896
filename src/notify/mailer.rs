use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::error::{MailError, Result};
use crate::shared::config::EmailSettings;

/// Delivery of an assembled message.
///
/// This abstraction allows swapping the SMTP transport for a recorder in tests.
pub trait Mailer {
    fn send(&self, message: &Message) -> Result<()>;
}

/// STARTTLS submission with username/password authentication.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    /// Configure the transport. No connection is made until `send`.
    pub fn new(email: &EmailSettings) -> std::result::Result<Self, MailError> {
        let transport = SmtpTransport::starttls_relay(&email.smtp_host)?
            .port(email.smtp_port)
            .credentials(Credentials::new(
                email.smtp_username.clone(),
                email.smtp_password.clone(),
            ))
            .build();
        Ok(Self { transport })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, message: &Message) -> Result<()> {
        tracing::debug!("submitting message over SMTP");
        self.transport.send(message).map_err(MailError::Smtp)?;
        Ok(())
    }
}

#[cfg(test)]
pub use recording::RecordingMailer;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::build_issue_email;
    use crate::testing::factories::{email_settings, issue};

    #[test]
    fn smtp_mailer_builds_without_connecting() {
        assert!(SmtpMailer::new(&email_settings()).is_ok());
    }

    #[test]
    fn recording_mailer_keeps_messages() {
        let mailer = RecordingMailer::default();
        let email = build_issue_email(&email_settings(), "Widgets", &issue(), None).unwrap();

        mailer.send(&email.message).unwrap();

        assert_eq!(mailer.sent().len(), 1);
    }

    #[test]
    fn failing_mailer_reports_error() {
        let mailer = RecordingMailer::failing("connection refused");
        let email = build_issue_email(&email_settings(), "Widgets", &issue(), None).unwrap();

        let err = mailer.send(&email.message).unwrap_err();

        assert_eq!(err.to_string(), "connection refused");
        assert!(mailer.sent().is_empty());
    }
}
