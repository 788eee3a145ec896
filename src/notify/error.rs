use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid email address '{address}': {source}")]
    InvalidAddress {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("Failed to read attachment {path}: {source}")]
    Attachment {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("Invalid content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

pub type Result<T> = anyhow::Result<T>;
