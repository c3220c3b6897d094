//! Error types for harvardcv library.

use std::io;
use thiserror::Error;

use crate::model::Field;

/// Result type alias for harvardcv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering or exporting a CV.
#[derive(Error, Debug)]
pub enum Error {
    /// A mandatory record field (name or email) is empty.
    #[error("Missing required field: {0}")]
    MissingRequiredField(Field),

    /// The email address does not look like an address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Error during serialization of the rendered document.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The output sink refused or failed to store the file.
    #[error("Sink error: {0}")]
    Sink(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record or options file could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the user can fix this by correcting the form input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Error::MissingRequiredField(_) | Error::InvalidEmail(_))
    }
}
