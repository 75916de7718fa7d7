//! Error types for the client boundary

use thiserror::Error;
use water_watch_core::error::SourceError;

/// Client error type covering the fetch boundary
#[derive(Error, Debug)]
pub enum Error {
    #[error("credential token missing")]
    AuthMissing,

    #[error("credential token decode failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("server returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("response decode failed: {0}")]
    Decode(String),
}

impl Error {
    /// Create a decode error from any displayable cause
    pub fn decode<E: std::fmt::Display>(err: E) -> Self {
        Self::Decode(err.to_string())
    }

    /// Category label for logging, matching the fetch-boundary taxonomy
    pub fn category(&self) -> &'static str {
        match self {
            Error::AuthMissing | Error::Token(_) => "auth_missing",
            Error::Fetch(_) | Error::Status { .. } => "fetch_failed",
            Error::Decode(_) => "decode_failed",
        }
    }
}

impl From<Error> for SourceError {
    fn from(err: Error) -> Self {
        match err {
            Error::AuthMissing | Error::Token(_) => SourceError::AuthMissing,
            Error::Fetch(e) => SourceError::Fetch(e.to_string()),
            Error::Status { status, message } => {
                SourceError::Fetch(format!("status {status}: {message}"))
            }
            Error::Decode(message) => SourceError::Decode(message),
        }
    }
}

/// Convenience result type for client operations
pub type Result<T> = std::result::Result<T, Error>;
