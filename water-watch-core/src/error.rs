//! Error types for the core domain

use thiserror::Error;

/// Core error type for domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("State transition error: {message}")]
    StateTransition { message: String },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl Error {
    /// Create a validation error with a formatted message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a state transition error
    pub fn state_transition<S: Into<String>>(message: S) -> Self {
        Self::StateTransition {
            message: message.into(),
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "validation",
            Error::Serialization(_) => "serialization",
            Error::StateTransition { .. } => "state_transition",
        }
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by an [`crate::view::EnvironmentSource`]
///
/// The three variants mirror the fetch-boundary taxonomy: missing
/// credentials, transport failure, and malformed response shape. The view
/// state treats all of them as "no update".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("credential token missing or unusable")]
    AuthMissing,

    #[error("environment fetch failed: {0}")]
    Fetch(String),

    #[error("environment response decode failed: {0}")]
    Decode(String),
}

impl SourceError {
    /// Category label used in log fields
    pub fn category(&self) -> &'static str {
        match self {
            SourceError::AuthMissing => "auth_missing",
            SourceError::Fetch(_) => "fetch_failed",
            SourceError::Decode(_) => "decode_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let validation_err = Error::validation("name must not be empty");
        assert_eq!(validation_err.category(), "validation");

        let transition_err = Error::state_transition("modal already closed");
        assert_eq!(transition_err.category(), "state_transition");
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let core_err: Error = json_err.into();
        assert_eq!(core_err.category(), "serialization");
    }

    #[test]
    fn test_source_error_categories() {
        assert_eq!(SourceError::AuthMissing.category(), "auth_missing");
        assert_eq!(
            SourceError::Fetch("connection refused".into()).category(),
            "fetch_failed"
        );
        assert_eq!(
            SourceError::Decode("missing field".into()).category(),
            "decode_failed"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::validation("location must not be empty");
        let display_str = format!("{}", err);
        assert!(display_str.contains("Validation error"));
        assert!(display_str.contains("location must not be empty"));
    }
}
