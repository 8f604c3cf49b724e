//! Unified SDK error types.

use thiserror::Error;

use crate::operation::Operation;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Operation(#[from] OperationError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Construction-time errors. Never produced by an individual call.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// HTTP-layer errors, passed through to the caller as-is.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request ({status}): {body}")]
    BadRequest { status: u16, body: String },

    #[error("Response body is not valid JSON: {0}")]
    Decode(String),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("auth failed: response carried no session cookie")]
    MissingSessionCookie,
}

/// A strict response transform found no usable result in the envelope.
///
/// `message` is the operation-specific text shown to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct OperationError {
    pub operation: Operation,
    pub status: u16,
    pub message: &'static str,
}

impl OperationError {
    pub fn new(operation: Operation, status: u16, message: &'static str) -> Self {
        Self {
            operation,
            status,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_error_displays_message_only() {
        let err = OperationError::new(Operation::CreateTask, 200, "Task is not added due to some error");
        assert_eq!(err.to_string(), "Task is not added due to some error");

        let sdk: SdkError = err.into();
        assert_eq!(sdk.to_string(), "Task is not added due to some error");
    }

    #[test]
    fn test_auth_error_wraps_into_sdk_error() {
        let sdk: SdkError = AuthError::MissingSessionCookie.into();
        assert!(matches!(sdk, SdkError::Auth(AuthError::MissingSessionCookie)));
    }
}
