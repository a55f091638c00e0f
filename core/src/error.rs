//! Error types for the SDK.
//!
//! # Design
//! `MissingParameters` is raised before any network activity and renders as
//! `Missing required parameters: a, b` so callers can pattern-match on it.
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the status code
//! and the message the service put in its error body.

use thiserror::Error;

/// Errors returned by service clients and the request machinery.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more required parameters were absent.
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    /// The parameter object carried fields the operation does not declare.
    #[error("Found invalid parameters: {}", .0.join(", "))]
    UnexpectedParameters(Vec<String>),

    /// The server returned 404.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status} {status_text}: {message}")]
    Http {
        status: u16,
        status_text: String,
        message: String,
    },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The parameter object could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client or an authenticator was configured incorrectly.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Credentials could not be obtained or applied.
    #[error("authentication failed: {0}")]
    Authentication(String),
}

impl ApiError {
    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound(_) => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether sending the same request again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Http { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Statuses worth retrying: throttling and transient server failures.
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}
