//! HTTP error types

use thiserror::Error;

/// Errors surfaced as the failure variant of a call outcome
///
/// Every expected failure path ends up here; nothing is panicked or thrown
/// under normal operation. Each failure is terminal for its call.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed base URL or default headers at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// URL scheme is neither `http` nor `https`
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    /// Connection-level failure (DNS, refused, reset)
    #[error("Transport error: {0}")]
    Transport(String),
    /// The configured timeout elapsed before the response completed
    #[error("Request timeout")]
    Timeout,
    /// HTTP status outside the 2xx range
    #[error("HTTP error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text, if any
        message: String,
    },
    /// Declared response media type is not among the accepted set
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
    /// Response declared JSON but the body could not be parsed
    #[error("Decode error: {0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Header name or value is not valid on the wire
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Transport(err.to_string())
        } else if err.is_builder() {
            Error::InvalidConfiguration(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidConfiguration(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
