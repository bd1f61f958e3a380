//! Text-generation error types.

use thiserror::Error;

/// Failure classes of a generation call.
///
/// Each class maps to its own user-facing message upstream, so transport
/// failures are classified rather than wrapped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// No response within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The service could not be reached (connection refused, DNS, ...).
    #[error("service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a non-success status code.
    #[error("service returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// The response body was not the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Unreachable(err.to_string())
        } else if err.is_decode() {
            Self::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}
