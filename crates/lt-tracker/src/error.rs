//! Tracker error types.

use lt_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the issue tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// HTTP transport error (connection refused, timeout, TLS, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The tracker rejected the credential.
    #[error("authentication rejected ({status}): check the tracker API token")]
    Unauthorized {
        /// HTTP status code returned by the tracker (401 or 403).
        status: u16,
    },

    /// The tracker has no issue with this key, or it is not visible.
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    /// The tracker returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the tracker asked us to wait.
        retry_after_secs: u64,
    },

    /// Any other non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the tracker.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// A response could not be turned into status-change events.
    #[error("parse error: {0}")]
    Parse(String),

    /// The API token contains characters that cannot be sent in a header.
    #[error("invalid API token: not representable as an HTTP header value")]
    InvalidCredential,
}

impl From<CoreError> for TrackerError {
    fn from(error: CoreError) -> Self {
        Self::Parse(error.to_string())
    }
}
