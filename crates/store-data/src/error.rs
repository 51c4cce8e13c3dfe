//! Backend error types.

use thiserror::Error;

/// Errors surfaced by the hosted backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP error from the backend API.
    #[error("HTTP error: {status} for {endpoint}")]
    Http { status: u16, endpoint: String },

    /// The request exceeded its time budget.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Connection-level failure.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The response body did not parse.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Document not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session is missing or expired.
    #[error("Unauthorized")]
    Unauthorized,
}

impl BackendError {
    /// Whether retrying the same request can plausibly succeed.
    ///
    /// Server-side failures, timeouts, and connection drops are
    /// retryable; client errors and missing documents are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            BackendError::Http { status, .. } => (500..600).contains(status),
            BackendError::Timeout(_) | BackendError::Connection(_) => true,
            BackendError::Deserialization(_)
            | BackendError::NotFound(_)
            | BackendError::Unauthorized => false,
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        BackendError::Deserialization(e.to_string())
    }
}
