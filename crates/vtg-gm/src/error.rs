//! Error types for GM API calls

use thiserror::Error;
use vtg_core::AdapterError;

/// Result type alias for GM client operations
pub type Result<T> = std::result::Result<T, GmClientError>;

/// Errors that can occur while calling the GM API
#[derive(Error, Debug)]
pub enum GmClientError {
    /// Empty vehicle id or endpoint
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Response body was not a JSON envelope
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Envelope reported a status other than "200"
    #[error("GM API returned status {status}: {reason}")]
    Status { status: String, reason: String },

    /// Envelope reported success but carried no data
    #[error("received empty response with no data")]
    EmptyData,
}

impl GmClientError {
    /// Create a status error from the envelope's status and reason
    pub fn status(status: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Status {
            status: status.into(),
            reason: reason.into(),
        }
    }
}

/// Reason reported for transport failures; the full error is only logged
pub const UPSTREAM_UNREACHABLE: &str = "upstream unreachable";

impl From<GmClientError> for AdapterError {
    fn from(e: GmClientError) -> Self {
        match e {
            GmClientError::InvalidArgument(m) => AdapterError::InvalidArgument(m),
            GmClientError::Status { status, reason } => AdapterError::upstream(Some(status), reason),
            GmClientError::InvalidUrl(e) => AdapterError::Internal(e.to_string()),
            GmClientError::HttpError(e) => {
                tracing::warn!(error = %e, "GM API request failed");
                AdapterError::upstream(None, UPSTREAM_UNREACHABLE)
            }
            other => AdapterError::upstream(None, other.to_string()),
        }
    }
}
