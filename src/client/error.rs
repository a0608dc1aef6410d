//! Fetch error types

use thiserror::Error;

/// Errors that can occur when fetching from the statistics API
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Statistics API unavailable")]
    Unavailable,

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl FetchError {
    /// Classify a transport error the way callers report it
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Unavailable
        } else {
            FetchError::Request(err)
        }
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
