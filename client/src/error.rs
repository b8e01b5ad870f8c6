//! Error types for breach searches
//!
//! This module provides the error taxonomy for one search attempt.
//! Nothing here retries automatically; every failure surfaces once as a
//! terminal outcome and the caller may re-invoke the whole flow.

use thiserror::Error;

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error type for search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// No non-blank field was provided; raised before any network call
    #[error("No data to search")]
    NoSearchData,

    /// More than one field was provided for a sensitive search
    #[error("Sensitive searches accept exactly one field")]
    MultipleSensitiveFields,

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; carries the server's error message verbatim
    #[error("Server error: {0}")]
    Server(String),

    /// Response body did not match the expected contract
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
