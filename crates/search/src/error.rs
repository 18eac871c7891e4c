//! Error types for the search crate.
//!
//! Matching itself never fails; these cover decoding candidate records
//! supplied as JSON.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for programmatic handling across the workspace.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// JSON parsing error
    JsonParsing = 11001,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::JsonError(_) => SearchErrorCode::JsonParsing,
        }
    }
}
