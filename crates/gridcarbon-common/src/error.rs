//! Error types for gridcarbon

use thiserror::Error;

/// Result type alias for gridcarbon operations
pub type Result<T> = std::result::Result<T, CarbonError>;

/// Main error type for gridcarbon
#[derive(Error, Debug)]
pub enum CarbonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// The single fatal, run-aborting error: a date range the pipeline cannot
/// even start on. Everything else degrades to a smaller result set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRangeError {
    #[error("invalid date `{0}`: expected dd-mm-yyyy")]
    MalformedDate(String),

    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: String, end: String },
}
