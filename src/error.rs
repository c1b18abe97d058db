//! Error handling for webby

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for webby operations
#[derive(Error, Debug)]
pub enum WebbyError {
    /// The request could not be built, usually because the URI is malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with anything other than `200 OK`.
    #[error("Unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned by a CSV row callback that refuses a record.
    #[error("Row rejected: {0}")]
    RowRejected(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for webby operations
pub type Result<T> = std::result::Result<T, WebbyError>;
