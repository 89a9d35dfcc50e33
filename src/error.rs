// src/error.rs
//
// Error taxonomy. Every error is handled where its operation was issued
// (GUI status line / CLI exit); nothing here is fatal to the app.

use thiserror::Error;

/// Loading the spot list failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("server returned {status}: {message}")]
    Status { status: String, message: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Creating a spot failed.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("server returned {status}: {message}")]
    Status { status: String, message: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Serializing or writing an export failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),
}

/// Bad filter/sort input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("column index {0} out of range (0..{max})", max = crate::model::Column::COUNT)]
    ColumnOutOfRange(usize),
}
