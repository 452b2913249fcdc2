//! Error types for dataset loading operations.

use std::io;
use thiserror::Error;

/// The error type for dataset loading operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading a dataset file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset content is structurally invalid.
    #[error("Invalid dataset: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for dataset loading operations.
pub type Result<T> = std::result::Result<T, Error>;
