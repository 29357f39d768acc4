//! Error types for the Vizier library.
//!
//! Classification and suggestion generation never fail; these errors come
//! from reading and decoding the input table.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Vizier operations.
#[derive(Debug, Error)]
pub enum VizierError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File format not supported.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no header to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Vizier operations.
pub type Result<T> = std::result::Result<T, VizierError>;
