//! Error types for the metaprep library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for metaprep operations.
///
/// Only two conditions are fatal to a pipeline run: input that cannot be
/// parsed into rows and columns at all, and a configured required column
/// that is absent from the schema. Per-row problems (null values,
/// unparsable dates) are resolved by imputation policy and never surface
/// here. An empty result table is not an error.
#[derive(Debug, Error)]
pub enum MetaprepError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row does not match the header's column count.
    #[error("malformed input at row {row}: expected {expected} columns, found {found}")]
    MalformedInput {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The source has no header or no columns to work with.
    #[error("empty data: {0}")]
    EmptyData(String),

    /// A column the configuration designates as required is absent.
    #[error("required column '{0}' is missing from the schema")]
    MissingColumn(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for metaprep operations.
pub type Result<T> = std::result::Result<T, MetaprepError>;
