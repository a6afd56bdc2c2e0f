//! Error types for address data ingestion.

use std::path::PathBuf;
use thiserror::Error;

use addrnorm_model::ModelError;

/// Errors that can occur while loading a source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Encoding Errors ===
    /// The configured encoding label is not recognised.
    #[error("unknown text encoding '{label}'")]
    UnknownEncoding { label: String },

    /// The bytes are not valid in the configured encoding.
    #[error("{source_name} is not valid {encoding} text")]
    Decode {
        source_name: String,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Malformed delimited text.
    #[error("failed to parse CSV {source_name}: {source}")]
    CsvParse {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// CSV has no header row.
    #[error("CSV is empty: {source_name}")]
    EmptyCsv { source_name: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
