//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a spreadsheet export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file too large: {path} ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Extension is neither `.csv` nor `.json`.
    #[error("unsupported file format: {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// CSV could not be parsed.
    #[error("failed to parse CSV {source_name}: {source}")]
    CsvParse {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// JSON could not be parsed.
    #[error("failed to parse JSON {source_name}: {source}")]
    JsonParse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON top level is not an array of rows.
    #[error("expected a JSON array of row objects in {source_name}")]
    NotARowArray { source_name: String },

    /// A JSON array element is not an object.
    #[error("row {index} in {source_name} is not a JSON object")]
    RowNotObject { source_name: String, index: usize },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
