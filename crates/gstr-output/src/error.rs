//! Output error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or writing a return document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize return document")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The finished temp file could not be moved into place.
    #[error("failed to move finished document into {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
