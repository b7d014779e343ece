//! Input file handling: format detection and size-checked reads.

use std::fmt;
use std::path::Path;

use gstr_model::RawRow;

use crate::csv_rows::parse_csv_rows;
use crate::error::{IngestError, Result};
use crate::json_rows::parse_json_rows;

/// Maximum file size accepted for a single upload (50 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Supported spreadsheet export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON array of row objects.
    Json,
}

impl SourceFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if extension.eq_ignore_ascii_case("csv") {
            Ok(SourceFormat::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Ok(SourceFormat::Json)
        } else {
            Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Json => "json",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Read a whole input file after checking its size.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)?;
    std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the rows of a spreadsheet export, choosing the parser by extension.
///
/// # Errors
///
/// Returns an error when the file is missing, too large, has an unsupported
/// extension, or cannot be parsed.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let format = SourceFormat::from_path(path)?;
    let bytes = read_file(path)?;
    let source_name = path.display().to_string();
    let rows = match format {
        SourceFormat::Csv => parse_csv_rows(bytes.as_slice(), &source_name)?,
        SourceFormat::Json => parse_json_rows(&bytes, &source_name)?,
    };
    tracing::info!(
        path = %path.display(),
        format = %format,
        rows = rows.len(),
        "loaded rows"
    );
    Ok(rows)
}
