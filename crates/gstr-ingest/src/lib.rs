//! Spreadsheet ingestion for GST return data.
//!
//! This crate turns spreadsheet exports into [`gstr_model::RawRow`] sequences
//! ready to be stored in a filing session.
//!
//! # Features
//!
//! - **CSV Loading**: first non-blank record is the header, blank rows skipped
//! - **JSON Loading**: arrays of row objects as written by sheet-to-JSON tools
//! - **Format Detection**: parser chosen from the file extension
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gstr_ingest::read_rows;
//!
//! let forward = read_rows(Path::new("uploads/forward_sep.csv"))?;
//! let reverse = read_rows(Path::new("uploads/reverse_sep.json"))?;
//! ```

mod csv_rows;
mod error;
mod json_rows;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv_rows::{EMPTY_HEADER, parse_csv_rows, read_csv_rows};
pub use json_rows::{parse_json_rows, read_json_rows};
pub use source::{MAX_INPUT_FILE_SIZE, SourceFormat, check_file_size_with_limit, read_rows};
