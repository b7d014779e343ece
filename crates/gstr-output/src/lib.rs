//! Return document output.
//!
//! Renders a [`gstr_model::FilingDocument`] as indented JSON and writes it
//! next to any earlier returns without ever leaving a partial file.

pub mod error;
pub mod json;

pub use error::{OutputError, Result};
pub use json::{document_file_name, to_pretty_json, write_document};
