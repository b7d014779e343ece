//! CSV exports of spreadsheet sheets.
//!
//! The first non-blank record is the header row; every later non-blank record
//! becomes one [`RawRow`] keyed by header name. Cells are kept as text and
//! blank cells are recorded as missing.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use gstr_model::{CellValue, RawRow};

use crate::error::{IngestError, Result};
use crate::source::read_file;

/// Header given to columns whose header cell is blank.
pub const EMPTY_HEADER: &str = "__EMPTY";

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Make header names unique: blank headers become `__EMPTY`, repeats get a
/// `_1`, `_2`, ... suffix in order of appearance.
fn dedupe_headers(raw: &[String]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(raw.len());
    for header in raw {
        let base = if header.is_empty() {
            EMPTY_HEADER.to_string()
        } else {
            header.clone()
        };
        let mut candidate = base.clone();
        let mut suffix = 0usize;
        while headers.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}_{suffix}");
        }
        headers.push(candidate);
    }
    headers
}

/// Read rows from a CSV file on disk.
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>> {
    let bytes = read_file(path)?;
    parse_csv_rows(bytes.as_slice(), &path.display().to_string())
}

/// Parse CSV rows from any reader. `source_name` labels errors and logs.
pub fn parse_csv_rows<R: Read>(input: R, source_name: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            source_name: source_name.to_string(),
            source,
        })?;
        if record.iter().all(|value| normalize_cell(value).is_empty()) {
            continue;
        }
        let Some(columns) = headers.as_ref() else {
            let raw: Vec<String> = record.iter().map(normalize_header).collect();
            headers = Some(dedupe_headers(&raw));
            continue;
        };
        if record.len() > columns.len() {
            tracing::debug!(
                source = %source_name,
                extra = record.len() - columns.len(),
                "ignoring cells beyond the header row"
            );
        }
        let mut row = RawRow::new();
        for (idx, column) in columns.iter().enumerate() {
            let value = record.get(idx).map(normalize_cell).unwrap_or_default();
            row.insert(column.clone(), CellValue::text(value));
        }
        rows.push(row);
    }
    tracing::debug!(
        source = %source_name,
        columns = headers.as_ref().map_or(0, Vec::len),
        rows = rows.len(),
        "parsed CSV rows"
    );
    Ok(rows)
}
