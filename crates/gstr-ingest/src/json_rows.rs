//! JSON row exports: a top-level array with one object per spreadsheet row.
//!
//! This is the shape spreadsheet-to-JSON converters produce. Numbers stay
//! numeric, strings stay text, `null` is missing, and nested values are kept
//! as their JSON text.

use std::path::Path;
use std::str::FromStr;

use gstr_model::{CellValue, RawRow};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{IngestError, Result};
use crate::source::read_file;

/// Read rows from a JSON file on disk.
pub fn read_json_rows(path: &Path) -> Result<Vec<RawRow>> {
    let bytes = read_file(path)?;
    parse_json_rows(&bytes, &path.display().to_string())
}

/// Parse rows from JSON bytes. `source_name` labels errors and logs.
pub fn parse_json_rows(input: &[u8], source_name: &str) -> Result<Vec<RawRow>> {
    let input = input.strip_prefix("\u{feff}".as_bytes()).unwrap_or(input);
    let value: Value = serde_json::from_slice(input).map_err(|source| IngestError::JsonParse {
        source_name: source_name.to_string(),
        source,
    })?;
    let Value::Array(items) = value else {
        return Err(IngestError::NotARowArray {
            source_name: source_name.to_string(),
        });
    };
    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(IngestError::RowNotObject {
                source_name: source_name.to_string(),
                index,
            });
        };
        let row: RawRow = fields
            .into_iter()
            .map(|(column, value)| (column.trim().to_string(), json_cell(value)))
            .collect();
        rows.push(row);
    }
    tracing::debug!(source = %source_name, rows = rows.len(), "parsed JSON rows");
    Ok(rows)
}

fn json_cell(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Missing,
        Value::Bool(flag) => CellValue::Bool(flag),
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map(CellValue::Number)
                .unwrap_or(CellValue::Text(text))
        }
        Value::String(text) => CellValue::text(text),
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_keep_their_digits() {
        assert_eq!(
            json_cell(serde_json::from_str("12.345").unwrap()),
            CellValue::Number(Decimal::new(12345, 3))
        );
        assert_eq!(
            json_cell(serde_json::from_str("1e3").unwrap()),
            CellValue::Number(Decimal::from(1000))
        );
    }

    #[test]
    fn blank_strings_are_missing() {
        assert_eq!(json_cell(Value::String("   ".into())), CellValue::Missing);
        assert_eq!(json_cell(Value::Null), CellValue::Missing);
    }
}
