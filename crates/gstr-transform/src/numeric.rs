//! Lenient numeric parsing for spreadsheet cells.
//!
//! Cells are read the way a spreadsheet user expects a "number-ish" value to
//! be read: the leading number is taken and anything after it is ignored, so
//! `"12.5 INR"` is `12.5`. A cell with no leading number reads as absent.

use std::str::FromStr;

use gstr_model::{CellValue, RawRow};
use rust_decimal::Decimal;

/// Parse the number at the start of `value`.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fractional part, and an optional exponent. Returns `None` when no digits
/// are found or the value does not fit a decimal.
///
/// # Examples
///
/// ```
/// use gstr_transform::numeric::leading_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(leading_number(" 12abc"), Some(Decimal::from(12)));
/// assert_eq!(leading_number("-.5"), Some(Decimal::new(-5, 1)));
/// assert_eq!(leading_number("abc"), None);
/// ```
pub fn leading_number(value: &str) -> Option<Decimal> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut pos = 0usize;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &trimmed[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &trimmed[frac_start..frac_end];
        pos = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut mantissa = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        mantissa.push('-');
    }
    mantissa.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        mantissa.push('.');
        mantissa.push_str(frac_digits);
    }

    if let Some(exponent) = exponent_at(trimmed, pos) {
        return Decimal::from_scientific(&format!("{mantissa}e{exponent}")).ok();
    }
    Decimal::from_str(&mantissa).ok()
}

/// Exponent text (`+3`, `-2`, `4`) following the mantissa, if well-formed.
fn exponent_at(text: &str, pos: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    if !matches!(bytes.get(pos), Some(b'e' | b'E')) {
        return None;
    }
    let start = pos + 1;
    let mut end = start;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    (end > digits_start).then(|| &text[start..end])
}

/// Numeric reading of a single cell.
pub fn cell_decimal(cell: &CellValue) -> Option<Decimal> {
    match cell {
        CellValue::Number(number) => Some(*number),
        CellValue::Text(text) => leading_number(text),
        CellValue::Bool(_) | CellValue::Missing => None,
    }
}

/// Numeric reading of a named column, `None` when absent or non-numeric.
pub fn row_decimal(row: &RawRow, column: &str) -> Option<Decimal> {
    let cell = row.get(column)?;
    let parsed = cell_decimal(cell);
    if parsed.is_none() {
        tracing::warn!(column, value = %cell, "non-numeric value ignored");
    }
    parsed
}

/// Numeric reading of a named column with 0 for absent or non-numeric cells.
pub fn row_amount(row: &RawRow, column: &str) -> Decimal {
    row_decimal(row, column).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(leading_number("1000"), Some(dec("1000")));
        assert_eq!(leading_number("12.345"), Some(dec("12.345")));
        assert_eq!(leading_number("+7"), Some(dec("7")));
        assert_eq!(leading_number("5."), Some(dec("5")));
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(leading_number("12abc"), Some(dec("12")));
        assert_eq!(leading_number("1,000"), Some(dec("1")));
        assert_eq!(leading_number("3.5%"), Some(dec("3.5")));
    }

    #[test]
    fn parses_exponents() {
        assert_eq!(leading_number("1e3"), Some(dec("1000")));
        assert_eq!(leading_number("2.5E-1"), Some(dec("0.25")));
        // A dangling exponent marker is trailing text.
        assert_eq!(leading_number("4e"), Some(dec("4")));
    }

    #[test]
    fn rejects_values_without_digits() {
        for value in ["", "   ", "-", ".", "abc", "NaN", "Infinity", "e5"] {
            assert_eq!(leading_number(value), None, "{value:?}");
        }
    }

    #[test]
    fn cells_read_by_kind() {
        assert_eq!(cell_decimal(&CellValue::Number(dec("2.5"))), Some(dec("2.5")));
        assert_eq!(cell_decimal(&CellValue::Text("9".into())), Some(dec("9")));
        assert_eq!(cell_decimal(&CellValue::Bool(true)), None);
        assert_eq!(cell_decimal(&CellValue::Missing), None);
    }
}
