//! Forward-sheet row normalization into outbound supply records.

use gstr_model::{Amount, CellValue, OutboundSupply, RawRow, SupplyLine, SupplyType};
use rust_decimal::Decimal;

use crate::columns::forward;
use crate::numeric::{row_amount, row_decimal};

/// Tax rate used when a row has no usable `rt` value (3%).
///
/// A numeric `0` is a real rate and is kept; only absent or non-numeric
/// cells fall back to this, unlike a falsy-zero `|| 3` default.
pub const DEFAULT_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Supply kind used when a row has no `typ` value (other than e-commerce).
pub const DEFAULT_SUPPLY_KIND: &str = "OE";

/// Place of supply used when a row has no `pos` value.
pub const DEFAULT_PLACE_OF_SUPPLY: &str = "09";

/// Normalize one forward-sheet row.
///
/// Never fails: absent or malformed values fall back to their defaults and
/// amounts that cannot be read count as zero.
pub fn normalize_row(row: &RawRow, default_supply: SupplyType) -> OutboundSupply {
    let line = SupplyLine {
        rate: row_decimal(row, forward::RATE).unwrap_or(DEFAULT_RATE),
        supply_kind: row
            .text(forward::SUPPLY_KIND)
            .unwrap_or_else(|| DEFAULT_SUPPLY_KIND.to_string()),
        place_of_supply: place_of_supply(row),
        taxable_value: amount(row, forward::TAXABLE_VALUE),
    };
    let cess = amount(row, forward::CESS);
    match supply_type(row, default_supply) {
        SupplyType::Inter => OutboundSupply::Inter {
            line,
            integrated_tax: amount(row, forward::INTEGRATED_TAX),
            cess,
        },
        SupplyType::Intra => OutboundSupply::Intra {
            line,
            central_tax: amount(row, forward::CENTRAL_TAX),
            state_tax: amount(row, forward::STATE_TAX),
            cess,
        },
    }
}

/// Normalize every row, preserving order.
pub fn normalize_rows<'a, I>(rows: I, default_supply: SupplyType) -> Vec<OutboundSupply>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    rows.into_iter()
        .map(|row| normalize_row(row, default_supply))
        .collect()
}

/// Only the exact text `INTRA` selects an intra-state supply; any other
/// value, including `intra`, is inter-state.
fn supply_type(row: &RawRow, default_supply: SupplyType) -> SupplyType {
    match row.get(forward::SUPPLY_TYPE) {
        None => default_supply,
        Some(CellValue::Text(value)) if value == "INTRA" => SupplyType::Intra,
        Some(other) => {
            if other.as_text().as_deref() != Some("INTER") {
                tracing::debug!(value = %other, "supply type other than INTRA read as INTER");
            }
            SupplyType::Inter
        }
    }
}

/// State code, left-padded with zeros to two characters.
fn place_of_supply(row: &RawRow) -> String {
    match row.text(forward::PLACE_OF_SUPPLY) {
        Some(code) => format!("{code:0>2}"),
        None => DEFAULT_PLACE_OF_SUPPLY.to_string(),
    }
}

fn amount(row: &RawRow, column: &str) -> Amount {
    Amount::round(row_amount(row, column))
}
