//! Tests for forward-row normalization.

use std::str::FromStr;

use gstr_model::{Amount, CellValue, OutboundSupply, RawRow, SupplyType};
use gstr_transform::{DEFAULT_RATE, normalize_row, normalize_rows};
use rust_decimal::Decimal;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn amount(value: &str) -> Amount {
    Amount::round(dec(value))
}

#[test]
fn empty_row_gets_every_default() {
    let record = normalize_row(&RawRow::new(), SupplyType::Inter);
    let line = record.line();
    assert_eq!(record.supply_type(), SupplyType::Inter);
    assert_eq!(line.rate, DEFAULT_RATE);
    assert_eq!(line.supply_kind, "OE");
    assert_eq!(line.place_of_supply, "09");
    assert_eq!(line.taxable_value.to_string(), "0.00");
    assert_eq!(record.integrated_tax().map(|a| a.to_string()), Some("0.00".into()));
    assert_eq!(record.cess().to_string(), "0.00");
}

#[test]
fn inter_row_carries_integrated_tax_only() {
    let row = RawRow::new()
        .with("sply_ty", "INTER")
        .with("rt", 5i64)
        .with("pos", "27")
        .with("txval", 1000i64)
        .with("iamt", 50i64)
        .with("camt", 25i64)
        .with("samt", 25i64);
    let record = normalize_row(&row, SupplyType::Inter);
    assert_eq!(
        record,
        OutboundSupply::Inter {
            line: gstr_model::SupplyLine {
                rate: dec("5"),
                supply_kind: "OE".to_string(),
                place_of_supply: "27".to_string(),
                taxable_value: amount("1000"),
            },
            integrated_tax: amount("50"),
            cess: Amount::ZERO,
        }
    );
    assert!(record.central_tax().is_none());
    assert!(record.state_tax().is_none());
}

#[test]
fn intra_row_carries_central_and_state_tax_only() {
    let row = RawRow::new()
        .with("sply_ty", "INTRA")
        .with("rt", "18")
        .with("txval", "200")
        .with("iamt", "36")
        .with("camt", "18")
        .with("samt", "18")
        .with("csamt", "1.005");
    let record = normalize_row(&row, SupplyType::Inter);
    assert_eq!(record.supply_type(), SupplyType::Intra);
    assert!(record.integrated_tax().is_none());
    assert_eq!(record.central_tax(), Some(amount("18")));
    assert_eq!(record.state_tax(), Some(amount("18")));
    assert_eq!(record.cess().to_string(), "1.01");
}

// Malformed numbers are not errors: they silently read as zero, and the rate
// falls back to its default.
#[test]
fn malformed_numbers_degrade_silently() {
    let row = RawRow::new()
        .with("rt", "n/a")
        .with("txval", "abc")
        .with("iamt", CellValue::Bool(true))
        .with("csamt", "12.5 INR");
    let record = normalize_row(&row, SupplyType::Inter);
    assert_eq!(record.line().rate, DEFAULT_RATE);
    assert_eq!(record.line().taxable_value, Amount::ZERO);
    assert_eq!(record.integrated_tax(), Some(Amount::ZERO));
    assert_eq!(record.cess().to_string(), "12.50");
}

#[test]
fn zero_rate_is_kept() {
    let row = RawRow::new().with("rt", "0");
    assert_eq!(normalize_row(&row, SupplyType::Inter).line().rate, Decimal::ZERO);
}

#[test]
fn amounts_round_half_up_at_the_cent() {
    let row = RawRow::new().with("txval", "12.345").with("iamt", "12.344");
    let record = normalize_row(&row, SupplyType::Inter);
    assert_eq!(record.line().taxable_value.to_string(), "12.35");
    assert_eq!(record.integrated_tax().unwrap().to_string(), "12.34");
}

#[test]
fn default_supply_type_applies_only_when_absent() {
    let record = normalize_row(&RawRow::new(), SupplyType::Intra);
    assert_eq!(record.supply_type(), SupplyType::Intra);
    let row = RawRow::new().with("sply_ty", "INTER");
    assert_eq!(normalize_row(&row, SupplyType::Intra).supply_type(), SupplyType::Inter);
}

#[test]
fn keeps_row_order() {
    let rows = vec![
        RawRow::new().with("txval", "1"),
        RawRow::new().with("txval", "2"),
        RawRow::new().with("txval", "3"),
    ];
    let values: Vec<String> = normalize_rows(&rows, SupplyType::Inter)
        .iter()
        .map(|r| r.line().taxable_value.to_string())
        .collect();
    assert_eq!(values, vec!["1.00", "2.00", "3.00"]);
}
