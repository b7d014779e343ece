//! Tests for reverse-row aggregation.

use gstr_model::{Amount, CounterpartySummary, Gstin, RawRow};
use gstr_transform::summarize_counterparty;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn operator() -> Gstin {
    Gstin::new("09CJLPS5920D1ZY").unwrap()
}

#[test]
fn empty_input_gives_zero_summary() {
    let summary = summarize_counterparty(&Vec::<RawRow>::new(), &operator());
    assert_eq!(summary, CounterpartySummary::zero(operator()));
    assert_eq!(summary.flag, "N");
    assert_eq!(summary.total_supply_value.to_string(), "0.00");
}

#[test]
fn sums_each_column_and_rounds_totals() {
    let rows = vec![
        RawRow::new()
            .with("suppval", "100.004")
            .with("igst", "18")
            .with("cess", "0.5"),
        RawRow::new()
            .with("suppval", "50.001")
            .with("cgst", "4.5")
            .with("sgst", "4.5"),
        RawRow::new().with("suppval", "garbage").with("igst", ""),
    ];
    let summary = summarize_counterparty(&rows, &operator());
    assert_eq!(summary.counterparty, operator());
    assert_eq!(summary.total_supply_value.to_string(), "150.01");
    assert_eq!(summary.integrated_tax.to_string(), "18.00");
    assert_eq!(summary.central_tax.to_string(), "4.50");
    assert_eq!(summary.state_tax.to_string(), "4.50");
    assert_eq!(summary.cess.to_string(), "0.50");
    assert_eq!(summary.flag, "N");
}

#[test]
fn rounds_after_summing() {
    // Rounding each row first would give 0.00; the exact total is 0.006.
    let rows = vec![
        RawRow::new().with("suppval", "0.002"),
        RawRow::new().with("suppval", "0.002"),
        RawRow::new().with("suppval", "0.002"),
    ];
    let summary = summarize_counterparty(&rows, &operator());
    assert_eq!(summary.total_supply_value, Amount::round(Decimal::new(6, 3)));
    assert_eq!(summary.total_supply_value.to_string(), "0.01");
}

fn reverse_row() -> impl Strategy<Value = RawRow> {
    (
        -1_000_000i64..1_000_000,
        -1_000_000i64..1_000_000,
        -1_000_000i64..1_000_000,
        proptest::option::of(0i64..100_000),
    )
        .prop_map(|(suppval, igst, cgst, cess)| {
            let mut row = RawRow::new()
                .with("suppval", Decimal::new(suppval, 3))
                .with("igst", Decimal::new(igst, 2))
                .with("cgst", Decimal::new(cgst, 3).to_string());
            if let Some(cess) = cess {
                row.insert("cess", Decimal::new(cess, 1));
            }
            row
        })
}

proptest! {
    #[test]
    fn summary_ignores_row_order(
        (rows, shuffled) in prop::collection::vec(reverse_row(), 0..20)
            .prop_flat_map(|rows| {
                let shuffled = Just(rows.clone()).prop_shuffle();
                (Just(rows), shuffled)
            })
    ) {
        let forward = summarize_counterparty(&rows, &operator());
        let permuted = summarize_counterparty(&shuffled, &operator());
        prop_assert_eq!(forward, permuted);
    }
}
