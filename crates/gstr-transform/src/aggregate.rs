//! Reverse-sheet aggregation into the e-commerce operator summary.

use gstr_model::{Amount, COUNTERPARTY_FLAG, CounterpartySummary, Gstin, RawRow};
use rust_decimal::Decimal;

use crate::columns::reverse;
use crate::numeric::row_amount;

/// Running totals over reverse-sheet rows, before rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseTotals {
    pub supply_value: Decimal,
    pub integrated_tax: Decimal,
    pub central_tax: Decimal,
    pub state_tax: Decimal,
    pub cess: Decimal,
}

impl ReverseTotals {
    /// Add one row. Absent or non-numeric cells count as zero.
    pub fn add_row(&mut self, row: &RawRow) {
        self.supply_value = self
            .supply_value
            .saturating_add(row_amount(row, reverse::SUPPLY_VALUE));
        self.integrated_tax = self
            .integrated_tax
            .saturating_add(row_amount(row, reverse::INTEGRATED_TAX));
        self.central_tax = self
            .central_tax
            .saturating_add(row_amount(row, reverse::CENTRAL_TAX));
        self.state_tax = self
            .state_tax
            .saturating_add(row_amount(row, reverse::STATE_TAX));
        self.cess = self.cess.saturating_add(row_amount(row, reverse::CESS));
    }

    /// Round each total to cents and attach the operator.
    pub fn into_summary(self, counterparty: Gstin) -> CounterpartySummary {
        CounterpartySummary {
            counterparty,
            total_supply_value: Amount::round(self.supply_value),
            integrated_tax: Amount::round(self.integrated_tax),
            central_tax: Amount::round(self.central_tax),
            state_tax: Amount::round(self.state_tax),
            cess: Amount::round(self.cess),
            flag: COUNTERPARTY_FLAG,
        }
    }
}

/// Sum every reverse-sheet row into a single summary for `counterparty`.
///
/// Empty input gives a zero-filled summary. Totals are exact decimal sums,
/// so the result does not depend on row order.
pub fn summarize_counterparty<'a, I>(rows: I, counterparty: &Gstin) -> CounterpartySummary
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut totals = ReverseTotals::default();
    let mut count = 0usize;
    for row in rows {
        totals.add_row(row);
        count += 1;
    }
    tracing::debug!(rows = count, "aggregated reverse rows");
    if count == 0 {
        return CounterpartySummary::zero(counterparty.clone());
    }
    totals.into_summary(counterparty.clone())
}
