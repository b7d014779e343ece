//! GST return transformation logic.
//!
//! This crate turns raw spreadsheet rows into return records:
//!
//! - **normalize**: forward rows to outbound supply records with defaults
//! - **aggregate**: reverse rows to one e-commerce operator summary
//! - **period**: filing-period codes for months and fiscal quarters
//! - **numeric**: lenient number reading shared by the above

pub mod aggregate;
pub mod columns;
pub mod normalize;
pub mod numeric;
pub mod period;

pub use aggregate::{ReverseTotals, summarize_counterparty};
pub use normalize::{
    DEFAULT_PLACE_OF_SUPPLY, DEFAULT_RATE, DEFAULT_SUPPLY_KIND, normalize_row, normalize_rows,
};
pub use period::{format_period, quarter_last_month_code};
