//! Filing-period codes.
//!
//! A code is the two-digit month followed by the four-digit year. Quarterly
//! returns use the last month of the fiscal quarter, so Q4 (January to March)
//! maps to `03` of the same stated year.

use gstr_model::{FilingPeriod, FilingYear, Quarter};

/// Month code of the last month of a fiscal quarter.
pub fn quarter_last_month_code(quarter: Quarter) -> &'static str {
    match quarter {
        Quarter::Q1 => "06",
        Quarter::Q2 => "09",
        Quarter::Q3 => "12",
        Quarter::Q4 => "03",
    }
}

/// Build the six-character filing-period code, e.g. `092024`.
pub fn format_period(period: FilingPeriod, year: FilingYear) -> String {
    match period {
        FilingPeriod::Monthly(month) => format!("{:02}{year}", month.number()),
        FilingPeriod::Quarterly(quarter) => {
            format!("{}{year}", quarter_last_month_code(quarter))
        }
    }
}
