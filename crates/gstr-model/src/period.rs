//! Filing frequency and period types.
//!
//! Quarters follow the Indian fiscal year: Q1 runs April to June and Q4 runs
//! January to March.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// How often the taxpayer files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyType {
    Monthly,
    Quarterly,
}

impl FrequencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyType::Monthly => "monthly",
            FrequencyType::Quarterly => "quarterly",
        }
    }

    /// Number of monthly uploads per data set kind.
    pub fn months_per_period(&self) -> usize {
        match self {
            FrequencyType::Monthly => 1,
            FrequencyType::Quarterly => 3,
        }
    }
}

impl fmt::Display for FrequencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrequencyType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(FrequencyType::Monthly),
            "quarterly" => Ok(FrequencyType::Quarterly),
            _ => Err(ModelError::InvalidFrequency(s.to_string())),
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month, 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u8);

impl Month {
    pub fn new(number: u32) -> Result<Self, ModelError> {
        match u8::try_from(number) {
            Ok(value @ 1..=12) => Ok(Self(value)),
            _ => Err(ModelError::InvalidMonth(number)),
        }
    }

    pub fn number(&self) -> u32 {
        u32::from(self.0)
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.0) - 1]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Month {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(value: Month) -> Self {
        value.number()
    }
}

/// Fiscal quarter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    /// Calendar months covered by the quarter, in calendar order.
    pub fn months(&self) -> [Month; 3] {
        let first = match self {
            Quarter::Q1 => 4,
            Quarter::Q2 => 7,
            Quarter::Q3 => 10,
            Quarter::Q4 => 1,
        };
        [Month(first), Month(first + 1), Month(first + 2)]
    }

    /// Display label used when asking for a quarter, e.g. `Q1 (Apr-Jun)`.
    pub fn label(&self) -> String {
        let [first, _, last] = self.months();
        format!("{} ({}-{})", self.as_str(), &first.name()[..3], &last.name()[..3])
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quarter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "Q1" => Ok(Quarter::Q1),
            "Q2" => Ok(Quarter::Q2),
            "Q3" => Ok(Quarter::Q3),
            "Q4" => Ok(Quarter::Q4),
            _ => Err(ModelError::InvalidQuarter(s.to_string())),
        }
    }
}

/// The period a return covers. The variant fixes the filing frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "frequency", content = "period", rename_all = "lowercase")]
pub enum FilingPeriod {
    Monthly(Month),
    Quarterly(Quarter),
}

impl FilingPeriod {
    pub fn frequency(&self) -> FrequencyType {
        match self {
            FilingPeriod::Monthly(_) => FrequencyType::Monthly,
            FilingPeriod::Quarterly(_) => FrequencyType::Quarterly,
        }
    }

    /// Calendar months covered by the period, in calendar order.
    pub fn months(&self) -> Vec<Month> {
        match self {
            FilingPeriod::Monthly(month) => vec![*month],
            FilingPeriod::Quarterly(quarter) => quarter.months().to_vec(),
        }
    }

    /// Parse a period as entered for the given frequency: a month number for
    /// monthly filers, a quarter code for quarterly filers.
    pub fn parse(frequency: FrequencyType, value: &str) -> Result<Self, ModelError> {
        match frequency {
            FrequencyType::Monthly => {
                let trimmed = value.trim();
                let number = trimmed
                    .parse::<u32>()
                    .map_err(|_| ModelError::InvalidPeriod(value.to_string()))?;
                Month::new(number).map(FilingPeriod::Monthly)
            }
            FrequencyType::Quarterly => value.parse().map(FilingPeriod::Quarterly),
        }
    }
}

/// Renders the period as the user selected it: `9` or `Q1`.
impl fmt::Display for FilingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilingPeriod::Monthly(month) => write!(f, "{month}"),
            FilingPeriod::Quarterly(quarter) => write!(f, "{quarter}"),
        }
    }
}

/// Four-digit filing year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct FilingYear(u16);

impl FilingYear {
    pub fn new(year: i32) -> Result<Self, ModelError> {
        match u16::try_from(year) {
            Ok(value @ 1000..=9999) => Ok(Self(value)),
            _ => Err(ModelError::InvalidYear(year)),
        }
    }

    pub fn value(&self) -> i32 {
        i32::from(self.0)
    }

    /// The `count` most recent years ending at `current`, newest first.
    pub fn recent(current: i32, count: usize) -> Vec<FilingYear> {
        (0..count)
            .filter_map(|offset| i32::try_from(offset).ok())
            .filter_map(|offset| FilingYear::new(current - offset).ok())
            .collect()
    }
}

impl fmt::Display for FilingYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl TryFrom<i32> for FilingYear {
    type Error = ModelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FilingYear> for i32 {
    fn from(value: FilingYear) -> Self {
        value.value()
    }
}
