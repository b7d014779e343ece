//! Filing selection: which taxpayer, which period, which operator.

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::ids::Gstin;
use crate::period::{FilingPeriod, FilingYear, FrequencyType};

/// E-commerce operator GSTIN pre-filled on new forms.
pub const DEFAULT_COUNTERPARTY_GSTIN: &str = "09CJLPS5920D1ZY";

/// A validated filing selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingSelector {
    pub period: FilingPeriod,
    pub year: FilingYear,
    pub taxpayer: Gstin,
    pub counterparty: Gstin,
}

impl FilingSelector {
    pub fn frequency(&self) -> FrequencyType {
        self.period.frequency()
    }
}

/// A filing form as entered, possibly incomplete.
///
/// Nothing is checked until [`FilingForm::validate`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingForm {
    pub frequency: Option<FrequencyType>,
    pub period: Option<String>,
    pub year: Option<i32>,
    pub taxpayer: Option<String>,
    pub counterparty: Option<String>,
}

impl Default for FilingForm {
    fn default() -> Self {
        Self {
            frequency: None,
            period: None,
            year: None,
            taxpayer: None,
            counterparty: Some(DEFAULT_COUNTERPARTY_GSTIN.to_string()),
        }
    }
}

impl FilingForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_frequency(mut self, frequency: FrequencyType) -> Self {
        self.frequency = Some(frequency);
        self
    }

    #[must_use]
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn with_taxpayer(mut self, gstin: impl Into<String>) -> Self {
        self.taxpayer = Some(gstin.into());
        self
    }

    #[must_use]
    pub fn with_counterparty(mut self, gstin: impl Into<String>) -> Self {
        self.counterparty = Some(gstin.into());
        self
    }

    /// Check every field and build a selector.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<FilingSelector, FormError> {
        let frequency = self
            .frequency
            .ok_or(FormError::MissingField("frequency"))?;
        let period = required(self.period.as_deref(), "period")?;
        let period = FilingPeriod::parse(frequency, period)
            .map_err(|source| FormError::InvalidField {
                field: "period",
                source,
            })?;
        let year = self.year.ok_or(FormError::MissingField("year"))?;
        let year = FilingYear::new(year).map_err(|source| FormError::InvalidField {
            field: "year",
            source,
        })?;
        let taxpayer = required(self.taxpayer.as_deref(), "gstin")?;
        let taxpayer = Gstin::new(taxpayer).map_err(|source| FormError::InvalidField {
            field: "gstin",
            source,
        })?;
        let counterparty = required(self.counterparty.as_deref(), "counterparty gstin")?;
        let counterparty =
            Gstin::new(counterparty).map_err(|source| FormError::InvalidField {
                field: "counterparty gstin",
                source,
            })?;
        Ok(FilingSelector {
            period,
            year,
            taxpayer,
            counterparty,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, FormError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FormError::MissingField(field)),
    }
}
