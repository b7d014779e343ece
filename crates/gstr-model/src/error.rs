//! Error types for the GST return model.

use thiserror::Error;

/// Errors raised while constructing validated model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid GSTIN: {0}")]
    InvalidGstin(String),
    #[error("invalid month {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("invalid period: {0}")]
    InvalidPeriod(String),
    #[error("invalid quarter code: {0}")]
    InvalidQuarter(String),
    #[error("invalid filing year {0} (expected a four-digit year)")]
    InvalidYear(i32),
    #[error("invalid frequency type: {0}")]
    InvalidFrequency(String),
}

/// Problems found while validating a filing form.
///
/// The first problem found is reported; a form with any problem cannot be used
/// to generate a return.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
