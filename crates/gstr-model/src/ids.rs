#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::ModelError;

static GSTIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN pattern")
});

/// A GST identification number.
///
/// Fifteen characters: state code (2 digits), PAN (5 letters, 4 digits,
/// 1 letter), entity number, the literal `Z`, and a check character.
///
/// Input is trimmed and upper-cased before matching, so `09cjlps5920d1zy`
/// is accepted and stored as `09CJLPS5920D1ZY`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin(String);

impl Gstin {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let normalized = value.trim().to_ascii_uppercase();
        if !GSTIN_PATTERN.is_match(&normalized) {
            return Err(ModelError::InvalidGstin(value));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit state code prefix.
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Gstin {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Gstin {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Gstin> for String {
    fn from(value: Gstin) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_gstin() {
        let gstin = Gstin::new("27ABCDE1234F1Z5").unwrap();
        assert_eq!(gstin.as_str(), "27ABCDE1234F1Z5");
        assert_eq!(gstin.state_code(), "27");
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let gstin = Gstin::new("  09cjlps5920d1zy ").unwrap();
        assert_eq!(gstin.as_str(), "09CJLPS5920D1ZY");
    }

    #[test]
    fn rejects_malformed_gstin() {
        for bad in [
            "",
            "27ABCDE1234F1Z",
            "27ABCDE1234F1Z55",
            "27ABCDE1234F0Z5",
            "27ABCDE1234F1X5",
            "2XABCDE1234F1Z5",
            "27ABCD11234F1Z5",
        ] {
            assert!(Gstin::new(bad).is_err(), "{bad} should be rejected");
        }
    }
}
