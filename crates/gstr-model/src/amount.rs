//! Monetary amounts at cent precision.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};

/// A rupee amount rounded to two decimal places.
///
/// Rounding is half away from zero at the cent: `12.345` becomes `12.35` and
/// `-12.345` becomes `-12.35`. The value always carries a scale of two, so it
/// serializes as `1000.00` rather than `1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const SCALE: u32 = 2;

    pub const ZERO: Amount = Amount(Decimal::from_parts(0, 0, 0, false, Self::SCALE));

    /// Round `value` to cents.
    pub fn round(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        Self(rounded)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::round(value)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount::round(iter.map(|amount| amount.0).sum())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimal(&self.0, serializer)
    }
}

/// Serialize a decimal as a JSON number that keeps its exact digits.
///
/// Relies on `serde_json`'s `arbitrary_precision` feature; `1000.00` is
/// written as `1000.00`, not `1000.0`.
pub fn serialize_decimal<S: Serializer>(
    value: &Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serde_json::Number::from_str(&value.to_string())
        .map_err(S::Error::custom)?
        .serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(Amount::round(dec("12.345")).to_string(), "12.35");
        assert_eq!(Amount::round(dec("12.344")).to_string(), "12.34");
        assert_eq!(Amount::round(dec("-12.345")).to_string(), "-12.35");
        assert_eq!(Amount::round(dec("0.005")).to_string(), "0.01");
    }

    #[test]
    fn pads_to_two_places() {
        assert_eq!(Amount::round(dec("1000")).to_string(), "1000.00");
        assert_eq!(Amount::round(dec("7.5")).to_string(), "7.50");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn serializes_with_both_digits() {
        let json = serde_json::to_string(&Amount::round(dec("50"))).unwrap();
        assert_eq!(json, "50.00");
    }

    #[test]
    fn sum_rounds_the_total() {
        let total: Amount = [dec("0.10"), dec("0.20"), dec("0.30")]
            .into_iter()
            .map(Amount::round)
            .sum();
        assert_eq!(total.to_string(), "0.60");
    }
}
