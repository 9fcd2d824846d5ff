//! Money value object.

use core::iter::Sum;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Non-negative amount of money, stored in cents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units (e.g. `Price::from_units(15)` is `$15.00`).
    pub fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Lossy decimal view, for chart axes and averages.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Plain decimal form without the currency sign, e.g. `12.50`.
    pub fn to_decimal_string(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}", self.to_decimal_string())
    }
}

/// Parses decimal input such as `12`, `12.5`, `12.50` or `$7.25`.
///
/// At most two fractional digits are accepted; negative amounts are rejected.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw);
        if raw.is_empty() {
            return Err(DomainError::validation("price is required"));
        }
        if raw.starts_with('-') {
            return Err(DomainError::validation("price cannot be negative"));
        }

        let (whole, frac) = match raw.split_once('.') {
            Some((w, f)) => (w, f),
            None => (raw, ""),
        };
        if frac.len() > 2 {
            return Err(DomainError::validation(format!(
                "price has more than two decimals: {raw}"
            )));
        }
        let digits_only = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
            return Err(DomainError::validation(format!("price is not a number: {raw}")));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| DomainError::validation(format!("price out of range: {raw}")))?
        };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().unwrap_or(0) * 10,
            _ => frac.parse::<u64>().unwrap_or(0),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Price)
            .ok_or_else(|| DomainError::validation(format!("price out of range: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_inputs() {
        assert_eq!("12".parse::<Price>().unwrap(), Price::from_cents(1200));
        assert_eq!("12.5".parse::<Price>().unwrap(), Price::from_cents(1250));
        assert_eq!("12.05".parse::<Price>().unwrap(), Price::from_cents(1205));
        assert_eq!("$7.25".parse::<Price>().unwrap(), Price::from_cents(725));
        assert_eq!(".5".parse::<Price>().unwrap(), Price::from_cents(50));
        assert_eq!("0".parse::<Price>().unwrap(), Price::ZERO);
    }

    #[test]
    fn rejects_invalid_inputs() {
        for bad in ["", "  ", "-1", "1.234", "abc", "1,50", ".", "1.2.3"] {
            assert!(
                matches!(bad.parse::<Price>(), Err(DomainError::Validation(_))),
                "expected validation error for {bad:?}"
            );
        }
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::from_units(15).to_string(), "$15.00");
        assert_eq!(Price::from_cents(1250).to_string(), "$12.50");
        assert_eq!(Price::from_cents(7).to_string(), "$0.07");
    }

    #[test]
    fn decimal_string_has_no_sign() {
        assert_eq!(Price::from_cents(1250).to_decimal_string(), "12.50");
        assert_eq!(Price::ZERO.to_decimal_string(), "0.00");
        assert_eq!(Price::from_cents(1605).to_decimal_string().parse::<Price>().unwrap(), Price::from_cents(1605));
    }

    #[test]
    fn sums_saturate() {
        let total: Price = [Price::from_units(1), Price::from_cents(50)].iter().sum();
        assert_eq!(total, Price::from_cents(150));
        let huge = Price::from_cents(u64::MAX).saturating_add(Price::from_cents(1));
        assert_eq!(huge.cents(), u64::MAX);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the displayed amount parses back to the same price.
            #[test]
            fn display_parses_back(cents in 0u64..10_000_000_000) {
                let price = Price::from_cents(cents);
                prop_assert_eq!(price.to_string().parse::<Price>().unwrap(), price);
            }
        }
    }
}
