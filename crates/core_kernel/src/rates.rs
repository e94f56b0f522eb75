//! Rate types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of percentage rates
//! (cession, retention, participation shares) using rust_decimal for
//! precise calculations without floating-point errors.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a percentage rate (e.g., cession rate, retention rate)
///
/// Stored internally as a decimal fraction, so `Rate::from_percentage(dec!(80))`
/// holds `0.8`. Applying a rate to an amount never rounds; consumers format
/// for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 80.0 for 80%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to an amount
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * self.value
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(80));
        assert_eq!(rate.as_decimal(), dec!(0.8));
        assert_eq!(rate.as_percentage(), dec!(80.0));
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(80));
        let premium = dec!(40880330.4);

        assert_eq!(rate.apply(premium), dec!(32704264.32));
    }

    #[test]
    fn test_rate_application_does_not_round() {
        let rate = Rate::from_percentage(dec!(12.5));
        assert_eq!(rate.apply(dec!(1001)), dec!(125.125));
    }

    #[test]
    fn test_rate_display() {
        let rate = Rate::from_percentage(dec!(42.5));
        assert_eq!(rate.to_string(), "42.5%");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rate_percentage_roundtrip(pct in 0u32..10000u32) {
            let percentage = Decimal::new(pct as i64, 2);
            let rate = Rate::from_percentage(percentage);

            prop_assert_eq!(rate.as_percentage(), percentage);
        }

        #[test]
        fn rate_of_zero_is_zero(amount in -1_000_000_000i64..1_000_000_000i64) {
            let rate = Rate::from_percentage(Decimal::ZERO);

            prop_assert_eq!(rate.apply(Decimal::new(amount, 2)), Decimal::ZERO);
        }
    }
}
