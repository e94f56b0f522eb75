//! Derived statistics over the quarter-filtered claim set

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fixed quarter length used for frequency, a deliberate approximation
/// rather than the calendar-exact day count.
pub const QUARTER_DAYS: Decimal = dec!(92);

/// Summary statistics for the filtered claim set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimStatistics {
    /// Claims per day over the 92-day quarter approximation
    pub claim_frequency: Decimal,
    /// Mean paid amount; zero for an empty set by policy, not an error
    pub average_claim_amount: Decimal,
}

/// Computes frequency and average from the filtered count and paid total
pub fn compute_statistics(claim_count: usize, total_claims_paid: Decimal) -> ClaimStatistics {
    let count = Decimal::from(claim_count as u64);
    let average_claim_amount = if claim_count == 0 {
        Decimal::ZERO
    } else {
        total_claims_paid / count
    };

    ClaimStatistics {
        claim_frequency: count / QUARTER_DAYS,
        average_claim_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_uses_fixed_quarter_length() {
        let stats = compute_statistics(46, dec!(92000));
        assert_eq!(stats.claim_frequency, dec!(0.5));
        assert_eq!(stats.average_claim_amount, dec!(2000));
    }

    #[test]
    fn test_empty_set_yields_zeros() {
        let stats = compute_statistics(0, Decimal::ZERO);
        assert_eq!(stats.claim_frequency, Decimal::ZERO);
        assert_eq!(stats.average_claim_amount, Decimal::ZERO);
    }
}
