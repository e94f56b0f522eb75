//! Ceding-limit evaluation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Rate;
use domain_bordereaux::Treaty;

use crate::error::AnalysisError;

/// Outcome of comparing quarter-filtered claims against the ceding limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitAssessment {
    /// The contractual ceding limit for the period
    pub claim_limit: Decimal,
    /// True when paid claims exceed the limit (strict comparison)
    pub exceeds_limit: bool,
}

/// Evaluates the ceding limit from the treaty's governing cession percentage
///
/// The limit is `maximum_cession / 100 * total_premium`, taken from the
/// *first* treaty detail block. This is a deliberate simplification, not a
/// general treaty evaluator. No rounding is applied; consumers format for
/// display.
///
/// # Errors
///
/// Returns [`AnalysisError::MissingTreatyDetail`] when the treaty has no
/// detail blocks.
pub fn evaluate_ceding_limit(
    treaty: &Treaty,
    total_premium: Decimal,
    total_claims_paid: Decimal,
) -> Result<LimitAssessment, AnalysisError> {
    let detail = treaty
        .first_detail()
        .ok_or(AnalysisError::MissingTreatyDetail)?;

    let cession = Rate::from_percentage(detail.maximum_cession);
    let claim_limit = cession.apply(total_premium);

    Ok(LimitAssessment {
        claim_limit,
        exceeds_limit: total_claims_paid > claim_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_utils::TreatyBuilder;

    #[test]
    fn test_limit_from_first_detail() {
        let treaty = TreatyBuilder::new().with_maximum_cession(dec!(80)).build();

        let assessment = evaluate_ceding_limit(&treaty, dec!(1000000), dec!(700000)).unwrap();
        assert_eq!(assessment.claim_limit, dec!(800000));
        assert!(!assessment.exceeds_limit);
    }

    #[test]
    fn test_exceeding_claims_flagged() {
        let treaty = TreatyBuilder::new().with_maximum_cession(dec!(50)).build();

        let assessment = evaluate_ceding_limit(&treaty, dec!(1000000), dec!(500001)).unwrap();
        assert!(assessment.exceeds_limit);
    }

    #[test]
    fn test_claims_equal_to_limit_do_not_exceed() {
        let treaty = TreatyBuilder::new().with_maximum_cession(dec!(50)).build();

        let assessment = evaluate_ceding_limit(&treaty, dec!(1000000), dec!(500000)).unwrap();
        assert!(!assessment.exceeds_limit);
    }

    #[test]
    fn test_missing_detail_is_fatal() {
        let treaty = TreatyBuilder::new().without_details().build();

        let result = evaluate_ceding_limit(&treaty, dec!(1000000), dec!(0));
        assert!(matches!(result, Err(AnalysisError::MissingTreatyDetail)));
    }

    #[test]
    fn test_second_detail_is_ignored() {
        let treaty = TreatyBuilder::new()
            .with_maximum_cession(dec!(80))
            .with_extra_detail(dec!(10))
            .build();

        let assessment = evaluate_ceding_limit(&treaty, dec!(1000), dec!(0)).unwrap();
        assert_eq!(assessment.claim_limit, dec!(800));
    }
}
