//! Upstream contract validation
//!
//! Extraction adapters must hand the analysis core only well-formed records.
//! This module enforces that boundary: identifiers present, amounts
//! non-negative, date fields populated. Note that an *unparseable* date
//! string is deliberately not a validation failure: tolerating malformed
//! treatment dates is the quarter filter's documented policy.

use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use core_kernel::{MemberId, PolicyHolderId};

use crate::claim::ClaimRecord;
use crate::error::BordereauxError;
use crate::premium::PremiumRecord;

pub(crate) fn non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}

pub(crate) fn non_empty_member(id: &MemberId) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::new("empty_member_id"));
    }
    Ok(())
}

pub(crate) fn non_empty_policy_holder(id: &PolicyHolderId) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::new("empty_policy_holder_id"));
    }
    Ok(())
}

/// Validates a batch of claim records, failing on the first invalid row
pub fn validate_claims(claims: &[ClaimRecord]) -> Result<(), BordereauxError> {
    for (index, claim) in claims.iter().enumerate() {
        claim
            .validate()
            .map_err(|source| BordereauxError::InvalidClaimRecord { index, source })?;
    }
    tracing::debug!(count = claims.len(), "claim records validated");
    Ok(())
}

/// Validates a batch of premium records, failing on the first invalid row
pub fn validate_premiums(premiums: &[PremiumRecord]) -> Result<(), BordereauxError> {
    for (index, premium) in premiums.iter().enumerate() {
        premium
            .validate()
            .map_err(|source| BordereauxError::InvalidPremiumRecord { index, source })?;
    }
    tracing::debug!(count = premiums.len(), "premium records validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_claim() -> ClaimRecord {
        ClaimRecord {
            policy_holder_id: PolicyHolderId::from("PH-001"),
            member_id: MemberId::from("MBR-001"),
            start_date_of_cover: "2023-01-01".to_string(),
            end_date_of_cover: "2023-12-31".to_string(),
            treatment_date: "2023-02-10".to_string(),
            payment_approval_date: "2023-02-20".to_string(),
            outpatient_per_family: dec!(1000000),
            inpatient_per_family: dec!(2000000),
            dental_per_individual: dec!(150000),
            optic_per_individual: dec!(150000),
            spectacle_frame_per_individual: dec!(80000),
            disability_cover_per_individual: dec!(5000000),
            total_claims_paid: dec!(125000),
        }
    }

    #[test]
    fn test_valid_batch_passes() {
        assert!(validate_claims(&[valid_claim(), valid_claim()]).is_ok());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let mut claim = valid_claim();
        claim.total_claims_paid = dec!(-5);

        let err = validate_claims(&[valid_claim(), claim]).unwrap_err();
        assert!(matches!(
            err,
            BordereauxError::InvalidClaimRecord { index: 1, .. }
        ));
    }

    #[test]
    fn test_empty_member_id_is_rejected() {
        let mut claim = valid_claim();
        claim.member_id = MemberId::from("");

        assert!(validate_claims(&[claim]).is_err());
    }

    #[test]
    fn test_unparseable_date_is_not_a_validation_failure() {
        let mut claim = valid_claim();
        claim.treatment_date = "N/A".to_string();

        assert!(validate_claims(&[claim]).is_ok());
    }
}
