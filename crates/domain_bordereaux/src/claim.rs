//! Claims bordereaux rows

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{parse_claim_date, MemberId, PolicyHolderId};

use crate::validation::{non_empty_member, non_empty_policy_holder, non_negative_amount};

/// One row of a claims bordereaux
///
/// Produced by the upstream document extractor and immutable from then on:
/// the analysis core only reads and classifies records. Date fields keep the
/// raw extracted strings because workbooks mix formats and sometimes carry
/// `"N/A"`; [`ClaimRecord::parsed_treatment_date`] is the soft-parsing seam
/// the quarter filter uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClaimRecord {
    /// Policy holder the claim was filed under
    #[validate(custom(function = non_empty_policy_holder))]
    pub policy_holder_id: PolicyHolderId,
    /// Covered member the claim was paid for
    #[validate(custom(function = non_empty_member))]
    pub member_id: MemberId,
    /// Start of cover, as extracted
    #[validate(length(min = 1))]
    pub start_date_of_cover: String,
    /// End of cover, as extracted
    #[validate(length(min = 1))]
    pub end_date_of_cover: String,
    /// Claim/treatment date, as extracted (may be `"N/A"` or unparseable)
    #[validate(length(min = 1))]
    pub treatment_date: String,
    /// Payment/approval date, as extracted
    #[validate(length(min = 1))]
    pub payment_approval_date: String,
    /// Outpatient sub-limit per family
    #[validate(custom(function = non_negative_amount))]
    pub outpatient_per_family: Decimal,
    /// Inpatient sub-limit per family
    #[validate(custom(function = non_negative_amount))]
    pub inpatient_per_family: Decimal,
    /// Dental sub-limit per individual
    #[validate(custom(function = non_negative_amount))]
    pub dental_per_individual: Decimal,
    /// Optic sub-limit per individual
    #[validate(custom(function = non_negative_amount))]
    pub optic_per_individual: Decimal,
    /// Spectacle-frame sub-limit per individual
    #[validate(custom(function = non_negative_amount))]
    pub spectacle_frame_per_individual: Decimal,
    /// Death and total permanent disability cover per individual
    #[validate(custom(function = non_negative_amount))]
    pub disability_cover_per_individual: Decimal,
    /// Total amount paid for this claim
    #[validate(custom(function = non_negative_amount))]
    pub total_claims_paid: Decimal,
}

impl ClaimRecord {
    /// Parses the treatment date, yielding `None` for `"N/A"` or malformed input
    ///
    /// Rows without a parseable treatment date are silently excluded from
    /// quarterly analysis; this is the documented tolerance policy, not an
    /// error path.
    pub fn parsed_treatment_date(&self) -> Option<NaiveDate> {
        parse_claim_date(&self.treatment_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_record() -> ClaimRecord {
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
    fn test_parsed_treatment_date() {
        let record = sample_record();
        assert_eq!(
            record.parsed_treatment_date(),
            NaiveDate::from_ymd_opt(2023, 2, 10)
        );
    }

    #[test]
    fn test_not_available_treatment_date_is_none() {
        let mut record = sample_record();
        record.treatment_date = "N/A".to_string();
        assert_eq!(record.parsed_treatment_date(), None);
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: ClaimRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
