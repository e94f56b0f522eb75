//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{MemberId, PolicyHolderId};
use domain_bordereaux::{
    ClaimRecord, PeriodStatement, ReinsurerParticipation, Treaty, TreatyDetail,
};

use crate::fixtures::{AmountFixtures, DateFixtures, NameFixtures};

/// Builder for claims bordereaux rows
pub struct ClaimRecordBuilder {
    policy_holder_id: PolicyHolderId,
    member_id: MemberId,
    treatment_date: String,
    payment_approval_date: String,
    total_claims_paid: Decimal,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// Creates a builder with a routine in-quarter claim
    pub fn new() -> Self {
        Self {
            policy_holder_id: PolicyHolderId::from("PH-0001"),
            member_id: MemberId::from("MBR-0001"),
            treatment_date: DateFixtures::q1_date().to_string(),
            payment_approval_date: "2023-02-20".to_string(),
            total_claims_paid: AmountFixtures::routine_claim(),
        }
    }

    /// Sets the policy holder identifier
    pub fn with_policy_holder_id(mut self, id: impl Into<String>) -> Self {
        self.policy_holder_id = PolicyHolderId::from(id.into());
        self
    }

    /// Sets the member identifier
    pub fn with_member_id(mut self, id: impl Into<String>) -> Self {
        self.member_id = MemberId::from(id.into());
        self
    }

    /// Sets the raw treatment date string
    pub fn with_treatment_date(mut self, raw: impl Into<String>) -> Self {
        self.treatment_date = raw.into();
        self
    }

    /// Sets the payment/approval date string
    pub fn with_payment_approval_date(mut self, raw: impl Into<String>) -> Self {
        self.payment_approval_date = raw.into();
        self
    }

    /// Sets the paid amount
    pub fn with_total_paid(mut self, amount: Decimal) -> Self {
        self.total_claims_paid = amount;
        self
    }

    /// Builds the claim record
    pub fn build(self) -> ClaimRecord {
        ClaimRecord {
            policy_holder_id: self.policy_holder_id,
            member_id: self.member_id,
            start_date_of_cover: "2023-01-01".to_string(),
            end_date_of_cover: "2023-12-31".to_string(),
            treatment_date: self.treatment_date,
            payment_approval_date: self.payment_approval_date,
            outpatient_per_family: dec!(1000000),
            inpatient_per_family: dec!(2000000),
            dental_per_individual: dec!(150000),
            optic_per_individual: dec!(150000),
            spectacle_frame_per_individual: dec!(80000),
            disability_cover_per_individual: dec!(5000000),
            total_claims_paid: self.total_claims_paid,
        }
    }
}

/// Builder for treaty terms
pub struct TreatyBuilder {
    details: Vec<TreatyDetail>,
    currency: Option<String>,
}

impl Default for TreatyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreatyBuilder {
    /// Creates a builder with one 80% cession / 20% retention detail block
    pub fn new() -> Self {
        Self {
            details: vec![TreatyDetail {
                limits: vec![],
                retention_percentage: dec!(20),
                maximum_cession: dec!(80),
            }],
            currency: Some("Bif".to_string()),
        }
    }

    /// Sets the governing cession percentage on the first detail block
    pub fn with_maximum_cession(mut self, percentage: Decimal) -> Self {
        if let Some(detail) = self.details.first_mut() {
            detail.maximum_cession = percentage;
        }
        self
    }

    /// Sets the retention percentage on the first detail block
    pub fn with_retention(mut self, percentage: Decimal) -> Self {
        if let Some(detail) = self.details.first_mut() {
            detail.retention_percentage = percentage;
        }
        self
    }

    /// Appends a second detail block (which the analysis must ignore)
    pub fn with_extra_detail(mut self, maximum_cession: Decimal) -> Self {
        self.details.push(TreatyDetail {
            limits: vec![],
            retention_percentage: dec!(0),
            maximum_cession,
        });
        self
    }

    /// Removes every detail block, violating the analysis precondition
    pub fn without_details(mut self) -> Self {
        self.details.clear();
        self
    }

    /// Builds the treaty
    pub fn build(self) -> Treaty {
        Treaty {
            reinsured: NameFixtures::reinsured().to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            treaty_type: "quota share".to_string(),
            business_covered: vec!["medical".to_string()],
            territorial_scope: "Burundi".to_string(),
            treaty_details: self.details,
            exclusions: None,
            commission: None,
            currency: self.currency,
            reinsurer_participations: vec![ReinsurerParticipation {
                reinsurer_name: NameFixtures::lead_reinsurer().to_string(),
                participation_percentage: dec!(60),
            }],
        }
    }
}

/// Builder for period statements
pub struct PeriodStatementBuilder {
    total_premium: Decimal,
}

impl Default for PeriodStatementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodStatementBuilder {
    /// Creates a builder with the fixture premium
    pub fn new() -> Self {
        Self {
            total_premium: AmountFixtures::premium(),
        }
    }

    /// Sets the total premium for the period
    pub fn with_total_premium(mut self, amount: Decimal) -> Self {
        self.total_premium = amount;
        self
    }

    /// Builds the statement
    pub fn build(self) -> PeriodStatement {
        PeriodStatement {
            reinsured: NameFixtures::reinsured().to_string(),
            treaty: NameFixtures::treaty_name().to_string(),
            period: "1st Quarter 2023".to_string(),
            total_premium: self.total_premium,
            total_claims: dec!(0),
            share_balance: dec!(0),
            share_percentage: dec!(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_builder_defaults_are_valid() {
        let claim = ClaimRecordBuilder::new().build();
        assert!(claim.parsed_treatment_date().is_some());
        assert!(claim.total_claims_paid > dec!(0));
    }

    #[test]
    fn test_treaty_builder_overrides_cession() {
        let treaty = TreatyBuilder::new().with_maximum_cession(dec!(55)).build();
        assert_eq!(treaty.first_detail().unwrap().maximum_cession, dec!(55));
    }

    #[test]
    fn test_treaty_builder_without_details() {
        let treaty = TreatyBuilder::new().without_details().build();
        assert!(treaty.treaty_details.is_empty());
    }
}
