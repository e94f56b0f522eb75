//! Premium bordereaux rows

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{PolicyHolderId, PolicyId};

use crate::validation::{non_empty_policy_holder, non_negative_amount};

/// One row of a premium bordereaux
///
/// Carried through the extraction contract alongside the claims rows so a
/// statement package is complete; the quarterly claims analysis does not
/// consume premium rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PremiumRecord {
    #[validate(custom(function = non_empty_policy_holder))]
    pub policy_holder_id: PolicyHolderId,
    pub principal_beneficiary: String,
    pub dependants: u32,
    pub total_beneficiaries: u32,
    pub police_id: PolicyId,
    pub start_date_of_cover: String,
    pub end_date_of_cover: String,
    #[validate(custom(function = non_negative_amount))]
    pub full_annual_premium_payable: Decimal,
    pub number_of_installments_allowed: u32,
    #[validate(custom(function = non_negative_amount))]
    pub amount_per_installment: Decimal,
    #[validate(custom(function = non_negative_amount))]
    pub total_premium_paid_to_date: Decimal,
    pub outstanding_premium_balance: Decimal,
    #[validate(custom(function = non_negative_amount))]
    pub premium_amount: Decimal,
    pub limit_outpatient_per_family: Decimal,
    pub limit_inpatient_per_family: Decimal,
    pub limit_dental_per_individual: Decimal,
    pub limit_optic_per_individual: Decimal,
    pub limit_spectacle_frame_per_individual: Decimal,
    pub disability_cover_per_individual: Decimal,
    #[validate(custom(function = non_negative_amount))]
    pub premium_paid_billed: Decimal,
}
