//! The consolidated analysis report

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fraud::FraudChecks;

/// The sole output of a quarterly analysis run
///
/// Created fresh per invocation with no identity or lifecycle beyond the
/// call. Every collection inside is deterministically ordered, so identical
/// inputs serialize to byte-identical JSON and callers may memoize reports
/// keyed on a content hash of their inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The analysed quarter (1-4)
    pub quarter: u8,
    /// Sum of paid amounts over the quarter-filtered set
    pub total_claims_paid: Decimal,
    /// Contractual ceding limit for the period
    pub claim_limit: Decimal,
    /// True when total paid claims strictly exceed the limit
    pub exceeds_limit: bool,
    /// The five named fraud result sets
    pub fraud_checks: FraudChecks,
    /// Claims per day over the fixed 92-day quarter
    pub claim_frequency: Decimal,
    /// Mean paid amount, zero for an empty quarter
    pub average_claim_amount: Decimal,
}
