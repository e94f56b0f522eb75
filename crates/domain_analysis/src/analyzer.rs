//! The claims analyzer service
//!
//! Orchestrates the full quarterly pass: quarter filter, paid total, ceding
//! limit, fraud heuristics, statistics, and report assembly.

use rust_decimal::Decimal;

use core_kernel::Quarter;
use domain_bordereaux::{ClaimRecord, PeriodStatement, Treaty};

use crate::error::AnalysisError;
use crate::filter::claims_in_quarter;
use crate::fraud::run_fraud_checks;
use crate::limit::evaluate_ceding_limit;
use crate::report::AnalysisReport;
use crate::stats::compute_statistics;

/// Service running the quarterly claims analysis
///
/// Stateless by construction: every invocation reads its immutable inputs
/// and returns a fresh report, making the service safe to share across
/// threads and its results safe to memoize.
pub struct ClaimsAnalyzer;

impl ClaimsAnalyzer {
    /// Creates a new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Runs the full analysis for one quarter
    ///
    /// # Arguments
    ///
    /// * `claims` - validated claims bordereaux rows for the whole period
    /// * `treaty` - the governing treaty terms
    /// * `statement` - the period statement supplying the total premium
    /// * `quarter` - quarter selector, 1-4
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::InvalidQuarter`] for a selector outside 1-4
    /// * [`AnalysisError::MissingTreatyDetail`] when the treaty carries no
    ///   detail blocks
    pub fn analyze(
        &self,
        claims: &[ClaimRecord],
        treaty: &Treaty,
        statement: &PeriodStatement,
        quarter: u8,
    ) -> Result<AnalysisReport, AnalysisError> {
        let quarter = Quarter::from_number(quarter)?;

        let filtered = claims_in_quarter(claims, quarter);
        let total_claims_paid: Decimal =
            filtered.iter().map(|claim| claim.total_claims_paid).sum();

        let assessment =
            evaluate_ceding_limit(treaty, statement.total_premium, total_claims_paid)?;
        let fraud_checks = run_fraud_checks(&filtered, statement.total_premium);
        let statistics = compute_statistics(filtered.len(), total_claims_paid);

        tracing::info!(
            %quarter,
            claims_total = claims.len(),
            claims_in_quarter = filtered.len(),
            %total_claims_paid,
            claim_limit = %assessment.claim_limit,
            exceeds_limit = assessment.exceeds_limit,
            "quarterly claims analysis complete"
        );

        Ok(AnalysisReport {
            quarter: quarter.number(),
            total_claims_paid,
            claim_limit: assessment.claim_limit,
            exceeds_limit: assessment.exceeds_limit,
            fraud_checks,
            claim_frequency: statistics.claim_frequency,
            average_claim_amount: statistics.average_claim_amount,
        })
    }
}

impl Default for ClaimsAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
