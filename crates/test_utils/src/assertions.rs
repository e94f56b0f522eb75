//! Custom assertion helpers for domain types

use rust_decimal::Decimal;

use domain_analysis::AnalysisReport;

/// Asserts that a report describes an empty quarter: zero totals, zero
/// statistics, and no fraud findings.
pub fn assert_empty_quarter_report(report: &AnalysisReport) {
    assert_eq!(
        report.total_claims_paid,
        Decimal::ZERO,
        "expected zero total paid, got {}",
        report.total_claims_paid
    );
    assert_eq!(report.claim_frequency, Decimal::ZERO);
    assert_eq!(report.average_claim_amount, Decimal::ZERO);
    assert!(
        report.fraud_checks.is_empty(),
        "expected no fraud findings for an empty quarter"
    );
}

/// Asserts that two reports serialize to byte-identical JSON
pub fn assert_reports_identical(left: &AnalysisReport, right: &AnalysisReport) {
    let left_json = serde_json::to_vec(left).expect("report serializes");
    let right_json = serde_json::to_vec(right).expect("report serializes");
    assert_eq!(left_json, right_json, "reports are not byte-identical");
}
