//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the bordereaux analysis suite. Fixtures are
//! deterministic so tests stay predictable.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for monetary test amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// A typical period premium
    pub fn premium() -> Decimal {
        dec!(40000000)
    }

    /// A routine outpatient claim amount
    pub fn routine_claim() -> Decimal {
        dec!(125000)
    }

    /// A round amount above the suspicious floor
    pub fn suspicious_claim() -> Decimal {
        dec!(15000)
    }

    /// An amount above 10% of [`AmountFixtures::premium`]
    pub fn large_claim() -> Decimal {
        dec!(4500000)
    }
}

/// Fixture for claim-date test strings
pub struct DateFixtures;

impl DateFixtures {
    /// A first-quarter treatment date string
    pub fn q1_date() -> &'static str {
        "2023-02-10"
    }

    /// A second-quarter treatment date string
    pub fn q2_date() -> &'static str {
        "2023-05-18"
    }

    /// The same Q1 date with a time component
    pub fn q1_datetime() -> &'static str {
        "2023-02-10 14:30:00"
    }

    /// The bordereaux marker for an absent date
    pub fn not_available() -> &'static str {
        "N/A"
    }

    /// The parsed form of [`DateFixtures::q1_date`]
    pub fn q1_parsed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 2, 10).unwrap()
    }
}

/// Fixture for party and treaty name strings
pub struct NameFixtures;

impl NameFixtures {
    /// Standard reinsured entity
    pub fn reinsured() -> &'static str {
        "SOCAR Assurances"
    }

    /// Standard treaty name on the statement
    pub fn treaty_name() -> &'static str {
        "Medical Quota Share Treaty"
    }

    /// Standard lead reinsurer
    pub fn lead_reinsurer() -> &'static str {
        "AFRICAN REINSURANCE CORPORATION"
    }
}
