//! Fraud heuristics over the quarter-filtered claim set
//!
//! Five independent, stateless passes. Each produces a named result set and
//! none deduplicates against the others: one claim may be flagged by several
//! checks at once. All thresholds are fixed policy constants.
//!
//! Grouped results are keyed through `BTreeMap`, so every result set comes
//! out sorted by its grouping key and identical inputs always produce an
//! identical report.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::MemberId;
use domain_bordereaux::ClaimRecord;

/// Same-day clusters are reported only above this many claims (strict)
const SAME_DAY_CLUSTER_THRESHOLD: usize = 3;

/// Round amounts are suspicious only above this value (strict)
const SUSPICIOUS_AMOUNT_FLOOR: Decimal = dec!(10000);

/// Step a suspicious amount must be an exact multiple of
const SUSPICIOUS_AMOUNT_STEP: Decimal = dec!(1000);

/// Members are reported as frequent claimants only above this many claims (strict)
const FREQUENT_CLAIMANT_THRESHOLD: usize = 5;

/// Share of the period premium above which a single claim is large
const LARGE_CLAIM_PREMIUM_SHARE: Decimal = dec!(0.1);

/// A treatment date carrying more than three claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SameDayCluster {
    pub treatment_date: NaiveDate,
    pub claims: Vec<ClaimRecord>,
}

/// A member with more than five claims in the quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentClaimant {
    pub member_id: MemberId,
    pub claim_count: usize,
}

/// Claims sharing (member, treatment date, amount)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub member_id: MemberId,
    pub treatment_date: NaiveDate,
    pub amount: Decimal,
    pub claims: Vec<ClaimRecord>,
}

/// The five named fraud result sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudChecks {
    pub multiple_claims_same_day: Vec<SameDayCluster>,
    pub suspicious_claim_amounts: Vec<ClaimRecord>,
    pub frequent_claimants: Vec<FrequentClaimant>,
    pub large_claims: Vec<ClaimRecord>,
    pub duplicate_entries: Vec<DuplicateGroup>,
}

impl FraudChecks {
    /// Returns true if no check flagged anything
    pub fn is_empty(&self) -> bool {
        self.multiple_claims_same_day.is_empty()
            && self.suspicious_claim_amounts.is_empty()
            && self.frequent_claimants.is_empty()
            && self.large_claims.is_empty()
            && self.duplicate_entries.is_empty()
    }
}

/// Runs all five heuristics over the quarter-filtered claims
///
/// The passes are order-independent; `total_premium` only parameterises the
/// large-claim check.
pub fn run_fraud_checks(claims: &[&ClaimRecord], total_premium: Decimal) -> FraudChecks {
    let checks = FraudChecks {
        multiple_claims_same_day: detect_same_day_clusters(claims),
        suspicious_claim_amounts: detect_suspicious_amounts(claims),
        frequent_claimants: detect_frequent_claimants(claims),
        large_claims: detect_large_claims(claims, total_premium),
        duplicate_entries: detect_duplicate_entries(claims),
    };

    tracing::debug!(
        same_day_clusters = checks.multiple_claims_same_day.len(),
        suspicious_amounts = checks.suspicious_claim_amounts.len(),
        frequent_claimants = checks.frequent_claimants.len(),
        large_claims = checks.large_claims.len(),
        duplicate_groups = checks.duplicate_entries.len(),
        "fraud heuristics complete"
    );

    checks
}

/// Groups claims by treatment date and reports dates with more than three
pub fn detect_same_day_clusters(claims: &[&ClaimRecord]) -> Vec<SameDayCluster> {
    let mut by_date: BTreeMap<NaiveDate, Vec<ClaimRecord>> = BTreeMap::new();
    for claim in claims {
        if let Some(date) = claim.parsed_treatment_date() {
            by_date.entry(date).or_default().push((*claim).clone());
        }
    }

    by_date
        .into_iter()
        .filter(|(_, group)| group.len() > SAME_DAY_CLUSTER_THRESHOLD)
        .map(|(treatment_date, claims)| SameDayCluster {
            treatment_date,
            claims,
        })
        .collect()
}

/// Flags amounts that are an exact multiple of 1000 and strictly above 10000
///
/// Exact `Decimal` equality is used for the multiple test; upstream rounding
/// noise can therefore produce false negatives. The tolerance question is
/// deliberately left open rather than papered over with an epsilon.
pub fn detect_suspicious_amounts(claims: &[&ClaimRecord]) -> Vec<ClaimRecord> {
    claims
        .iter()
        .filter(|claim| {
            claim.total_claims_paid % SUSPICIOUS_AMOUNT_STEP == Decimal::ZERO
                && claim.total_claims_paid > SUSPICIOUS_AMOUNT_FLOOR
        })
        .map(|claim| (*claim).clone())
        .collect()
}

/// Counts claims per member and reports members with more than five
pub fn detect_frequent_claimants(claims: &[&ClaimRecord]) -> Vec<FrequentClaimant> {
    let mut counts: BTreeMap<MemberId, usize> = BTreeMap::new();
    for claim in claims {
        *counts.entry(claim.member_id.clone()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > FREQUENT_CLAIMANT_THRESHOLD)
        .map(|(member_id, claim_count)| FrequentClaimant {
            member_id,
            claim_count,
        })
        .collect()
}

/// Flags claims strictly above 10% of the period premium
pub fn detect_large_claims(claims: &[&ClaimRecord], total_premium: Decimal) -> Vec<ClaimRecord> {
    let threshold = total_premium * LARGE_CLAIM_PREMIUM_SHARE;
    claims
        .iter()
        .filter(|claim| claim.total_claims_paid > threshold)
        .map(|claim| (*claim).clone())
        .collect()
}

/// Groups by (member, treatment date, amount) and reports repeated tuples
pub fn detect_duplicate_entries(claims: &[&ClaimRecord]) -> Vec<DuplicateGroup> {
    let mut by_key: BTreeMap<(MemberId, NaiveDate, Decimal), Vec<ClaimRecord>> = BTreeMap::new();
    for claim in claims {
        if let Some(date) = claim.parsed_treatment_date() {
            by_key
                .entry((claim.member_id.clone(), date, claim.total_claims_paid))
                .or_default()
                .push((*claim).clone());
        }
    }

    by_key
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|((member_id, treatment_date, amount), claims)| DuplicateGroup {
            member_id,
            treatment_date,
            amount,
            claims,
        })
        .collect()
}
