//! Property-Based Test Generators
//!
//! Proptest strategies for generating bordereaux test data that maintains
//! domain invariants, plus fake-backed helpers for realistic identifier
//! pools.

use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::MemberId;
use domain_bordereaux::ClaimRecord;

use crate::builders::ClaimRecordBuilder;

/// Strategy for quarter selectors (valid range)
pub fn quarter_strategy() -> impl Strategy<Value = u8> {
    1u8..=4u8
}

/// Strategy for quarter selectors outside the valid range
pub fn invalid_quarter_strategy() -> impl Strategy<Value = u8> {
    prop_oneof![Just(0u8), 5u8..=u8::MAX]
}

/// Strategy for paid claim amounts with two decimal places
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for treatment date strings in `YYYY-MM-DD` form
pub fn treatment_date_strategy() -> impl Strategy<Value = String> {
    (2020i32..2026i32, 1u32..=12u32, 1u32..=28u32)
        .prop_map(|(year, month, day)| format!("{year:04}-{month:02}-{day:02}"))
}

/// Strategy for treatment date strings including malformed entries
pub fn lossy_treatment_date_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => treatment_date_strategy(),
        1 => Just("N/A".to_string()),
        1 => Just("10/02/2023".to_string()),
    ]
}

/// Strategy for a single claim record with a parseable in-range date
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (0u32..500u32, treatment_date_strategy(), claim_amount_strategy()).prop_map(
        |(member, date, amount)| {
            ClaimRecordBuilder::new()
                .with_member_id(format!("MBR-{member:04}"))
                .with_treatment_date(date)
                .with_total_paid(amount)
                .build()
        },
    )
}

/// Strategy for a batch of claim records, dates possibly malformed
pub fn claims_batch_strategy(max_len: usize) -> impl Strategy<Value = Vec<ClaimRecord>> {
    proptest::collection::vec(
        (0u32..50u32, lossy_treatment_date_strategy(), claim_amount_strategy()).prop_map(
            |(member, date, amount)| {
                ClaimRecordBuilder::new()
                    .with_member_id(format!("MBR-{member:04}"))
                    .with_treatment_date(date)
                    .with_total_paid(amount)
                    .build()
            },
        ),
        0..max_len,
    )
}

/// Generates a pool of realistic member identifiers
pub fn member_pool(size: usize) -> Vec<MemberId> {
    (0..size)
        .map(|_| MemberId::from(NumberWithFormat("MBR-^###").fake::<String>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_pool_has_requested_size() {
        let pool = member_pool(8);
        assert_eq!(pool.len(), 8);
        assert!(pool.iter().all(|id| id.as_str().starts_with("MBR-")));
    }
}
