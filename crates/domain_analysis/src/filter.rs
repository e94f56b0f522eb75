//! Quarter filtering of claim records

use core_kernel::Quarter;
use domain_bordereaux::ClaimRecord;

/// Selects the claims whose treatment date falls in the given quarter
///
/// Rows whose treatment date is `"N/A"` or unparseable are excluded
/// silently; malformed dates are out-of-scope data, not an error. The
/// quarter match is on month only; the year is not checked.
pub fn claims_in_quarter<'a>(claims: &'a [ClaimRecord], quarter: Quarter) -> Vec<&'a ClaimRecord> {
    let mut selected = Vec::new();
    let mut unparseable = 0usize;

    for claim in claims {
        match claim.parsed_treatment_date() {
            Some(date) if quarter.contains(date) => selected.push(claim),
            Some(_) => {}
            None => unparseable += 1,
        }
    }

    if unparseable > 0 {
        tracing::debug!(
            count = unparseable,
            %quarter,
            "excluded claims with unparseable treatment dates"
        );
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::ClaimRecordBuilder;

    #[test]
    fn test_filter_keeps_only_quarter_months() {
        let claims = vec![
            ClaimRecordBuilder::new().with_treatment_date("2023-02-10").build(),
            ClaimRecordBuilder::new().with_treatment_date("2023-05-10").build(),
            ClaimRecordBuilder::new().with_treatment_date("2023-03-31").build(),
        ];

        let filtered = claims_in_quarter(&claims, Quarter::Q1);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_is_year_agnostic() {
        let claims = vec![
            ClaimRecordBuilder::new().with_treatment_date("2022-02-10").build(),
            ClaimRecordBuilder::new().with_treatment_date("2023-02-10").build(),
        ];

        let filtered = claims_in_quarter(&claims, Quarter::Q1);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_silently_drops_unparseable_dates() {
        let claims = vec![
            ClaimRecordBuilder::new().with_treatment_date("N/A").build(),
            ClaimRecordBuilder::new().with_treatment_date("not a date").build(),
            ClaimRecordBuilder::new().with_treatment_date("2023-01-15").build(),
        ];

        let filtered = claims_in_quarter(&claims, Quarter::Q1);
        assert_eq!(filtered.len(), 1);
    }
}
