//! Treaty terms extracted from the treaty document

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-category limit inside a treaty detail block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLimit {
    /// Category number in the treaty (1-5), when the document states one
    pub category_number: Option<u32>,
    /// Name or description of the category (e.g., "Limit outpatient per family")
    pub category_name: String,
    /// Limit amount in the treaty currency
    pub limit: Option<Decimal>,
}

/// One detail block of the treaty: category limits plus retention and cession
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatyDetail {
    /// Limits for each category covered by this block
    pub limits: Vec<CategoryLimit>,
    /// Retention percentage applying to all categories of the block
    pub retention_percentage: Decimal,
    /// Maximum cession percentage applying to all categories of the block
    pub maximum_cession: Decimal,
}

/// An exclusion clause in the treaty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclusion {
    pub exclusion_clause: Option<String>,
    pub description: String,
}

/// Sliding-scale commission terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    pub commission_min: Option<Decimal>,
    pub commission_max: Option<Decimal>,
    pub loss_ratio_min: Option<Decimal>,
    pub loss_ratio_max: Option<Decimal>,
}

/// A reinsurer's share of the treaty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinsurerParticipation {
    /// Name of the reinsurer
    pub reinsurer_name: String,
    /// Percentage of participation (e.g., 60, 30, 10)
    pub participation_percentage: Decimal,
}

/// The governing reinsurance treaty
///
/// Only a subset of these terms drives the quarterly analysis (the ceding
/// limit is taken from the first detail block's `maximum_cession`), but the
/// full extracted contract is kept so downstream reporting can render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treaty {
    /// Entity being reinsured
    pub reinsured: String,
    /// Start of the treaty agreement
    pub start_date: NaiveDate,
    /// End of the treaty agreement
    pub end_date: NaiveDate,
    /// Type of treaty (quota share, excess of loss, ...)
    pub treaty_type: String,
    /// Types of business covered
    pub business_covered: Vec<String>,
    /// Geographical area covered
    pub territorial_scope: String,
    /// Detail blocks with limits, retention, and cession
    pub treaty_details: Vec<TreatyDetail>,
    /// Exclusion clauses, when extracted
    #[serde(default)]
    pub exclusions: Option<Vec<Exclusion>>,
    /// Commission terms, when extracted
    #[serde(default)]
    pub commission: Option<Commission>,
    /// Treaty currency (e.g., "Bif")
    #[serde(default)]
    pub currency: Option<String>,
    /// Reinsurers and their participation percentages
    pub reinsurer_participations: Vec<ReinsurerParticipation>,
}

impl Treaty {
    /// Returns the first detail block, which carries the governing cession
    pub fn first_detail(&self) -> Option<&TreatyDetail> {
        self.treaty_details.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_first_detail() {
        let treaty = Treaty {
            reinsured: "SOCAR Assurances".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            treaty_type: "quota share".to_string(),
            business_covered: vec!["medical".to_string()],
            territorial_scope: "Burundi".to_string(),
            treaty_details: vec![TreatyDetail {
                limits: vec![],
                retention_percentage: dec!(20),
                maximum_cession: dec!(80),
            }],
            exclusions: None,
            commission: None,
            currency: Some("Bif".to_string()),
            reinsurer_participations: vec![ReinsurerParticipation {
                reinsurer_name: "AFRICAN REINSURANCE CORPORATION".to_string(),
                participation_percentage: dec!(60),
            }],
        };

        assert_eq!(treaty.first_detail().unwrap().maximum_cession, dec!(80));
    }

    #[test]
    fn test_first_detail_empty() {
        let treaty = Treaty {
            reinsured: String::new(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            treaty_type: String::new(),
            business_covered: vec![],
            territorial_scope: String::new(),
            treaty_details: vec![],
            exclusions: None,
            commission: None,
            currency: None,
            reinsurer_participations: vec![],
        };

        assert!(treaty.first_detail().is_none());
    }
}
