//! Quarterly Claims Analysis Domain
//!
//! This crate implements the deterministic core of the bordereaux system: a
//! pure function of (claims, treaty terms, statement, quarter) producing one
//! consolidated [`AnalysisReport`].
//!
//! # Pipeline
//!
//! ```text
//! claims -> quarter filter -> paid total -> ceding limit
//!                          -> fraud heuristics (five independent passes)
//!                          -> statistics
//!                          -> report assembly
//! ```
//!
//! The engine owns no shared state: it only reads immutable inputs and
//! returns a fresh report, so concurrent invocation and content-hash
//! memoization by callers are both safe.

pub mod filter;
pub mod limit;
pub mod fraud;
pub mod stats;
pub mod report;
pub mod analyzer;
pub mod error;

pub use filter::claims_in_quarter;
pub use limit::LimitAssessment;
pub use fraud::{DuplicateGroup, FraudChecks, FrequentClaimant, SameDayCluster};
pub use stats::ClaimStatistics;
pub use report::AnalysisReport;
pub use analyzer::ClaimsAnalyzer;
pub use error::AnalysisError;
