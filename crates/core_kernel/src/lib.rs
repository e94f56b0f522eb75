//! Core Kernel - Foundational types for the bordereaux analysis system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Rate types with precise decimal arithmetic for cession and retention percentages
//! - Quarter and claim-date handling for statement periods
//! - Common identifiers and value objects

pub mod rates;
pub mod period;
pub mod identifiers;

pub use rates::Rate;
pub use period::{Quarter, InvalidQuarter, parse_claim_date};
pub use identifiers::{MemberId, PolicyHolderId, PolicyId};
