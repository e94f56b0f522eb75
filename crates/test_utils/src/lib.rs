//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the bordereaux analysis suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators
//! - `assertions`: Custom assertion helpers for domain types

pub mod fixtures;
pub mod builders;
pub mod generators;
pub mod assertions;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
pub use assertions::*;
