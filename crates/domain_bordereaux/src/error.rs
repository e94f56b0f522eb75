//! Bordereaux domain errors

use thiserror::Error;

/// Errors raised when extracted records violate the upstream contract
#[derive(Debug, Error)]
pub enum BordereauxError {
    #[error("claim record {index} failed validation: {source}")]
    InvalidClaimRecord {
        index: usize,
        source: validator::ValidationErrors,
    },

    #[error("premium record {index} failed validation: {source}")]
    InvalidPremiumRecord {
        index: usize,
        source: validator::ValidationErrors,
    },
}
