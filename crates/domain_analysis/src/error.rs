//! Analysis domain errors

use thiserror::Error;

use core_kernel::period::InvalidQuarter;

/// Errors that can occur during quarterly claims analysis
///
/// All failures are pure values; the engine never leaves partial state
/// behind because it has none.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Quarter selector outside 1-4; never clamped
    #[error(transparent)]
    InvalidQuarter(#[from] InvalidQuarter),

    /// The treaty carries no detail blocks, so no cession percentage governs
    /// the ceding limit. Guessing a default would silently misprice the
    /// period, so this is a hard precondition failure.
    #[error("treaty has no detail blocks: cannot determine the governing cession percentage")]
    MissingTreatyDetail,
}
