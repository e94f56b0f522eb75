//! Bordereaux Domain
//!
//! This crate defines the fixed output contract of document extraction: the
//! validated claim and premium bordereaux rows, the governing treaty terms,
//! and the quarterly statement. The analysis core consumes these types and
//! nothing upstream of them.
//!
//! # Extraction boundary
//!
//! ```text
//! treaty PDF / bordereaux workbook / treaty slip
//!        -> DocumentExtractor (port, adapter-specific)
//!        -> ExtractedDocuments (this crate, validated)
//!        -> claims analysis
//! ```

pub mod claim;
pub mod premium;
pub mod treaty;
pub mod statement;
pub mod validation;
pub mod ports;
pub mod error;

pub use claim::ClaimRecord;
pub use premium::PremiumRecord;
pub use treaty::{
    CategoryLimit, Commission, Exclusion, ReinsurerParticipation, Treaty, TreatyDetail,
};
pub use statement::{PeriodStatement, FALLBACK_TOTAL_PREMIUM};
pub use validation::{validate_claims, validate_premiums};
pub use ports::{DocumentExtractor, DocumentKind, ExtractedDocuments, ExtractionError};
pub use error::BordereauxError;
