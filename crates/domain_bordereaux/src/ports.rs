//! Document extraction port
//!
//! The analysis core is deterministic and must not care how claims were
//! obtained. This module defines the seam: a [`DocumentExtractor`] turns a
//! set of source documents (treaty PDF, bordereaux workbook, treaty slip)
//! into the fixed [`ExtractedDocuments`] contract. Adapters can be backed by
//! anything (pre-extracted JSON, an LLM pipeline, a test double) as long
//! as they deliver validated records.
//!
//! ```rust,ignore
//! let extractor = JsonDocumentExtractor::new(treaty_path, bordereaux_path, statement_path);
//! let documents = extractor.extract().await?;
//! let report = ClaimsAnalyzer::new().analyze(
//!     &documents.claims,
//!     &documents.treaty,
//!     &documents.statement,
//!     quarter,
//! )?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use std::fmt;

use crate::claim::ClaimRecord;
use crate::error::BordereauxError;
use crate::premium::PremiumRecord;
use crate::statement::PeriodStatement;
use crate::treaty::Treaty;

/// The source documents an extractor works from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// The treaty contract document
    Treaty,
    /// The bordereaux workbook (claims and premium rows)
    Bordereaux,
    /// The treaty-slip statement for the period
    Statement,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Treaty => write!(f, "treaty"),
            DocumentKind::Bordereaux => write!(f, "bordereaux"),
            DocumentKind::Statement => write!(f, "statement"),
        }
    }
}

/// Errors raised by extraction adapters
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read {document} document: {source}")]
    Io {
        document: DocumentKind,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {document} document: {message}")]
    Parse {
        document: DocumentKind,
        message: String,
    },

    #[error("{0} document is missing")]
    MissingDocument(DocumentKind),

    #[error("extracted records violate the bordereaux contract: {0}")]
    Contract(#[from] BordereauxError),
}

/// The fixed output contract of document extraction
///
/// Everything the downstream analysis needs, already validated. Extractors
/// must apply the statement premium fallback before returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocuments {
    /// The governing treaty terms
    pub treaty: Treaty,
    /// Claims bordereaux rows
    pub claims: Vec<ClaimRecord>,
    /// Premium bordereaux rows
    pub premiums: Vec<PremiumRecord>,
    /// The period statement
    pub statement: PeriodStatement,
}

/// Port for turning source documents into the extraction contract
///
/// Implementations own all parsing technology choices. The port is async
/// because real extraction is I/O-bound; the analysis downstream of it is
/// synchronous and pure.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extracts and validates the document set
    async fn extract(&self) -> Result<ExtractedDocuments, ExtractionError>;
}
