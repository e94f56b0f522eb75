//! Document Extraction Adapters
//!
//! This crate provides concrete implementations of the
//! [`domain_bordereaux::DocumentExtractor`] port. The analysis core never
//! parses documents itself; adapters here turn source documents into the
//! validated [`domain_bordereaux::ExtractedDocuments`] contract.
//!
//! The shipped adapter reads pre-extracted JSON payloads. Upstream document
//! understanding (OCR, workbook parsing) happens before this crate runs and
//! is out of scope here.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_extraction::JsonDocumentExtractor;
//! use domain_bordereaux::DocumentExtractor;
//!
//! let extractor = JsonDocumentExtractor::new(
//!     "data/treaty.json",
//!     "data/bordereaux.json",
//!     "data/statement.json",
//! );
//! let documents = extractor.extract().await?;
//! ```

pub mod json;

pub use json::JsonDocumentExtractor;
