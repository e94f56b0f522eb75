//! JSON-backed document extractor
//!
//! Reads three pre-extracted JSON payloads (treaty, bordereaux workbook,
//! treaty-slip statement), validates the record batches against the
//! bordereaux contract, and normalises the statement premium before handing
//! the set to the analysis core.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use domain_bordereaux::{
    validate_claims, validate_premiums, ClaimRecord, DocumentExtractor, DocumentKind,
    ExtractedDocuments, ExtractionError, PeriodStatement, PremiumRecord, Treaty,
};

/// The bordereaux workbook payload: claims and premium rows side by side
#[derive(Debug, Deserialize)]
struct BordereauxDocument {
    claims: Vec<ClaimRecord>,
    premiums: Vec<PremiumRecord>,
}

/// Extractor backed by pre-extracted JSON files
///
/// Error translation follows the port contract: a file that does not exist
/// maps to [`ExtractionError::MissingDocument`], any other read failure to
/// [`ExtractionError::Io`], and malformed JSON to [`ExtractionError::Parse`].
#[derive(Debug, Clone)]
pub struct JsonDocumentExtractor {
    treaty_path: PathBuf,
    bordereaux_path: PathBuf,
    statement_path: PathBuf,
}

impl JsonDocumentExtractor {
    /// Creates an extractor reading from the three given files
    pub fn new(
        treaty_path: impl Into<PathBuf>,
        bordereaux_path: impl Into<PathBuf>,
        statement_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            treaty_path: treaty_path.into(),
            bordereaux_path: bordereaux_path.into(),
            statement_path: statement_path.into(),
        }
    }

    async fn read_document<T>(&self, document: DocumentKind, path: &Path) -> Result<T, ExtractionError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let raw = tokio::fs::read(path).await.map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ExtractionError::MissingDocument(document)
            } else {
                ExtractionError::Io { document, source }
            }
        })?;

        serde_json::from_slice(&raw).map_err(|source| ExtractionError::Parse {
            document,
            message: source.to_string(),
        })
    }
}

#[async_trait]
impl DocumentExtractor for JsonDocumentExtractor {
    #[instrument(skip(self), fields(treaty = %self.treaty_path.display()))]
    async fn extract(&self) -> Result<ExtractedDocuments, ExtractionError> {
        let treaty: Treaty = self
            .read_document(DocumentKind::Treaty, &self.treaty_path)
            .await?;
        let bordereaux: BordereauxDocument = self
            .read_document(DocumentKind::Bordereaux, &self.bordereaux_path)
            .await?;
        let statement: PeriodStatement = self
            .read_document(DocumentKind::Statement, &self.statement_path)
            .await?;

        validate_claims(&bordereaux.claims)?;
        validate_premiums(&bordereaux.premiums)?;

        debug!(
            claims = bordereaux.claims.len(),
            premiums = bordereaux.premiums.len(),
            "documents extracted and validated"
        );

        Ok(ExtractedDocuments {
            treaty,
            claims: bordereaux.claims,
            premiums: bordereaux.premiums,
            statement: statement.with_premium_fallback(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use domain_bordereaux::FALLBACK_TOTAL_PREMIUM;

    fn fixture_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    fn fixture_extractor(statement: &str) -> JsonDocumentExtractor {
        JsonDocumentExtractor::new(
            fixture_path("treaty.json"),
            fixture_path("bordereaux.json"),
            fixture_path(statement),
        )
    }

    #[tokio::test]
    async fn test_extracts_complete_document_set() {
        let documents = fixture_extractor("statement.json").extract().await.unwrap();

        assert_eq!(documents.claims.len(), 3);
        assert_eq!(documents.premiums.len(), 1);
        assert_eq!(
            documents.treaty.first_detail().unwrap().maximum_cession,
            dec!(80)
        );
        assert_eq!(documents.statement.total_premium, dec!(40880330.4));
    }

    #[tokio::test]
    async fn test_zero_premium_statement_gets_fallback() {
        let documents = fixture_extractor("statement_zero_premium.json")
            .extract()
            .await
            .unwrap();

        assert_eq!(documents.statement.total_premium, FALLBACK_TOTAL_PREMIUM);
    }

    #[tokio::test]
    async fn test_missing_file_maps_to_missing_document() {
        let extractor = JsonDocumentExtractor::new(
            fixture_path("treaty.json"),
            fixture_path("does_not_exist.json"),
            fixture_path("statement.json"),
        );

        let err = extractor.extract().await.unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::MissingDocument(DocumentKind::Bordereaux)
        ));
    }

    #[tokio::test]
    async fn test_malformed_json_maps_to_parse_error() {
        let extractor = JsonDocumentExtractor::new(
            fixture_path("malformed.json"),
            fixture_path("bordereaux.json"),
            fixture_path("statement.json"),
        );

        let err = extractor.extract().await.unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Parse {
                document: DocumentKind::Treaty,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_invalid_records_fail_the_contract() {
        let extractor = JsonDocumentExtractor::new(
            fixture_path("treaty.json"),
            fixture_path("bordereaux_negative_amount.json"),
            fixture_path("statement.json"),
        );

        let err = extractor.extract().await.unwrap_err();
        assert!(matches!(err, ExtractionError::Contract(_)));
    }
}
