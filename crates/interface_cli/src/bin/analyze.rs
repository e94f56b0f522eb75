//! Bordereaux Analysis - CLI Binary
//!
//! Runs the quarterly claims analysis over a set of pre-extracted documents
//! and prints the report as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin bordereaux-analyze
//!
//! # Run with environment variables
//! ANALYSIS_QUARTER=2 ANALYSIS_BORDEREAUX_PATH=data/q2.json cargo run --bin bordereaux-analyze
//! ```
//!
//! # Environment Variables
//!
//! * `ANALYSIS_TREATY_PATH` - Extracted treaty JSON (default: data/treaty.json)
//! * `ANALYSIS_BORDEREAUX_PATH` - Extracted bordereaux JSON (default: data/bordereaux.json)
//! * `ANALYSIS_STATEMENT_PATH` - Extracted statement JSON (default: data/statement.json)
//! * `ANALYSIS_QUARTER` - Quarter to analyze, 1-4 (default: 1)
//! * `ANALYSIS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;

use domain_analysis::ClaimsAnalyzer;
use domain_bordereaux::DocumentExtractor;
use infra_extraction::JsonDocumentExtractor;
use interface_cli::AnalysisConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        quarter = config.quarter,
        bordereaux = %config.bordereaux_path,
        "starting quarterly bordereaux analysis"
    );

    let extractor = JsonDocumentExtractor::new(
        &config.treaty_path,
        &config.bordereaux_path,
        &config.statement_path,
    );
    let documents = extractor
        .extract()
        .await
        .context("document extraction failed")?;

    let report = ClaimsAnalyzer::new()
        .analyze(
            &documents.claims,
            &documents.treaty,
            &documents.statement,
            config.quarter,
        )
        .context("analysis failed")?;

    let rendered =
        serde_json::to_string_pretty(&report).context("report serialization failed")?;
    println!("{rendered}");

    Ok(())
}

/// Loads configuration from environment variables, falling back to defaults
fn load_config() -> AnalysisConfig {
    AnalysisConfig::from_env().unwrap_or_else(|_| {
        let defaults = AnalysisConfig::default();
        AnalysisConfig {
            treaty_path: std::env::var("ANALYSIS_TREATY_PATH")
                .unwrap_or(defaults.treaty_path),
            bordereaux_path: std::env::var("ANALYSIS_BORDEREAUX_PATH")
                .unwrap_or(defaults.bordereaux_path),
            statement_path: std::env::var("ANALYSIS_STATEMENT_PATH")
                .unwrap_or(defaults.statement_path),
            quarter: std::env::var("ANALYSIS_QUARTER")
                .ok()
                .and_then(|q| q.parse().ok())
                .unwrap_or(defaults.quarter),
            log_level: std::env::var("ANALYSIS_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
