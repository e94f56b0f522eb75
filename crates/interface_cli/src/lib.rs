//! Command-Line Interface
//!
//! This crate wires the extraction adapter and the analysis core into a
//! runnable surface: load the document set, run the quarterly analysis,
//! print the report as JSON.

pub mod config;

pub use config::AnalysisConfig;
