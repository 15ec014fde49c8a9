//! Core library for dqcheck, a CSV data quality checker.
//!
//! This crate loads an uploaded CSV file into a typed table, samples large
//! tables down to a fixed cap, profiles completeness, duplicates and numeric
//! statistics, scores the result, and asks a pluggable summarizer for a
//! narrative summary of the rendered report.
//!
//! # Guarantees
//! - Sampling is deterministic for a given seed
//! - Scores are always in `[0, 100]` with two decimals
//! - A summarizer failure never fails an analysis
//!
//! # Architecture
//! - [`loader`], [`sampling`] and [`quality`] form a pure pipeline
//! - [`report`] and [`prompt`] turn a profile into summarizer input
//! - [`summarizer`] is the async collaborator boundary
//! - [`analyzer`] ties the stages together for one file

pub mod analyzer;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod quality;
pub mod report;
pub mod sampling;
pub mod summarizer;

// Re-export commonly used types
pub use analyzer::{AnalysisOutcome, AnalysisResponse, DataQualityAnalyzer};
pub use config::{AnalysisConfig, ConfigValidationError, SamplingConfig};
pub use error::{DqCheckError, Result};
pub use logging::{LogFormat, init_logging};
pub use models::{CellValue, Column, ColumnType, Table};
pub use quality::{ProfileReport, QualityScore};
pub use summarizer::{
    CommandSummarizer, DisabledSummarizer, Summarizer, SummarizerError, summarize_or_warn,
};
