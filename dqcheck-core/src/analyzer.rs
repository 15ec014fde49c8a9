//! Data quality analyzer facade.
//!
//! Runs the full pipeline for one uploaded file: validate, load, sample,
//! profile, score, render, prompt, summarize. Every invocation is
//! independent; the analyzer holds only its configuration and summarizer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::{DqCheckError, Result};
use crate::loader::{load_csv, validate_file_name};
use crate::prompt::build_prompt;
use crate::quality::{ProfileReport, QualityScore, profile_table};
use crate::report::render_report;
use crate::sampling::sample_table;
use crate::summarizer::{Summarizer, summarize_or_warn};

/// Response returned to the caller for one analyzed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// File name as supplied by the caller
    pub file_name: String,
    /// Row count before sampling
    pub rows_original: u64,
    /// Column count
    pub columns: u64,
    /// Heuristic score in `[0, 100]`
    pub data_quality_score: QualityScore,
    /// Summarizer output, or a warning string when it failed
    pub data_quality_summary: String,
}

/// Everything produced by one [`DataQualityAnalyzer::analyze`] call.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: ProfileReport,
    pub rendered_report: String,
    pub prompt: String,
    pub response: AnalysisResponse,
}

/// Data quality analyzer.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use dqcheck_core::{AnalysisConfig, DataQualityAnalyzer, DisabledSummarizer};
///
/// let analyzer = DataQualityAnalyzer::new(AnalysisConfig::default(), Arc::new(DisabledSummarizer))?;
/// let outcome = analyzer.analyze("sales.csv", &bytes).await?;
/// println!("Quality score: {}", outcome.response.data_quality_score);
/// ```
#[derive(Clone)]
pub struct DataQualityAnalyzer {
    config: AnalysisConfig,
    summarizer: Arc<dyn Summarizer>,
}

impl std::fmt::Debug for DataQualityAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataQualityAnalyzer")
            .field("config", &self.config)
            .field("summarizer", &self.summarizer.name())
            .finish()
    }
}

impl DataQualityAnalyzer {
    /// Creates an analyzer after validating its configuration.
    ///
    /// # Errors
    /// Returns a configuration error when the sampling cap is zero.
    pub fn new(config: AnalysisConfig, summarizer: Arc<dyn Summarizer>) -> Result<Self> {
        config
            .validate()
            .map_err(|e| DqCheckError::configuration(e.to_string()))?;
        Ok(Self { config, summarizer })
    }

    /// Returns a reference to the analyzer configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Loads, samples and profiles a file without calling the summarizer.
    ///
    /// # Errors
    /// Returns an input format error for a rejected file name or content
    /// without columns, and a parse error for malformed CSV.
    pub fn profile(&self, file_name: &str, content: &[u8]) -> Result<ProfileReport> {
        if self.config.require_csv_extension {
            validate_file_name(file_name)?;
        }

        let table = load_csv(content)?;
        tracing::info!(
            "Loaded '{}': {} rows, {} columns",
            file_name,
            table.row_count(),
            table.column_count()
        );

        let sampled = sample_table(table, &self.config.sampling);
        Ok(profile_table(file_name, &sampled))
    }

    /// Runs the full pipeline for one file.
    ///
    /// A summarizer failure does not fail the call; the response carries a
    /// warning string in place of the summary.
    pub async fn analyze(&self, file_name: &str, content: &[u8]) -> Result<AnalysisOutcome> {
        let report = self.profile(file_name, content)?;
        let score = report.quality_score();
        tracing::info!("Quality score for '{}': {}", file_name, score);

        let rendered_report = render_report(&report);
        let prompt = build_prompt(&rendered_report);

        tracing::debug!(
            "Requesting summary from '{}' ({} prompt bytes)",
            self.summarizer.name(),
            prompt.len()
        );
        let summary = summarize_or_warn(self.summarizer.as_ref(), &prompt).await;

        let response = AnalysisResponse {
            file_name: report.file_name.clone(),
            rows_original: report.original_row_count,
            columns: report.column_count,
            data_quality_score: score,
            data_quality_summary: summary,
        };

        Ok(AnalysisOutcome {
            report,
            rendered_report,
            prompt,
            response,
        })
    }
}
