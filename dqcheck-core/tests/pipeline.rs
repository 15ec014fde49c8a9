//! End-to-end pipeline tests with in-process summarizers.
//!
//! These tests drive `DataQualityAnalyzer` from raw CSV bytes to the final
//! response, using fake summarizers to observe prompts and inject failures.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::uninlined_format_args)]

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dqcheck_core::config::{AnalysisConfig, SamplingConfig};
use dqcheck_core::prompt::RECOMMENDATIONS_HEADER;
use dqcheck_core::summarizer::FAILURE_MARKER;
use dqcheck_core::{DataQualityAnalyzer, DqCheckError, Summarizer, SummarizerError};

/// Records every prompt and answers with a canned summary.
#[derive(Default)]
struct RecordingSummarizer {
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl Summarizer for RecordingSummarizer {
    fn name(&self) -> &str {
        "recording"
    }

    async fn summarize(&self, prompt: &str) -> Result<String, SummarizerError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("## Data Quality Summary".to_string())
    }
}

struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    fn name(&self) -> &str {
        "failing"
    }

    async fn summarize(&self, _prompt: &str) -> Result<String, SummarizerError> {
        Err(SummarizerError::service("rate limit exceeded"))
    }
}

fn analyzer(summarizer: Arc<dyn Summarizer>) -> DataQualityAnalyzer {
    DataQualityAnalyzer::new(AnalysisConfig::default(), summarizer)
        .expect("default config is valid")
}

fn example_csv() -> String {
    let mut csv = String::from("A,B,C\n");
    for i in 0..10 {
        let a = if i < 2 { String::new() } else { i.to_string() };
        writeln!(csv, "{},{},c{}", a, i * 10, i).unwrap();
    }
    csv
}

fn large_csv(rows: usize) -> String {
    let mut csv = String::from("id,value,label\n");
    for i in 0..rows {
        writeln!(csv, "{},{},row{}", i, i % 97, i).unwrap();
    }
    csv
}

#[tokio::test]
async fn test_pipeline_example_table() {
    let recorder = Arc::new(RecordingSummarizer::default());
    let outcome = analyzer(recorder.clone())
        .analyze("example.csv", example_csv().as_bytes())
        .await
        .unwrap();

    let response = &outcome.response;
    assert_eq!(response.file_name, "example.csv");
    assert_eq!(response.rows_original, 10);
    assert_eq!(response.columns, 3);
    assert_eq!(response.data_quality_score.value(), 96.67);
    assert_eq!(response.data_quality_summary, "## Data Quality Summary");

    let prompts = recorder.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0], outcome.prompt);
    assert!(prompts[0].contains(RECOMMENDATIONS_HEADER));
    assert!(prompts[0].ends_with(&outcome.rendered_report));
    assert!(outcome.rendered_report.contains("A  20.00"));
    assert!(outcome.rendered_report.contains("C  non-numeric"));
}

#[tokio::test]
async fn test_pipeline_summarizer_failure_keeps_statistics() {
    let content = example_csv();

    let ok = analyzer(Arc::new(RecordingSummarizer::default()))
        .analyze("example.csv", content.as_bytes())
        .await
        .unwrap();
    let failed = analyzer(Arc::new(FailingSummarizer))
        .analyze("example.csv", content.as_bytes())
        .await
        .unwrap();

    assert!(failed.response.data_quality_summary.starts_with(FAILURE_MARKER));
    assert!(
        failed
            .response
            .data_quality_summary
            .contains("rate limit exceeded")
    );

    assert_eq!(failed.response.file_name, ok.response.file_name);
    assert_eq!(failed.response.rows_original, ok.response.rows_original);
    assert_eq!(failed.response.columns, ok.response.columns);
    assert_eq!(
        failed.response.data_quality_score,
        ok.response.data_quality_score
    );
}

#[tokio::test]
async fn test_pipeline_samples_large_file() {
    let outcome = analyzer(Arc::new(RecordingSummarizer::default()))
        .analyze("large.csv", large_csv(6000).as_bytes())
        .await
        .unwrap();

    assert_eq!(outcome.response.rows_original, 6000);
    assert_eq!(outcome.report.analyzed_row_count, 5000);
    assert!(outcome.rendered_report.contains("Total Rows: 6000\n"));

    let id_summary = outcome.report.numeric_summary()[0].1;
    assert_eq!(id_summary.count, 5000);
}

#[tokio::test]
async fn test_pipeline_sampling_is_reproducible() {
    let content = large_csv(7000);
    let config = AnalysisConfig::new().with_sampling(SamplingConfig::new().with_seed(9));

    let first = DataQualityAnalyzer::new(config.clone(), Arc::new(FailingSummarizer))
        .unwrap()
        .analyze("large.csv", content.as_bytes())
        .await
        .unwrap();
    let second = DataQualityAnalyzer::new(config, Arc::new(FailingSummarizer))
        .unwrap()
        .analyze("large.csv", content.as_bytes())
        .await
        .unwrap();

    assert_eq!(first.rendered_report, second.rendered_report);
    assert_eq!(first.prompt, second.prompt);
}

#[tokio::test]
async fn test_pipeline_rejects_non_csv_name() {
    let recorder = Arc::new(RecordingSummarizer::default());
    let err = analyzer(recorder.clone())
        .analyze("data.txt", b"a,b\n1,2\n")
        .await
        .unwrap_err();

    assert!(matches!(err, DqCheckError::InputFormat { .. }));
    assert!(err.is_client_error());
    assert!(recorder.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_pipeline_rejects_malformed_csv() {
    let recorder = Arc::new(RecordingSummarizer::default());
    let err = analyzer(recorder.clone())
        .analyze("broken.csv", b"a,b\n1,2\n3,4,5\n")
        .await
        .unwrap_err();

    assert!(matches!(err, DqCheckError::Parse { .. }));
    assert!(err.is_client_error());
    assert!(recorder.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_pipeline_rejects_empty_upload() {
    let err = analyzer(Arc::new(FailingSummarizer))
        .analyze("empty.csv", b"")
        .await
        .unwrap_err();
    assert!(matches!(err, DqCheckError::InputFormat { .. }));
}

#[tokio::test]
async fn test_pipeline_header_only_file() {
    let outcome = analyzer(Arc::new(RecordingSummarizer::default()))
        .analyze("header.csv", b"a,b\n")
        .await
        .unwrap();

    assert_eq!(outcome.response.rows_original, 0);
    assert_eq!(outcome.response.columns, 2);
    assert_eq!(outcome.response.data_quality_score.value(), 100.0);
    assert!(outcome.rendered_report.contains("mean=N/A  std=N/A"));
}
