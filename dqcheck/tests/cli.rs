//! Command-line tests for the dqcheck binary.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::uninlined_format_args)]

use std::fmt::Write as _;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn dqcheck() -> Command {
    let mut cmd = Command::cargo_bin("dqcheck").expect("binary builds");
    cmd.env_remove("DQCHECK_MAX_ROWS")
        .env_remove("DQCHECK_SEED")
        .env_remove("DQCHECK_SUMMARIZER_CMD");
    cmd
}

#[test]
fn test_cli_report_prints_sections_and_score() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", "id,name\n1,a\n2,\n");

    dqcheck()
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("File Name: people.csv"))
        .stdout(predicate::str::contains("Total Rows: 2"))
        .stdout(predicate::str::contains("name  50.00"))
        .stdout(predicate::str::contains("Data Quality Score: 87.50"));
}

#[test]
fn test_cli_prompt_embeds_report() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", "id,name\n1,a\n2,\n");

    dqcheck()
        .arg("prompt")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("You are a data quality expert."))
        .stdout(predicate::str::contains(
            "| S.No | Recommendation | Why it matters | How to implement |",
        ))
        .stdout(predicate::str::contains("File Name: people.csv"));
}

#[test]
fn test_cli_analyze_without_summarizer() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", "id,name\n1,a\n2,\n");

    let output = dqcheck().arg("analyze").arg(&path).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["file_name"], "people.csv");
    assert_eq!(value["rows_original"], 2);
    assert_eq!(value["columns"], 2);
    assert_eq!(value["data_quality_score"], 87.5);
    assert!(
        value["data_quality_summary"]
            .as_str()
            .unwrap()
            .starts_with("⚠️ LLM Error:")
    );
}

#[cfg(unix)]
#[test]
fn test_cli_analyze_with_command_summarizer() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", "id,name\n1,a\n2,\n");

    let output = dqcheck()
        .arg("analyze")
        .arg(&path)
        .args(["--summarizer-cmd", "sh", "--summarizer-arg=-c"])
        .args(["--summarizer-arg", "echo '## Summary'"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["data_quality_summary"], "## Summary");
}

#[test]
fn test_cli_analyze_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "dups.csv", "v\nx\nx\nx\n");
    let out = dir.path().join("response.json");

    dqcheck()
        .arg("analyze")
        .arg(&path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["rows_original"], 3);
    assert_eq!(value["data_quality_score"], 99.8);
}

#[test]
fn test_cli_samples_large_file() {
    let dir = TempDir::new().unwrap();
    let mut content = String::from("id,value\n");
    for i in 0..6000 {
        writeln!(content, "{},{}", i, i % 10).unwrap();
    }
    let path = write_file(&dir, "large.csv", &content);

    dqcheck()
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Rows: 6000"));
}

#[test]
fn test_cli_rejects_non_csv_with_status_2() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.txt", "a,b\n1,2\n");

    dqcheck()
        .arg("analyze")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Only .csv files are supported."));
}

#[test]
fn test_cli_rejects_malformed_csv_with_status_2() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.csv", "a,b\n1,2\n3,4,5\n");

    dqcheck().arg("report").arg(&path).assert().code(2);
}

#[test]
fn test_cli_missing_file_is_failure() {
    let dir = TempDir::new().unwrap();

    dqcheck()
        .arg("report")
        .arg(dir.path().join("absent.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_cli_rejects_zero_max_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", "id\n1\n");

    dqcheck()
        .args(["report", "--max-rows", "0"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_rows"));
}
