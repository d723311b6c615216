//! Integration tests for the dictee CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn dictee() -> Command {
    Command::cargo_bin("dictee").unwrap()
}

fn compare_skipped() -> Command {
    let mut cmd = dictee();
    cmd.arg("compare")
        .arg("-u")
        .arg(fixture_path("attempts/skipped.txt"))
        .arg("-r")
        .arg(fixture_path("reference.txt"));
    cmd
}

#[test]
fn test_compare_text_output() {
    compare_skipped()
        .assert()
        .success()
        .stdout(predicate::str::contains("so today we [-are] going"))
        .stdout(predicate::str::contains("the ~wether in london [-It] [-was] cold"))
        .stdout(predicate::str::contains(
            "accuracy 86.5%  correct 22  mistake 1  missing 3  wrong 0",
        ));
}

#[test]
fn test_compare_perfect_attempt() {
    let mut cmd = dictee();
    cmd.arg("compare")
        .arg("-u")
        .arg(fixture_path("attempts/perfect.txt"))
        .arg("-r")
        .arg(fixture_path("reference.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("accuracy 100.0%"));
}

#[test]
fn test_json_output_with_timestamps() {
    compare_skipped()
        .arg("--reference-timestamps")
        .arg(fixture_path("reference.times"))
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"missing\""))
        .stdout(predicate::str::contains("\"timestamp\": 0.9"))
        .stdout(predicate::str::contains("\"accuracy\""));
}

#[test]
fn test_markdown_output() {
    compare_skipped()
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("| # | Word | Result | Time (s) |"))
        .stdout(predicate::str::contains("| 4 | are | missing | 0.00 |"))
        .stdout(predicate::str::contains("**Accuracy:** 86.5%"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    compare_skipped()
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("[-are]"));
}

#[test]
fn test_strict_threshold_turns_mistake_into_wrong() {
    compare_skipped()
        .arg("--threshold")
        .arg("0.95")
        .assert()
        .success()
        .stdout(predicate::str::contains("[-weather]"))
        .stdout(predicate::str::contains("[+wether]"));
}

#[test]
fn test_invalid_threshold() {
    compare_skipped()
        .arg("--threshold")
        .arg("1.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = dictee();
    cmd.arg("compare")
        .arg("-u")
        .arg("nonexistent.txt")
        .arg("-r")
        .arg(fixture_path("reference.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));
}

#[test]
fn test_invalid_timestamps() {
    let temp_dir = TempDir::new().unwrap();
    let times = temp_dir.path().join("bad.times");
    fs::write(&times, "0.0 soon").unwrap();

    compare_skipped()
        .arg("--user-timestamps")
        .arg(&times)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamps"));
}

#[test]
fn test_score_command() {
    let mut cmd = dictee();
    cmd.arg("score")
        .arg("-u")
        .arg(fixture_path("attempts/perfect.txt"))
        .arg("-r")
        .arg(fixture_path("reference.txt"));

    cmd.assert().success().stdout("1.0000\n");
}

#[test]
fn test_batch_glob_pattern() {
    let mut cmd = dictee();
    cmd.arg("batch")
        .arg("-u")
        .arg(fixture_path("attempts/*.txt"))
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("perfect.txt =="))
        .stdout(predicate::str::contains("skipped.txt =="))
        .stdout(predicate::str::contains("unrelated.txt =="))
        .stdout(predicate::str::contains("== summary ==\ncomparisons 3"));
}

#[test]
fn test_batch_json_report() {
    let mut cmd = dictee();
    cmd.arg("batch")
        .arg("-u")
        .arg(fixture_path("attempts/*.txt"))
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-f")
        .arg("json")
        .arg("--jobs")
        .arg("2")
        .arg("-q");

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["results"].as_array().unwrap().len(), 3);
    assert_eq!(report["summary"]["comparisons"], 3);
    assert_eq!(report["results"][0]["accuracy"], 1.0);
}

#[test]
fn test_batch_no_matches() {
    let mut cmd = dictee();
    cmd.arg("batch")
        .arg("-u")
        .arg(fixture_path("attempts/*.md"))
        .arg("-r")
        .arg(fixture_path("reference.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_generated_config_is_usable() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("dictee.toml");

    dictee()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    let edited = fs::read_to_string(&config)
        .unwrap()
        .replace("default_format = \"text\"", "default_format = \"json\"");
    fs::write(&config, edited).unwrap();

    compare_skipped()
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"diff\""));
}

#[test]
fn test_generate_config_to_stdout() {
    dictee()
        .arg("generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[comparison]"))
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn test_broken_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("dictee.toml");
    fs::write(&config, "[comparison]\nlanguage = \"english\"\n").unwrap();

    compare_skipped()
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_help_command() {
    dictee()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dictation transcriptions"));
}

#[test]
fn test_list_formats() {
    dictee()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_presets() {
    dictee()
        .arg("list")
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("strict"))
        .stdout(predicate::str::contains("lenient"));
}
