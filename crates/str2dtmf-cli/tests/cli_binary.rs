//! Integration tests for the `str2dtmf` binary
//!
//! Runs the built executable and checks exit codes, stdout and the WAV file
//! it writes.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn str2dtmf(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_str2dtmf"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run str2dtmf")
}

#[test]
fn test_default_output_file() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(&["123", "--duration", "50"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DTMF tones generated and saved to output.wav"));
    assert!(dir.path().join("output.wav").exists(), "output.wav should exist");
}

#[test]
fn test_json_output_describes_file() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(
        &[
            "1?2",
            "--json",
            "--stereo",
            "--pcm8",
            "--sample-rate",
            "16000",
            "--output-file",
            "tones.wav",
        ],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["channels"], 2);
    assert_eq!(json["result"]["sample_width"], 1);
    assert_eq!(json["result"]["frames"], 3 * (8000 + 400));
    assert_eq!(json["warnings"][0]["code"], "CLI_W001");
    assert_eq!(json["warnings"][0]["position"], 1);
    assert!(dir.path().join("tones.wav").exists());
}

#[test]
fn test_help_exits_zero() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(&["--help"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--silence-duration"));
}

#[test]
fn test_missing_digits_exits_one() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(&[], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("output.wav").exists());
}

#[test]
fn test_non_numeric_duration_exits_one() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(&["1", "--duration", "long"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_zero_sample_rate_exits_one() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(&["1", "--sample-rate", "0"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("sample_rate"));
}

#[test]
fn test_byte_rate_past_header_limit_exits_one() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(
        &["1", "--sample-rate", "3000000000", "--stereo", "--duration", "1"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("sample_rate"));
    assert!(!dir.path().join("output.wav").exists());

    // 8-bit mono fits, stereo doubles the byte rate past the limit
    let output = str2dtmf(
        &["1", "--sample-rate", "3000000000", "--pcm8", "--stereo", "--duration", "1"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("output.wav").exists());
}

#[test]
fn test_oversized_output_exits_one() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(&["1", "--duration", "4294967295", "--json"], dir.path());
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["code"], "DTMF_006");
}

#[test]
fn test_unwritable_output_exits_two() {
    let dir = tempdir().expect("Failed to create temp dir");

    let output = str2dtmf(
        &["1", "--duration", "20", "--output-file", "missing/out.wav"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("GENERATION FAILED"));
}
