//! End-to-end checks against the compiled binary.
//!
//! These avoid real OCR calls: they only cover paths that finish before an
//! engine is asked to recognize anything.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xl-scan"))
        .args(args)
        .env("AWS_REGION", "us-east-1")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("RUST_LOG", "warn")
        .env_remove("XL_SCAN_ENGINE")
        .output()
        .expect("Failed to run xl-scan")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn test_help_lists_csv_flag() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--csv"));
    assert!(stdout.contains("--engine"));
}

#[test]
fn test_missing_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-image.png");

    let output = run(&[path_arg(&missing)]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-image.png"), "stderr: {stderr}");
}

#[test]
fn test_path_is_required() {
    let output = run(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_unknown_engine_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&[path_arg(dir.path()), "--engine", "cloud-vision"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cloud-vision"), "stderr: {stderr}");
}

#[cfg(not(feature = "engine-tesseract"))]
#[test]
fn test_uncompiled_engine_reports_missing_dependency() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&[path_arg(dir.path()), "--engine", "tesseract"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("engine-tesseract"), "stderr: {stderr}");
}

#[cfg(feature = "engine-rekognition")]
#[test]
fn test_directory_without_images_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "XL XL XL").unwrap();

    let output = run(&[path_arg(dir.path())]);

    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
}

#[cfg(feature = "engine-rekognition")]
#[test]
fn test_directory_without_images_writes_header_only_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "XL").unwrap();
    let out = dir.path().join("report.csv");

    let output = run(&[path_arg(dir.path()), "--csv", path_arg(&out)]);

    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&out).unwrap(), "file,found,count\n");
}
