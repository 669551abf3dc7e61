//! End-to-end tests for the `format_sources` binary
//!
//! The binary always walks `src` relative to its working directory, so each
//! test runs it inside a temp directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn format_sources(cwd: &Path, path_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_format_sources"))
        .args(args)
        .current_dir(cwd)
        .env("PATH", path_dir)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .output()
        .expect("Failed to run format_sources")
}

#[test]
fn test_missing_formatter_still_exits_zero() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let src = temp_dir.path().join("src");
    fs::create_dir_all(&src).expect("Failed to create src");
    fs::write(src.join("a.cpp"), "int main(){}\n").expect("Failed to write file");
    fs::write(src.join("notes.txt"), "not code\n").expect("Failed to write file");
    let empty_path = temp_dir.path().join("empty-bin");
    fs::create_dir_all(&empty_path).expect("Failed to create empty PATH dir");

    let output = format_sources(temp_dir.path(), &empty_path, &[]);

    assert!(output.status.success(), "exit status: {}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Files found: 1"), "stdout: {}", stdout);
    assert!(stdout.contains("Files failed: 1"), "stdout: {}", stdout);

    // Per-file progress stays below the default log level
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN"), "stderr: {}", stderr);
    assert!(!stderr.contains("Formatting src"), "stderr: {}", stderr);
}

#[test]
fn test_missing_src_directory_exits_zero() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = format_sources(temp_dir.path(), temp_dir.path(), &["--quiet"]);

    assert!(output.status.success(), "exit status: {}", output.status);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_flag_exits_non_zero() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = format_sources(temp_dir.path(), temp_dir.path(), &["--bogus"]);

    assert!(!output.status.success());
}
