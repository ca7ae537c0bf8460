//! CLI Integration Tests
//!
//! These tests run the `folio` binary end to end against the bundled resume
//! and against portfolio files written to a temporary directory.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// CLI command against the bundled portfolio with an instant settle delay
fn cli_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary");
    cmd.arg("--settle-ms").arg("0");
    cmd
}

/// CLI command against a portfolio file
fn cli_cmd_with_data(path: &Path) -> Command {
    let mut cmd = cli_cmd();
    cmd.arg("--data").arg(path);
    cmd
}

/// Write a portfolio with one project whose second image is missing
fn write_portfolio(dir: &Path, images: &[&str]) -> PathBuf {
    std::fs::create_dir_all(dir.join("shots")).unwrap();
    image::RgbImage::new(4, 4).save(dir.join("shots/present.png")).unwrap();

    let images: Vec<String> = images.iter().map(|i| format!("\"{}\"", i)).collect();
    let json = format!(
        r#"{{
            "name": "Grace Hopper",
            "skills": ["COBOL"],
            "projects": [
                {{"title": "Compiler", "description": "A-0", "tags": ["Systems"], "images": [{}]}},
                {{"title": "Nanosecond", "description": "Wire", "long_text": "Eleven **inches**"}}
            ]
        }}"#,
        images.join(", ")
    );
    let path = dir.join("portfolio.json");
    std::fs::write(&path, json).unwrap();
    path
}

// ============================================================================
// Info and Projects
// ============================================================================

#[test]
fn test_info_bundled() {
    cli_cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Salar"))
        .stdout(predicate::str::contains("Source: bundled"))
        .stdout(predicate::str::contains("Projects: 5"));
}

#[test]
fn test_info_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path(), &["shots/present.png"]);

    cli_cmd_with_data(&path)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Grace Hopper"))
        .stdout(predicate::str::contains("Projects: 2"))
        .stdout(predicate::str::contains("Skills: 1"));
}

#[test]
fn test_projects_lists_slugs() {
    cli_cmd()
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("youtube-clone"))
        .stdout(predicate::str::contains("text only"))
        .stdout(predicate::str::contains("neovim-config"))
        .stdout(predicate::str::contains("2 images"));
}

#[test]
fn test_missing_data_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd_with_data(&dir.path().join("absent.json"))
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load portfolio"));
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_all_images_present() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path(), &["shots/present.png"]);

    cli_cmd_with_data(&path)
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data: ok"))
        .stdout(predicate::str::contains("1/1 settled, 0 failed"));
}

#[test]
fn test_check_bundled_images_strict() {
    cli_cmd()
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data: ok"))
        .stdout(predicate::str::contains("market-shop"))
        .stdout(predicate::str::contains("6/6 settled, 0 failed"));
}

#[test]
fn test_check_counts_missing_image_as_settled() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path(), &["shots/present.png", "shots/missing.png"]);

    cli_cmd_with_data(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("2/2 settled, 1 failed"));
}

#[test]
fn test_check_strict_fails_on_problems() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path(), &["shots/present.png", "shots/missing.png"]);

    cli_cmd_with_data(&path)
        .args(["check", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 problem(s) found"));
}

#[test]
fn test_check_reports_blank_image() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path(), &["shots/present.png", " "]);

    cli_cmd_with_data(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data: 1 issue(s)"));
}

// ============================================================================
// Simulate Command Tests
// ============================================================================

#[test]
fn test_simulate_gallery_settles() {
    cli_cmd()
        .args(["simulate", "neovim-config", "--latency-ms", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gallery images"))
        .stdout(predicate::str::contains("Settled 2 of 2 images (0 failed)"));
}

#[test]
fn test_simulate_failures_still_settle() {
    cli_cmd()
        .args(["simulate", "neovim-config", "--latency-ms", "5", "--fail", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settled 2 of 2 images (1 failed)"));
}

#[test]
fn test_simulate_text_only_project() {
    cli_cmd()
        .args(["simulate", "youtube-clone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gallery text"))
        .stdout(predicate::str::contains("Settled 0 of 0 images"));
}

#[test]
fn test_simulate_reopen_uses_new_opening() {
    cli_cmd()
        .args(["simulate", "neovim-config", "--latency-ms", "20", "--reopen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("opening#2"))
        .stdout(predicate::str::contains("Settled 2 of 2 images"));
}

#[test]
fn test_simulate_unknown_project() {
    cli_cmd()
        .args(["simulate", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not found"));
}
