//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end against a
//! temporary content root and data directory. They test the "wiring"
//! between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Build a content root with a two-entry manifest, the default document and
/// the challenge files.
fn content_root() -> TempDir {
    let root = TempDir::new().unwrap();
    let challenges = root.path().join("challenges");
    std::fs::create_dir_all(&challenges).unwrap();

    std::fs::write(
        root.path().join("challenges.json"),
        r#"[
            {"name": "Two Sum", "file": "challenges/two-sum.md"},
            {"name": "Binary Search", "file": "challenges/binary-search.md"}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        challenges.join("challenges.md"),
        "# Challenges\n\nPick a challenge from the list.",
    )
    .unwrap();
    std::fs::write(
        challenges.join("two-sum.md"),
        "# Two Sum\n\nFind two numbers that add up to a target.",
    )
    .unwrap();
    std::fs::write(
        challenges.join("binary-search.md"),
        "# Binary Search\n\nHalve the range each step.",
    )
    .unwrap();

    root
}

/// Create a CLI command pointed at temporary content and data directories
fn cli_cmd(content: &TempDir, data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("katadeck").expect("Failed to find katadeck binary");
    cmd.arg("--content-dir")
        .arg(content.path())
        .arg("--data-dir")
        .arg(data.path());
    cmd
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_shows_challenges_in_order() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    let output = cli_cmd(&content, &data)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.contains("Challenges (2):"));
    assert!(stdout.contains("slug: two-sum"));
    assert!(stdout.contains("slug: binary-search"));

    let two_sum = stdout.find("Two Sum").unwrap();
    let binary_search = stdout.find("Binary Search").unwrap();
    assert!(two_sum < binary_search, "manifest order not preserved");
}

#[test]
fn test_list_fails_without_manifest() {
    let content = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data).arg("list").assert().failure();
}

// ============================================================================
// Show / Render Command Tests
// ============================================================================

#[test]
fn test_show_prints_markdown_source() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data)
        .arg("show")
        .arg("two-sum")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Two Sum"));
}

#[test]
fn test_show_unknown_slug_fails() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data)
        .arg("show")
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_render_prints_html() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data)
        .arg("render")
        .arg("two-sum")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Two Sum</h1>"));
}

#[test]
fn test_render_resolves_case_insensitively() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data)
        .arg("render")
        .arg("TWO-SUM")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Two Sum</h1>"));
}

#[test]
fn test_overview_prints_default_document() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Challenges</h1>"));
}

// ============================================================================
// Theme Command Tests
// ============================================================================

#[test]
fn test_theme_get_without_preference() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data)
        .arg("theme")
        .arg("get")
        .assert()
        .success()
        .stdout(predicate::str::contains("No theme preference recorded."));
}

#[test]
fn test_theme_set_then_get() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data)
        .arg("theme")
        .arg("set")
        .arg("dark")
        .assert()
        .success();

    // The preference survives into a fresh process
    cli_cmd(&content, &data)
        .arg("theme")
        .arg("get")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn test_theme_set_rejects_unknown_name() {
    let content = content_root();
    let data = TempDir::new().unwrap();

    cli_cmd(&content, &data)
        .arg("theme")
        .arg("set")
        .arg("sepia")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme"));
}
