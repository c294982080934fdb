//! CLI Integration Tests
//!
//! Tests the command-line interface end-to-end. Nothing here reaches a real
//! generation service.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the binary to test, isolated from the user's config and keys.
fn adpilot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("adpilot").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("XDG_DATA_HOME", dir.path().join("data"))
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI campaign wizard"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_help_lists_business_fields() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir)
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--description"))
        .stdout(predicate::str::contains("--budget"));
}

#[test]
fn test_generate_requires_name_and_description() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir)
        .args(["generate", "--name", "Acme Solar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--description"));
}

// ============================================================================
// Generate Command Tests
// ============================================================================

#[test]
fn test_generate_without_api_key_fails() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir)
        .args(["generate", "--name", "Acme Solar", "--description", "solar installs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY not set"));
}

#[test]
fn test_generate_unreachable_provider_reports_step_failure() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".adpilot.toml"),
        "[ai]\nprovider = \"ollama\"\n\n[ai.ollama]\nbase_url = \"http://127.0.0.1:9\"\nmodel = \"llama3.2\"\n",
    )
    .unwrap();

    adpilot(&dir)
        .args(["generate", "--name", "Acme Solar", "--description", "solar installs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Analyzing your business..."))
        .stderr(predicate::str::contains("Failed to generate strategy. Please check your API key."));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir)
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adpilot").and(predicate::str::contains("config.toml")));
}

#[test]
fn test_config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("provider = \"gemini\""))
        .stdout(predicate::str::contains("show_preview = true"));
}

#[test]
fn test_local_config_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".adpilot.toml"), "[ui]\ntheme = \"nord\"\n").unwrap();

    adpilot(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = \"nord\""));
}

#[test]
fn test_config_init_writes_global_file() {
    let dir = TempDir::new().unwrap();
    let written = dir.path().join("config").join("adpilot").join("config.toml");

    adpilot(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let content = std::fs::read_to_string(&written).unwrap();
    assert!(content.contains("provider = \"gemini\""));

    // Never overwrites an existing file
    adpilot(&dir)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_config_reports_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".adpilot.toml"), "[ui\ntheme = ").unwrap();

    adpilot(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"))
        .stderr(predicate::str::contains(".adpilot.toml"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adpilot"));
}

#[test]
fn test_completions_invalid_shell() {
    let dir = TempDir::new().unwrap();
    adpilot(&dir).args(["completions", "tcsh"]).assert().failure();
}
