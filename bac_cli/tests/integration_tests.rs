//! Integration tests for the bac binary.
//!
//! These tests verify end-to-end behavior including:
//! - Estimates from command-line flags
//! - Session files in TOML and JSON
//! - Config profile fallbacks
//! - Error reporting for bad input

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test directory with an empty config file
fn setup_test_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").expect("Failed to write config");
    (temp_dir, config_path)
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bac"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blood alcohol content estimator"));
}

#[test]
fn test_estimate_one_beer() {
    let (_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["estimate", "--height", "180", "--weight", "80"])
        .args(["--hours", "2", "--sex", "M", "--drink", "beer:500:5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--> You have had a total of 1 drink(s) tonight",
        ))
        .stdout(predicate::str::contains("--> Your total BAC is 0.004%"))
        .stdout(predicate::str::contains(
            "--> It will take you 0.28 hours to get sober",
        ));
}

#[test]
fn test_estimate_without_drinks_is_sober() {
    let (_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["estimate", "--height", "170", "--weight", "65", "--sex", "female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total of 0 drink(s)"))
        .stdout(predicate::str::contains("BAC is 0.000%"))
        .stdout(predicate::str::contains("0.00 hours"));
}

#[test]
fn test_json_report() {
    let (_dir, config) = setup_test_dir();

    let output = cli()
        .arg("--config")
        .arg(&config)
        .args(["estimate", "--height", "180", "--weight", "80", "--sex", "m"])
        .args(["--drink", "beer:500:5", "--drink", "spirit:40:40", "--json"])
        .output()
        .expect("Failed to run bac");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert_eq!(report["drink_count"], 2);
    assert_eq!(report["widmark_factor"], 0.72);
    assert!(report["blood_alcohol_content"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_profile_from_config() {
    let (dir, _) = setup_test_dir();
    let config = dir.path().join("profile.toml");
    fs::write(
        &config,
        "[profile]\nheight_cm = 180.0\nweight_kg = 80.0\nsex = \"male\"\n",
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["estimate", "--hours", "2", "--drink", "beer:500:5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BAC is 0.004%"));
}

#[test]
fn test_unknown_sex_reports_zero() {
    let (_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["estimate", "--height", "180", "--weight", "80", "--sex", "x"])
        .args(["--drink", "wine:175:13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BAC is 0.000%"))
        .stderr(predicate::str::contains("no Widmark factor"));
}

#[test]
fn test_session_file() {
    let (dir, config) = setup_test_dir();
    let session = dir.path().join("tonight.toml");
    fs::write(
        &session,
        r#"
height_cm = 180
weight_kg = 80
duration_hours = 2
sex = "M"

[[drinks]]
kind = "beer"
volume_ml = 500
alcohol_percent = 5
"#,
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("session")
        .arg(&session)
        .assert()
        .success()
        .stdout(predicate::str::contains("total of 1 drink(s)"))
        .stdout(predicate::str::contains("BAC is 0.004%"));
}

#[test]
fn test_malformed_drink_fails() {
    let (_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["estimate", "--sex", "m", "--drink", "beer:500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kind:volume_ml:percent"));
}

#[test]
fn test_invalid_body_fails() {
    let (_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["estimate", "--height", "0", "--weight", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height must be a positive"));
}

#[test]
fn test_missing_session_file_fails() {
    let (dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("session")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure();
}
