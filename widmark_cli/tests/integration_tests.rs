//! Integration tests for the bac binary.
//!
//! These tests verify end-to-end behavior including:
//! - Human-readable estimate output
//! - JSON output keys and values
//! - Config file defaults and custom presets
//! - Input validation failures

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with no user config in scope
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bac"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn estimate_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--json").output().expect("Failed to run bac");
    assert!(output.status.success(), "bac failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_cli_help() {
    let home = setup_test_dir();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Widmark"));
}

#[test]
fn test_one_beer_male() {
    let home = setup_test_dir();
    cli(&home)
        .args(["estimate", "--sex", "male", "--weight", "75", "--drink", "500ml@5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.39 g/L"))
        .stdout(predicate::str::contains("Zero in:        2h 35m"))
        .stdout(predicate::str::contains("Under the legal limit"));
}

#[test]
fn test_two_beers_over_limit() {
    let home = setup_test_dir();
    cli(&home)
        .args([
            "estimate", "--sex", "male", "--weight", "75", "--preset", "beer", "--preset", "beer",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.77 g/L"))
        .stdout(predicate::str::contains("1h 49m"))
        .stdout(predicate::str::contains("5h 09m"))
        .stdout(predicate::str::contains("Over the legal limit"));
}

#[test]
fn test_json_output() {
    let home = setup_test_dir();
    let json = estimate_json(cli(&home).args([
        "estimate", "--sex", "female", "--weight", "75", "--drink", "Beer=0.5l@5",
    ]));

    let grams = json["gramsPureAlcohol"].as_f64().unwrap();
    let peak = json["peakBAC"].as_f64().unwrap();
    assert!((grams - 19.725).abs() < 1e-9);
    assert!((peak - 19.725 / (75.0 * 0.55)).abs() < 1e-9);
    assert_eq!(json["currentBAC"].as_f64().unwrap(), peak);
    assert_eq!(json["hoursToLegalThreshold"].as_f64().unwrap(), 0.0);
    assert!(json["hoursToZero"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_no_drinks_is_all_zero() {
    let home = setup_test_dir();
    let json = estimate_json(cli(&home).args(["estimate", "--sex", "male", "--weight", "80"]));

    for key in [
        "gramsPureAlcohol",
        "peakBAC",
        "currentBAC",
        "hoursToLegalThreshold",
        "hoursToZero",
    ] {
        assert_eq!(json[key].as_f64().unwrap(), 0.0, "{} should be 0", key);
    }
}

#[test]
fn test_elapsed_hours_reduce_bac() {
    let home = setup_test_dir();
    let json = estimate_json(cli(&home).args([
        "estimate", "--sex", "male", "--weight", "75", "--drink", "500@5", "--drink", "500@5",
        "--hours", "2",
    ]));

    let peak = json["peakBAC"].as_f64().unwrap();
    let current = json["currentBAC"].as_f64().unwrap();
    assert!((peak - current - 0.3).abs() < 1e-9);
    assert_eq!(json["hoursToLegalThreshold"].as_f64().unwrap(), 0.0);
}

#[test]
fn test_negative_hours_treated_as_zero() {
    let home = setup_test_dir();
    let json = estimate_json(cli(&home).args([
        "estimate", "--sex", "male", "--weight", "75", "--drink", "500@5", "--hours", "-3",
    ]));

    assert_eq!(json["currentBAC"], json["peakBAC"]);
}

#[test]
fn test_hours_and_since_conflict() {
    let home = setup_test_dir();
    cli(&home)
        .args([
            "estimate", "--sex", "male", "--weight", "75", "--hours", "1", "--since", "20:00",
        ])
        .assert()
        .failure();
}

#[test]
fn test_invalid_drink_rejected() {
    let home = setup_test_dir();
    cli(&home)
        .args(["estimate", "--sex", "male", "--weight", "75", "--drink", "500@150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ABV must be between 0 and 100"));
}

#[test]
fn test_unknown_preset_rejected() {
    let home = setup_test_dir();
    cli(&home)
        .args(["estimate", "--sex", "male", "--weight", "75", "--preset", "absinthe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absinthe"));
}

#[test]
fn test_zero_weight_rejected() {
    let home = setup_test_dir();
    cli(&home)
        .args(["estimate", "--sex", "male", "--weight", "0", "--drink", "500@5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight"));
}

#[test]
fn test_missing_sex_without_config() {
    let home = setup_test_dir();
    cli(&home)
        .args(["estimate", "--weight", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sex given"));
}

#[test]
fn test_config_supplies_defaults_and_presets() {
    let home = setup_test_dir();
    let config_path = home.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
[subject]
sex = "male"
weight_kg = 75.0

[display]
decimal_separator = "comma"

[[presets.custom]]
id = "pint"
label = "Pint"
volume_ml = 500.0
abv = 5.0
"#,
    )
    .unwrap();

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .args(["estimate", "--preset", "pint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0,39 g/L"))
        .stdout(predicate::str::contains("Pint"));

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("pint"))
        .stdout(predicate::str::contains("beer"));
}

#[test]
fn test_config_from_xdg_dir() {
    let home = setup_test_dir();
    let dir = home.path().join("widmark");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[subject]\nsex = \"female\"\nweight_kg = 60.0\n").unwrap();

    let json = estimate_json(cli(&home).args(["estimate", "--drink", "40ml@40"]));
    let expected_peak = (40.0 * 0.4 * 0.789) / (60.0 * 0.55);
    assert!((json["peakBAC"].as_f64().unwrap() - expected_peak).abs() < 1e-9);
}

#[test]
fn test_presets_lists_builtins() {
    let home = setup_test_dir();
    cli(&home)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("beer"))
        .stdout(predicate::str::contains("wine"))
        .stdout(predicate::str::contains("shot"));
}

#[test]
fn test_presets_follow_decimal_separator() {
    let home = setup_test_dir();
    let config_path = home.path().join("comma.toml");
    fs::write(&config_path, "[display]\ndecimal_separator = \"comma\"\n").unwrap();

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("150 ml @ 12,0%"))
        .stdout(predicate::str::contains("12.0").not());
}
