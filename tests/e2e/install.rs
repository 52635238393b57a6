//! Host registration commands

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let mut cmd = cargo_bin_cmd!("aria-hooks");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("session-start"))
        .stdout(predicate::str::contains("skill-invitation"));
}

#[test]
fn test_settings_prints_hooks_block() {
    let mut cmd = cargo_bin_cmd!("aria-hooks");
    let output = cmd.arg("settings").output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["UserPromptSubmit"].as_array().unwrap().len(), 2);
    assert!(json["SessionStart"][0]["hooks"][0]["command"]
        .as_str()
        .unwrap()
        .ends_with("session-start"));
}

#[test]
fn test_install_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.json");
    fs::write(&settings_path, r#"{ "model": "opus" }"#).unwrap();

    for expected in ["Registered aria hooks", "already registered"] {
        let mut cmd = cargo_bin_cmd!("aria-hooks");
        cmd.arg("install")
            .arg("--settings")
            .arg(&settings_path)
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }

    let settings: Value =
        serde_json::from_str(&fs::read_to_string(&settings_path).unwrap()).unwrap();
    assert_eq!(settings["model"], "opus");
    assert_eq!(settings["hooks"]["PermissionRequest"].as_array().unwrap().len(), 1);
}

#[test]
fn test_install_reports_malformed_settings() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.json");
    fs::write(&settings_path, "{ nope").unwrap();

    let mut cmd = cargo_bin_cmd!("aria-hooks");
    cmd.arg("install")
        .arg("--settings")
        .arg(&settings_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
