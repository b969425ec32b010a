//! CLI integration tests. All run offline: Dallas/DFW is served from
//! locked data and every provider key is removed from the environment.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const KEY_VARS: [&str; 4] = ["API_KEY", "GEMINI_API_KEY", "OPENAI_API_KEY", "ANTHROPIC_API_KEY"];

fn market_intel(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("market-intel");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    for var in KEY_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    market_intel(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix"))
        .stdout(predicate::str::contains("detail"))
        .stdout(predicate::str::contains("lab"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_names_binary() {
    let dir = TempDir::new().unwrap();
    market_intel(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("market-intel"));
}

#[test]
fn source_reports_locked_for_dfw() {
    let dir = TempDir::new().unwrap();
    let output = market_intel(dir.path())
        .args(["source", "dfw", "--json"])
        .output()
        .expect("run market-intel");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["origin"], "locked");
    assert_eq!(value["region"], "dfw");
}

#[test]
fn source_reports_discovery_elsewhere() {
    let dir = TempDir::new().unwrap();
    market_intel(dir.path())
        .args(["source", "Austin, TX"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ai discovery"));
}

#[test]
fn matrix_json_serves_locked_dallas_offline() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[market]\nlocked_delay_ms = 5\n");

    let output = market_intel(dir.path())
        .args(["matrix", "Dallas DFW", "--json", "--config"])
        .arg(&config)
        .output()
        .expect("run market-intel");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["command"], "matrix");
    assert_eq!(value["origin"], "locked");
    assert_eq!(value["records"].as_array().unwrap().len(), 15);
    assert_eq!(value["records"][0]["dsoName"], "Ideal Dental (DECA)");
    assert_eq!(value["records"][0]["dentistsPerClinic"], 2.09);
    assert_eq!(value["vitals"]["competitive_set"], 15);
}

#[test]
fn matrix_filter_narrows_rows() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[market]\nlocked_delay_ms = 5\n");

    let output = market_intel(dir.path())
        .args(["matrix", "dallas", "--filter", "aspen", "--json", "-c"])
        .arg(&config)
        .output()
        .expect("run market-intel");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = value["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["dsoName"], "Aspen Dental");
    // Vitals always cover the full competitive set.
    assert_eq!(value["vitals"]["competitive_set"], 15);
}

#[test]
fn matrix_text_marks_own_brand() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[market]\nlocked_delay_ms = 5\n");

    market_intel(dir.path())
        .args(["matrix", "DFW", "--color", "never", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("★ AD&I/DDS"))
        .stdout(predicate::str::contains("TBD"));
}

#[test]
fn matrix_without_key_reports_no_data() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    market_intel(dir.path())
        .args(["matrix", "Boise", "--color", "never", "-c"])
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available for Boise."));
}

#[test]
fn config_validate_rejects_zero_delay() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[market]\nlocked_delay_ms = 0\n");

    let output = market_intel(dir.path())
        .args(["config", "validate", "--config"])
        .arg(&config)
        .output()
        .expect("run market-intel");

    assert!(!output.status.success(), "Expected nonzero exit code");
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(combined.contains("locked_delay_ms"), "output: {combined}");
}

#[test]
fn config_validate_accepts_defaults_with_warning() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    market_intel(dir.path())
        .args(["config", "validate", "--color", "never", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"))
        .stdout(predicate::str::contains("No API key set for gemini"));
}

#[test]
fn config_init_writes_template_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    market_intel(dir.path())
        .args(["config", "init", "-c"])
        .arg(&path)
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[market]"));

    market_intel(dir.path())
        .args(["config", "init", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    market_intel(dir.path())
        .args(["config", "init", "--force", "-c"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn config_show_json_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let output = market_intel(dir.path())
        .args(["config", "show", "--json", "-c"])
        .arg(&missing)
        .output()
        .expect("run market-intel");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["from_file"], false);
    assert_eq!(value["config"]["llm_provider"], "gemini");
    assert_eq!(value["config"]["api_key_loaded"], false);
}
