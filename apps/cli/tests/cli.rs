use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;

fn evohub() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_evohub"));
    for (key, _) in std::env::vars().filter(|(key, _)| key.starts_with("EVOHUB__")) {
        cmd.env_remove(key);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn resolve_prints_tagged_record() {
    let output = evohub()
        .args(["resolve", "--feature", "voice", "--owner", "user", "--plan", "enterprise"])
        .output()
        .expect("run evohub");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({ "feature": "voice", "dailyBurstCap": 3000 }));
}

#[test]
fn guests_get_the_guest_ceiling_whatever_the_plan() {
    let output = evohub()
        .args(["resolve", "-f", "webscraper", "-o", "guest", "-p", "enterprise"])
        .output()
        .expect("run evohub");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["dailyBurstCap"], 5);
}

#[test]
fn user_without_plan_resolves_as_free() {
    let output =
        evohub().args(["resolve", "-f", "video", "-o", "user"]).output().expect("run evohub");

    assert_eq!(stdout_json(&output), json!({ "feature": "video", "monthlyCreditsTenths": 0 }));
}

#[test]
fn unknown_plan_is_rejected_by_default() {
    evohub()
        .args(["resolve", "-f", "voice", "-o", "user", "-p", "platinum"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("platinum"));
}

#[test]
fn unknown_owner_is_rejected() {
    evohub()
        .args(["resolve", "-f", "voice", "-o", "robot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("robot"));
}

#[test]
fn unknown_plan_falls_back_to_free_when_configured() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("evohub.toml");
    fs::write(&config, "[boundary]\nunknown_plan = \"free\"\n")?;

    let output = evohub()
        .arg("--config")
        .arg(&config)
        .args(["resolve", "-f", "webscraper", "-o", "user", "-p", "platinum"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["dailyBurstCap"], 20);
    Ok(())
}

#[test]
fn guest_plan_rejected_when_configured() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("evohub.toml");
    fs::write(&config, "[boundary]\nguest_plan = \"reject\"\n")?;

    evohub()
        .arg("--config")
        .arg(&config)
        .args(["resolve", "-f", "voice", "-o", "guest", "-p", "pro"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn environment_overrides_apply_without_config_file() {
    let output = evohub()
        .env("EVOHUB__BOUNDARY__UNKNOWN_PLAN", "free")
        .args(["resolve", "-f", "webscraper", "-o", "user", "-p", "platinum"])
        .output()
        .expect("run evohub");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({ "feature": "webscraper", "dailyBurstCap": 20 }));
}

#[test]
fn environment_overrides_take_precedence_over_config_file() -> Result<(), Box<dyn std::error::Error>>
{
    let dir = tempdir()?;
    let config = dir.path().join("evohub.toml");
    fs::write(&config, "[boundary]\nunknown_plan = \"reject\"\n")?;

    let output = evohub()
        .env("EVOHUB__BOUNDARY__UNKNOWN_PLAN", "free")
        .arg("--config")
        .arg(&config)
        .args(["resolve", "-f", "webscraper", "-o", "user", "-p", "platinum"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["dailyBurstCap"], 20);
    Ok(())
}

#[test]
fn debug_level_logs_configuration_and_resolution_to_stderr() {
    let output = evohub()
        .env("EVOHUB__LOGGING__LEVEL", "debug")
        .args(["resolve", "-f", "voice", "-o", "user"])
        .output()
        .expect("run evohub");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration loaded"), "stderr: {stderr}");
    assert!(stderr.contains("Entitlement resolved"), "stderr: {stderr}");
    assert_eq!(stdout_json(&output)["dailyBurstCap"], 60);
}

#[test]
fn info_level_keeps_resolution_logs_quiet() {
    let output = evohub()
        .env("EVOHUB__LOGGING__LEVEL", "info")
        .args(["resolve", "-f", "voice", "-o", "user"])
        .output()
        .expect("run evohub");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Entitlement resolved"), "stderr: {stderr}");
    assert!(!stderr.contains("Configuration loaded"), "stderr: {stderr}");
}

#[test]
fn missing_config_file_fails() {
    evohub()
        .args(["--config", "/nonexistent/evohub.toml", "table"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn check_within_cap_exits_zero() {
    let output = evohub()
        .args(["check", "-f", "webscraper", "-o", "guest", "--used", "3"])
        .output()
        .expect("run evohub");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output), json!({ "decision": "allowed", "remaining": 1 }));
}

#[test]
fn check_past_cap_exits_two() {
    let output = evohub()
        .args(["check", "-f", "voice", "-o", "user", "-p", "free", "--used", "60", "--requested", "5"])
        .output()
        .expect("run evohub");

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout_json(&output),
        json!({ "decision": "denied", "limit": 60, "used": 60, "requested": 5 })
    );
}

#[test]
fn table_for_one_feature() {
    let output = evohub().args(["table", "--feature", "video"]).output().expect("run evohub");

    assert!(output.status.success());
    let table = stdout_json(&output);
    assert_eq!(table["feature"], "video");
    assert_eq!(table["guest"]["monthlyCreditsTenths"], 0);
    assert_eq!(table["plans"]["enterprise"]["monthlyCreditsTenths"], 5000);
}

#[test]
fn table_lists_every_feature() {
    let output = evohub().arg("table").output().expect("run evohub");

    let tables = stdout_json(&output);
    let features: Vec<_> =
        tables.as_array().expect("array").iter().map(|t| t["feature"].clone()).collect();
    assert_eq!(features, vec![json!("video"), json!("voice"), json!("webscraper")]);
}

#[test]
fn no_arguments_prints_help() {
    evohub().assert().failure().stderr(predicate::str::contains("Usage"));
}
