//! End-to-end CLI integration tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn confluence() -> Command {
    let mut cmd = Command::cargo_bin("confluence").expect("binary not found");
    for var in [
        "CONFLUENCE_WORKFLOW",
        "CONFLUENCE_ENGINES",
        "CONFLUENCE_INPUT",
        "CONFLUENCE_FIXTURES",
        "CONFLUENCE_MAX_WORKERS",
        "CONFLUENCE_ENGINE_TIMEOUT",
        "CONFLUENCE_DEADLINE",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

fn fixture(dir: &Path, engine: &str, body: &Value) {
    fs::write(dir.join(format!("{engine}.json")), body.to_string()).unwrap();
}

fn birth_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("birth.json");
    let body = json!({"name": "Ada", "date": "1990-03-07", "time": "07:30", "location": "Lisbon"});
    fs::write(&path, body.to_string()).unwrap();
    path
}

#[test]
fn help_flag() {
    confluence()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--synthesize"));
}

#[test]
fn version_flag() {
    confluence()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("confluence"));
}

#[test]
fn list_workflows() {
    confluence()
        .arg("--list-workflows")
        .assert()
        .success()
        .stdout(predicate::str::contains("career_guidance"))
        .stdout(predicate::str::contains("shadow_work"));
}

#[test]
fn list_workflows_json() {
    let output = confluence()
        .args(["--list-workflows", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
}

#[test]
fn list_engines_marks_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "tarot", &json!({}));
    confluence()
        .args(["--list-engines", "--fixtures"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("human_design"))
        .stdout(predicate::str::is_match(r"tarot\s+\w+\s+available").unwrap());
}

#[test]
fn unknown_workflow_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    confluence()
        .args(["--workflow", "astral_projection", "--fixtures"])
        .arg(dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown workflow"));
}

#[test]
fn errors_go_to_stderr_even_when_quiet() {
    let dir = tempfile::tempdir().unwrap();
    confluence()
        .args(["--workflow", "astral_projection", "-q", "--fixtures"])
        .arg(dir.path())
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[ERROR] unknown workflow: astral_projection"));
}

#[test]
fn missing_fixtures_is_config_error() {
    confluence()
        .args(["--workflow", "daily_guidance"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--fixtures"));
}

#[test]
fn unknown_engine_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    confluence()
        .args(["--engines", "numerology,astrology", "--fixtures"])
        .arg(dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("astrology"));
}

#[test]
fn invalid_duration_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    confluence()
        .args(["--engine-timeout", "soon", "--fixtures"])
        .arg(dir.path())
        .assert()
        .code(4);
}

#[test]
fn career_guidance_partial_success() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "numerology", &json!({"rawData": {"lifePath": 7}}));
    fixture(dir.path(), "human_design", &json!({"rawData": {"profile": 7}}));
    fixture(dir.path(), "enneagram", &json!({"rawData": {"type": 3}}));
    let input = birth_file(dir.path());

    confluence()
        .args(["--workflow", "career_guidance", "-q", "--fixtures"])
        .arg(dir.path())
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("3/4 engines succeeded"))
        .stdout(predicate::str::contains("Moderate Integration"));
}

#[test]
fn workflow_json_output() {
    let dir = tempfile::tempdir().unwrap();
    for engine in ["biorhythm", "iching", "tarot"] {
        fixture(
            dir.path(),
            engine,
            &json!({"formattedOutput": "A day for intuition and reflection"}),
        );
    }
    let output = confluence()
        .args(["--workflow", "daily_guidance", "--json", "--fixtures"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["workflowName"], "daily_guidance");
    assert_eq!(value["enginesUsed"].as_array().unwrap().len(), 3);
    assert_eq!(value["synthesis"]["fieldSignature"]["coherence"], 1.0);
}

#[test]
fn reading_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "numerology", &json!({"rawData": {"lifePath": 7}}));
    fixture(dir.path(), "tarot", &json!({"rawData": {"card": 7}}));
    let out = dir.path().join("report.json");

    confluence()
        .args(["--engines", "numerology,tarot", "-q", "--fixtures"])
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let report: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["reading"]["results"].as_object().unwrap().len(), 2);
    assert_eq!(
        report["synthesis"]["correlations"]["numericalPatterns"][0]["number"],
        7.0
    );
}

#[test]
fn synthesize_saved_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    let ts = "2026-01-01T00:00:00Z";
    let results = json!({
        "numerology": {"success": true, "data": {"rawData": {"x": 7}}, "processingTime": 1.0, "timestamp": ts},
        "tarot": {"success": true, "data": {"rawData": {"y": 7, "z": 3}}, "processingTime": 2.0, "timestamp": ts},
    });
    fs::write(&path, json!({ "results": results }).to_string()).unwrap();

    let output = confluence()
        .args(["--json", "--synthesize"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();
    let patterns = value["correlations"]["numericalPatterns"].as_array().unwrap();
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0]["frequency"], 2);
    assert_eq!(value["timestamp"], ts);
}

#[test]
fn synthesize_rejects_non_result_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    confluence()
        .arg("--synthesize")
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not a result map"));
}

#[test]
fn all_engines_timed_out_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    for engine in ["biorhythm", "iching", "tarot"] {
        fixture(dir.path(), engine, &json!({"delayMs": 2_000}));
    }
    confluence()
        .args(["--workflow", "daily_guidance", "-q", "--engine-timeout", "100ms", "--fixtures"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn all_engines_failed_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    for engine in ["biorhythm", "iching", "tarot"] {
        fixture(dir.path(), engine, &json!({"error": "ephemeris offline"}));
    }
    confluence()
        .args(["--workflow", "daily_guidance", "-q", "--fixtures"])
        .arg(dir.path())
        .assert()
        .code(1);
}

#[test]
fn completion_bash() {
    confluence()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confluence"));
}
