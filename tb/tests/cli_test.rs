//! End-to-end tests for the tb binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from the user's config, data dir and working directory
fn tb(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tb").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"));
    cmd
}

// =============================================================================
// list / schema
// =============================================================================

#[test]
fn test_list_shows_every_tool() {
    let home = TempDir::new().unwrap();
    let mut assert = tb(&home).arg("list").assert().success();

    for name in [
        "calculate",
        "generate_api_key",
        "generate_password",
        "generate_pin",
        "generate_token",
        "generate_uuid",
        "hash_text",
    ] {
        assert = assert.stdout(predicate::str::contains(name));
    }
}

#[test]
fn test_schema() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["schema", "hash_text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"required\"").and(predicate::str::contains("\"text\"")));
}

#[test]
fn test_schema_unknown_tool() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["schema", "convert_units"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool: convert_units"));
}

// =============================================================================
// call
// =============================================================================

#[test]
fn test_call_calculate() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["call", "calculate", "--input", r#"{"expression": "sqrt(144) + pow(2, 3)"}"#])
        .assert()
        .success()
        .stdout("🧮 sqrt(144) + pow(2, 3) = 20.0\n");
}

#[test]
fn test_call_rejects_code() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["call", "calculate", "--input", r#"{"expression": "__import__('os')"}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Identifier '__import__' is not allowed"));
}

#[test]
fn test_call_hash_text() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["call", "hash_text", "--input", r#"{"text": "Hello, World!"}"#])
        .assert()
        .success()
        .stdout("#️⃣ SHA256 Hash: dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f\n");
}

#[test]
fn test_call_without_input_uses_defaults() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["call", "generate_pin"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^🔢 PIN: [0-9]{6}\n$").unwrap());
}

#[test]
fn test_call_batch() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["call", "generate_token", "--input", r#"{"length": 4, "count": 3}"#])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^🎟️ Generated 3 TOKEN\(s\):\n1\. [0-9a-f]{8}\n2\. [0-9a-f]{8}\n3\. [0-9a-f]{8}\n$").unwrap());
}

#[test]
fn test_call_bad_json() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["call", "generate_pin", "--input", "{length"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse --input as JSON"));
}

// =============================================================================
// config
// =============================================================================

#[test]
fn test_local_config_sets_defaults() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".toolbelt.yml"), "defaults:\n  pin-length: 9\n").unwrap();

    tb(&home)
        .args(["call", "generate_pin"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^🔢 PIN: [0-9]{9}\n$").unwrap());
}

#[test]
fn test_unreadable_local_config_is_skipped() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".toolbelt.yml"), "defaults:\n  hash-algorithm: SHA256\n").unwrap();

    tb(&home)
        .args(["call", "generate_pin"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^🔢 PIN: [0-9]{6}\n$").unwrap());
}

#[test]
fn test_explicit_config_limits() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("limits.yml");
    fs::write(&path, "limits:\n  max-batch: 2\n").unwrap();

    tb(&home)
        .arg("--config")
        .arg(&path)
        .args(["call", "generate_uuid", "--input", r#"{"count": 3}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("count must be at most 2 (got 3)"));
}

#[test]
fn test_missing_explicit_config() {
    let home = TempDir::new().unwrap();
    tb(&home)
        .args(["--config", "nope.yml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// =============================================================================
// serve
// =============================================================================

#[test]
fn test_serve_json_lines() {
    let home = TempDir::new().unwrap();
    let input = concat!(
        r#"{"id": 1, "tool": "calculate", "input": {"expression": "2 + 3 * 4"}}"#,
        "\n",
        r#"{"id": 2, "tool": "calculate", "input": {"expression": "1 / 0"}}"#,
        "\n"
    );

    let output = tb(&home).arg("serve").write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[0]["content"], "🧮 2 + 3 * 4 = 14");
    assert_eq!(lines[0]["is_error"], false);
    assert_eq!(lines[1]["id"], 2);
    assert_eq!(lines[1]["is_error"], true);
}
