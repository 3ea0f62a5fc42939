// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![cfg(unix)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end runs of the `validation-demo` binary.

mod common;

use assert_cmd::Command;
use common::{write_validator, AGE_VALIDATOR};
use predicates::prelude::*;
use rstest::rstest;
use tempfile::tempdir;

fn demo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_validation-demo"))
}

#[test]
fn sample_cases_are_reported() {
    let dir = tempdir().unwrap();
    let validator = write_validator(dir.path(), "validator", AGE_VALIDATOR);

    demo()
        .arg("--validator")
        .arg(&validator)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Valid user ---"))
        .stdout(predicate::str::contains("Valid user:\nValid: true\nMessage: user is valid"))
        .stdout(predicate::str::contains(
            "Underage user:\nValid: false\nErrors:\n     - age must be at least 18",
        ))
        .stdout(predicate::str::contains("Raw JSON:\nValid: true"));
}

#[rstest]
#[case(r#"{"name":"nome","email":"raywall@usp.br","idade":18}"#, true)]
#[case(r#"{"name":"nome","email":"raywall@usp.br","idade":17}"#, false)]
fn input_exit_code_follows_validity(#[case] input: &str, #[case] valid: bool) {
    let dir = tempdir().unwrap();
    let validator = write_validator(dir.path(), "validator", AGE_VALIDATOR);

    let assert = demo()
        .arg("--validator")
        .arg(&validator)
        .args(["--input", input])
        .assert()
        .stdout(predicate::str::starts_with(format!("Input:\nValid: {valid}\n")));
    if valid {
        assert.success();
    } else {
        assert.code(1);
    }
}

#[test]
fn missing_validator_reports_internal_error() {
    let dir = tempdir().unwrap();

    demo()
        .arg("--validator")
        .arg(dir.path().join("absent"))
        .args(["--input", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Message: Internal error:"));
}

#[test]
fn timeout_flag_is_honored() {
    let dir = tempdir().unwrap();
    let validator = write_validator(dir.path(), "validator", "exec sleep 30");

    demo()
        .arg("--validator")
        .arg(&validator)
        .args(["--timeout-ms", "200", "--input", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Message: Validation timed out"));
}

#[test]
fn config_file_is_loaded() {
    let dir = tempdir().unwrap();
    let validator = write_validator(dir.path(), "validator", AGE_VALIDATOR);
    let config = dir.path().join("client.json");
    std::fs::write(
        &config,
        serde_json::json!({ "executable": validator, "timeout_ms": 2000 }).to_string(),
    )
    .unwrap();

    demo()
        .arg("--config")
        .arg(&config)
        .args(["--input", r#"{"idade":30}"#])
        .assert()
        .success();
}

#[test]
fn invalid_config_exits_with_usage_code() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("client.toml");
    std::fs::write(&config, "timeout_ms = 0\n").unwrap();

    demo()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Invalid config"));
}
