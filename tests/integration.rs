// Integration tests for the appsec-score CLI surface.
//
// These use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the appsec-score binary.
fn appsec_score() -> Command {
    Command::cargo_bin("appsec-score").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    appsec_score()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("appsec-score"));
}

#[test]
fn cli_help_flag() {
    appsec_score()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk-weighted security scoring"));
}

#[test]
fn score_requires_path() {
    appsec_score()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn verbose_and_quiet_conflict() {
    appsec_score()
        .args(["-v", "-q", "defaults"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn min_total_rejects_values_above_one_hundred() {
    appsec_score()
        .args(["score", "apps.json", "--min-total", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("101"));
}

#[test]
fn defaults_prints_builtin_tables() {
    appsec_score()
        .arg("defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("tool_quality"))
        .stdout(predicate::str::contains("SonarQube"))
        .stdout(predicate::str::contains("risk_factors"))
        .stdout(predicate::str::contains("External"));
}
