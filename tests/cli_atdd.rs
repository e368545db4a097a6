#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
[integration_levels."3"]
weight = 0.8

[integration_levels."4"]
weight = 1.0

[tool_quality]
other = 0.8

[tool_quality.managed]
"SonarQube" = 1.0
"Burp Suite Enterprise" = 1.0
"Cloudflare WAF" = 1.0

[risk_factors.facing]
"External" = 1.5

[risk_factors.data_types]
"PII" = 1.2
"#;

const COMPLETE_APP: &str = r#"{
    "id": 1,
    "name": "storefront",
    "description": "Customer storefront",
    "owner": "web-team",
    "repoUrl": "https://git.example.com/storefront",
    "language": "Rust",
    "framework": "axum",
    "serverEnvironment": "kubernetes",
    "authProfiles": "OIDC",
    "dataTypes": "PII",
    "metadataLastReviewed": "2026-09-01",
    "facing": "External",
    "sastTool": "SonarQube",
    "sastIntegrationLevel": 4,
    "dastTool": "Burp Suite Enterprise",
    "dastIntegrationLevel": 4,
    "appFirewallTool": "Cloudflare WAF",
    "appFirewallIntegrationLevel": 4,
    "apiSecurityNA": true
}"#;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should create");
    }
    fs::write(path, content).expect("file should write");
}

fn appsec_score() -> Command {
    Command::cargo_bin("appsec-score").expect("binary should compile")
}

#[test]
fn score_complete_application_outputs_full_marks() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(&dir.path().join("scoring.toml"), CONFIG);
    write(&dir.path().join("apps/storefront.json"), COMPLETE_APP);

    appsec_score()
        .arg("score")
        .arg(dir.path().join("apps"))
        .arg("--config")
        .arg(dir.path().join("scoring.toml"))
        .args(["--as-of", "2026-10-18T00:00:00Z", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"knowledgeScore\": 50"))
        .stdout(predicate::str::contains("\"toolScore\": 50"))
        .stdout(predicate::str::contains("\"totalScore\": 100"));
}

#[test]
fn score_half_documented_application_scores_twenty_knowledge() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        &dir.path().join("app.json"),
        r#"{"name": "legacy", "description": "d", "owner": "o", "language": "Java", "framework": "Spring"}"#,
    );

    appsec_score()
        .arg("score")
        .arg(dir.path().join("app.json"))
        .args(["--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"knowledgeScore\": 20"))
        .stdout(predicate::str::contains("\"toolScore\": 0"));
}

#[test]
fn score_warns_when_fallback_weights_apply() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(&dir.path().join("scoring.toml"), CONFIG);
    write(
        &dir.path().join("app.json"),
        r#"{"name": "tinker", "sastTool": "Homegrown", "sastIntegrationLevel": 4}"#,
    );

    appsec_score()
        .arg("score")
        .arg(dir.path().join("app.json"))
        .arg("--config")
        .arg(dir.path().join("scoring.toml"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("| tinker | 0 | 10 | 10 |"))
        .stderr(predicate::str::contains("fallback weights applied"));
}

#[test]
fn score_blocks_below_min_total() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(&dir.path().join("scoring.toml"), CONFIG);
    write(
        &dir.path().join("apps.json"),
        &format!("[{COMPLETE_APP}, {{\"name\": \"bare\"}}]"),
    );

    appsec_score()
        .arg("score")
        .arg(dir.path().join("apps.json"))
        .arg("--config")
        .arg(dir.path().join("scoring.toml"))
        .args(["--as-of", "2026-10-18", "--min-total", "60"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("total score below 60: bare"));
}

#[test]
fn score_appends_audit_records() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(&dir.path().join("scoring.toml"), CONFIG);
    write(&dir.path().join("app.json"), COMPLETE_APP);
    let audit = dir.path().join("audit/scores.jsonl");

    for _ in 0..2 {
        appsec_score()
            .arg("score")
            .arg(dir.path().join("app.json"))
            .arg("--config")
            .arg(dir.path().join("scoring.toml"))
            .args(["--as-of", "2026-10-18"])
            .arg("--record")
            .arg(&audit)
            .assert()
            .code(0);
    }

    let content = fs::read_to_string(&audit).expect("audit file should exist");
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).expect("line should be json");
        assert_eq!(value["application_id"], 1);
        assert_eq!(value["total_score"], 100);
        assert_eq!(value["config_fingerprint"].as_str().map(str::len), Some(64));
    }
}

#[test]
fn score_fails_for_missing_config_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(&dir.path().join("app.json"), COMPLETE_APP);

    appsec_score()
        .arg("score")
        .arg(dir.path().join("app.json"))
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn score_fails_for_missing_input() {
    let dir = TempDir::new().expect("temp dir should be created");

    appsec_score()
        .arg("score")
        .arg(dir.path().join("nothing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input path does not exist"));
}

#[test]
fn score_rejects_bad_as_of_timestamp() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(&dir.path().join("app.json"), COMPLETE_APP);

    appsec_score()
        .arg("score")
        .arg(dir.path().join("app.json"))
        .args(["--as-of", "yesterday"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid timestamp: yesterday"));
}

#[test]
fn check_config_reports_fingerprint() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(&dir.path().join("scoring.toml"), CONFIG);

    appsec_score()
        .arg("check-config")
        .arg(dir.path().join("scoring.toml"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("config ok: 2 integration levels"))
        .stdout(predicate::str::contains("fingerprint:"));
}

#[test]
fn check_config_rejects_incomplete_tables() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        &dir.path().join("scoring.toml"),
        r#"
[integration_levels."1"]
weight = 0.25
"#,
    );

    appsec_score()
        .arg("check-config")
        .arg(dir.path().join("scoring.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn check_config_rejects_out_of_range_weights() {
    let dir = TempDir::new().expect("temp dir should be created");
    write(
        &dir.path().join("scoring.toml"),
        &CONFIG.replace("weight = 0.8", "weight = 1.8"),
    );

    appsec_score()
        .arg("check-config")
        .arg(dir.path().join("scoring.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid scoring config"));
}
