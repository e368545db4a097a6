use appsec_score::{ApplicationRecord, ScoreResult, ScoringConfig, ScoringEngine};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::builtin().expect("built-in config should parse"))
        .expect("built-in config should validate")
}

fn app(value: serde_json::Value) -> ApplicationRecord {
    serde_json::from_value(value).expect("record should parse")
}

#[test]
fn documented_reviewed_tooled_application_is_perfect() {
    let mut record = app(serde_json::json!({
        "description": "d", "owner": "o", "repoUrl": "r", "language": "l",
        "framework": "f", "serverEnvironment": "s", "authProfiles": "a", "dataTypes": "PHI",
        "facing": "Partner",
        "sastTool": "Checkmarx", "sastIntegrationLevel": 4,
        "dastTool": "Invicti", "dastIntegrationLevel": 4,
        "appFirewallTool": "AWS WAF", "appFirewallIntegrationLevel": 4,
        "apiSecurityNA": true
    }));
    record.metadata_last_reviewed = Some(now() - Duration::days(10));
    assert_eq!(
        engine().compute_score_at(&record, now()),
        ScoreResult::new(50, 50)
    );
}

#[test]
fn missing_tools_and_stale_review_degrade_without_errors() {
    let record = app(serde_json::json!({
        "description": "d", "owner": "o", "repoUrl": null, "language": "l",
        "metadataLastReviewed": "2025-01-01",
        "dataTypes": "PII,,",
        "sastTool": "SonarQube", "sastIntegrationLevel": 3,
        "dastTool": null, "dastIntegrationLevel": 4,
        "apiSecurityNA": false
    }));
    let breakdown = engine().breakdown_at(&record, now());
    // 4 of 8 fields, stale review
    assert_eq!(breakdown.result.knowledge_score, 20);
    // sast 0.8 of one category out of four
    assert_eq!(breakdown.result.tool_score, 10);
    assert_eq!(breakdown.result.total_score, 30);
    assert!(!breakdown.used_fallback());
}

#[test]
fn raising_exposure_never_moves_the_tool_score() {
    let engine = engine();
    let base = app(serde_json::json!({
        "sastTool": "Semgrep", "sastIntegrationLevel": 2,
        "appFirewallTool": "ModSecurity", "appFirewallIntegrationLevel": 3
    }));
    let expected = engine.compute_score_at(&base, now()).tool_score;

    for (facing, data_types) in [
        ("Internal", "Public"),
        ("Partner", "Confidential"),
        ("External", "PII, PCI, Credentials"),
    ] {
        let mut record = base.clone();
        record.facing = Some(facing.to_string());
        record.data_types = Some(data_types.to_string());
        assert_eq!(engine.compute_score_at(&record, now()).tool_score, expected);
    }
}

#[test]
fn compute_score_uses_wall_clock() {
    let mut record = ApplicationRecord {
        description: Some("d".to_string()),
        ..ApplicationRecord::default()
    };
    record.metadata_last_reviewed = Some(Utc::now() - Duration::days(1));
    assert_eq!(engine().compute_score(&record).knowledge_score, 15);
}
