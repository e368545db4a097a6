use crate::error::{Result, ScoreError};
use crate::types::application::{ApplicationId, ApplicationRecord};
use crate::types::scoring::ScoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// One immutable audit-trail row per score computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub application_id: Option<ApplicationId>,
    pub application_name: Option<String>,
    pub knowledge_score: u8,
    pub tool_score: u8,
    pub total_score: u8,
    pub computed_at: DateTime<Utc>,
    pub config_fingerprint: String,
    pub engine_version: String,
}

impl ScoreRecord {
    pub fn new(
        app: &ApplicationRecord,
        result: ScoreResult,
        computed_at: DateTime<Utc>,
        config_fingerprint: &str,
    ) -> Self {
        Self {
            application_id: app.id.clone(),
            application_name: app.name.clone(),
            knowledge_score: result.knowledge_score,
            tool_score: result.tool_score,
            total_score: result.total_score,
            computed_at,
            config_fingerprint: config_fingerprint.to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Appends records as JSON lines. Existing lines are never touched.
pub fn append_records(path: &Path, records: &[ScoreRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ScoreError::Io)?;
    }
    let mut lines = String::new();
    for record in records {
        lines.push_str(&serde_json::to_string(record)?);
        lines.push('\n');
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(ScoreError::Io)?;
    file.write_all(lines.as_bytes()).map_err(ScoreError::Io)?;
    Ok(())
}
