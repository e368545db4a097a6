pub mod knowledge;
pub mod risk;
pub mod tools;

use crate::error::Result;
use crate::types::application::ApplicationRecord;
use crate::types::config::ScoringConfig;
use crate::types::scoring::{ScoreBreakdown, ScoreResult};
use chrono::{DateTime, Utc};
use tracing::info;

/// Pure scoring facade over an immutable, validated configuration.
///
/// Holds no mutable state, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn compute_score(&self, app: &ApplicationRecord) -> ScoreResult {
        self.compute_score_at(app, Utc::now())
    }

    pub fn compute_score_at(&self, app: &ApplicationRecord, now: DateTime<Utc>) -> ScoreResult {
        ScoreResult::new(
            knowledge::knowledge_score(app, now),
            tools::tool_usage_score(app, &self.config),
        )
    }

    pub fn breakdown_at(&self, app: &ApplicationRecord, now: DateTime<Utc>) -> ScoreBreakdown {
        let knowledge = knowledge::knowledge_breakdown(app, now);
        let tools = tools::tool_breakdown(app, &self.config);
        let result = ScoreResult::new(knowledge.score, tools.score);
        info!(
            application = %app.display_name(),
            knowledge = result.knowledge_score,
            tools = result.tool_score,
            total = result.total_score,
            "scored application"
        );
        ScoreBreakdown {
            result,
            knowledge,
            tools,
        }
    }
}
