use crate::types::application::ToolCategory;
use crate::types::config::ToolTier;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Each half of the total score is worth this many points.
pub const HALF_SCORE: f64 = 50.0;

/// Integer score handed back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub knowledge_score: u8,
    pub tool_score: u8,
    pub total_score: u8,
}

impl ScoreResult {
    /// Both halves are at most 50.
    pub fn new(knowledge_score: u8, tool_score: u8) -> Self {
        debug_assert!(
            knowledge_score <= 50 && tool_score <= 50,
            "half scores must be at most 50 (got {knowledge_score} and {tool_score})"
        );
        Self {
            knowledge_score,
            tool_score,
            total_score: knowledge_score + tool_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeBreakdown {
    pub fields_filled: usize,
    pub fields_total: usize,
    pub missing_fields: Vec<&'static str>,
    pub completeness: f64,
    pub freshness: f64,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryStatus {
    NotApplicable,
    Missing,
    Scored {
        tool: String,
        tier: ToolTier,
        integration_level: i64,
        integration_weight: f64,
        tool_weight: f64,
        level_known: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: ToolCategory,
    pub max_points: f64,
    pub achieved_points: f64,
    #[serde(flatten)]
    pub status: CategoryStatus,
}

impl CategoryBreakdown {
    /// True when a fallback weight stood in for an unknown tool or level.
    pub fn used_fallback(&self) -> bool {
        matches!(
            self.status,
            CategoryStatus::Scored {
                tier: ToolTier::Other,
                ..
            } | CategoryStatus::Scored {
                level_known: false,
                ..
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolBreakdown {
    pub risk_weight: f64,
    pub categories: Vec<CategoryBreakdown>,
    pub total_possible: f64,
    pub total_achieved: f64,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub result: ScoreResult,
    pub knowledge: KnowledgeBreakdown,
    pub tools: ToolBreakdown,
}

impl ScoreBreakdown {
    pub fn used_fallback(&self) -> bool {
        self.tools.categories.iter().any(CategoryBreakdown::used_fallback)
    }
}

/// Rounds a half-score to an integer in `0..=50`, half away from zero.
pub(crate) fn round_half_score(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, HALF_SCORE) as u8
}
