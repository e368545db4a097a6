use crate::engine::risk::risk_weight;
use crate::types::application::{ApplicationRecord, ToolCategory};
use crate::types::config::{ScoringConfig, ToolTier};
use crate::types::scoring::{
    round_half_score, CategoryBreakdown, CategoryStatus, ToolBreakdown, HALF_SCORE,
};
use tracing::debug;

/// Unweighted ceiling of a single category.
pub const CATEGORY_SHARE: f64 = HALF_SCORE / ToolCategory::ALL.len() as f64;

pub fn tool_breakdown(app: &ApplicationRecord, config: &ScoringConfig) -> ToolBreakdown {
    let risk_weight = risk_weight(app, config);

    let categories = ToolCategory::ALL
        .iter()
        .map(|category| evaluate_category(app, config, *category, risk_weight))
        .collect::<Vec<_>>();

    // Every category counts toward the ceiling, filled in or not.
    let total_possible: f64 = categories.iter().map(|category| category.max_points).sum();
    let total_achieved: f64 = categories
        .iter()
        .map(|category| category.achieved_points)
        .sum();

    let score = if total_possible == 0.0 {
        0
    } else {
        round_half_score((total_achieved / total_possible) * HALF_SCORE)
    };

    ToolBreakdown {
        risk_weight,
        categories,
        total_possible,
        total_achieved,
        score,
    }
}

pub fn tool_usage_score(app: &ApplicationRecord, config: &ScoringConfig) -> u8 {
    tool_breakdown(app, config).score
}

fn evaluate_category(
    app: &ApplicationRecord,
    config: &ScoringConfig,
    category: ToolCategory,
    risk_weight: f64,
) -> CategoryBreakdown {
    let max_points = CATEGORY_SHARE * risk_weight;

    if app.is_not_applicable(category) {
        return CategoryBreakdown {
            category,
            max_points,
            achieved_points: max_points,
            status: CategoryStatus::NotApplicable,
        };
    }

    let tool = app.tool(category).filter(|tool| !tool.is_empty());
    let (Some(tool), Some(level)) = (tool, app.integration_level(category)) else {
        return CategoryBreakdown {
            category,
            max_points,
            achieved_points: 0.0,
            status: CategoryStatus::Missing,
        };
    };

    let level_known = config.integration_level(level).is_some();
    if !level_known {
        debug!(%category, integration_level = level, "unknown integration level, using weight 0");
    }
    let integration_weight = config.integration_weight(level);

    let (tier, tool_weight) = config.tool_quality(tool);
    if tier == ToolTier::Other {
        debug!(%category, tool, tool_weight, "tool not in quality lists, using fallback weight");
    }

    CategoryBreakdown {
        category,
        max_points,
        achieved_points: max_points * integration_weight * tool_weight,
        status: CategoryStatus::Scored {
            tool: tool.to_string(),
            tier,
            integration_level: level,
            integration_weight,
            tool_weight,
            level_known,
        },
    }
}
