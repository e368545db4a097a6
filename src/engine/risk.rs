use crate::types::application::ApplicationRecord;
use crate::types::config::ScoringConfig;

pub const BASELINE_RISK_WEIGHT: f64 = 1.0;

/// Highest applicable multiplier across `facing` and every `dataTypes` tag,
/// never below the baseline. Unknown values are ignored.
pub fn risk_weight(app: &ApplicationRecord, config: &ScoringConfig) -> f64 {
    let facing = app
        .facing
        .as_deref()
        .and_then(|facing| config.facing_multiplier(facing));
    let data_types = app
        .data_type_tags()
        .filter_map(|tag| config.data_type_multiplier(tag));

    facing
        .into_iter()
        .chain(data_types)
        .fold(BASELINE_RISK_WEIGHT, f64::max)
}
