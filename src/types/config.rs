use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use tracing::warn;

pub const BUILTIN_CONFIG: &str = include_str!("../../config/scoring.toml");
pub const DEFAULT_OTHER_TOOL_WEIGHT: f64 = 0.8;

/// The three scoring tables. Immutable for the lifetime of a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(alias = "integrationLevels")]
    pub integration_levels: BTreeMap<String, IntegrationLevel>,
    #[serde(alias = "toolQuality")]
    pub tool_quality: ToolQuality,
    #[serde(alias = "riskFactors")]
    pub risk_factors: RiskFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationLevel {
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolQuality {
    #[serde(default)]
    pub managed: BTreeMap<String, f64>,
    #[serde(default, alias = "approvedUnmanaged")]
    pub approved_unmanaged: BTreeMap<String, f64>,
    #[serde(default = "default_other_weight")]
    pub other: f64,
}

fn default_other_weight() -> f64 {
    DEFAULT_OTHER_TOOL_WEIGHT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    #[serde(default)]
    pub facing: BTreeMap<String, f64>,
    #[serde(default, alias = "dataTypes")]
    pub data_types: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolTier {
    Managed,
    ApprovedUnmanaged,
    Other,
}

impl ScoringConfig {
    pub fn builtin() -> Result<Self> {
        toml::from_str(BUILTIN_CONFIG)
            .map_err(|e| ScoreError::ConfigParse(format!("built-in config: {e}")))
    }

    /// Weight for an integration level, `None` when the level is not configured.
    pub fn integration_level(&self, level: i64) -> Option<f64> {
        self.integration_levels
            .get(&level.to_string())
            .map(|entry| entry.weight)
    }

    /// Unknown levels count as no meaningful integration.
    pub fn integration_weight(&self, level: i64) -> f64 {
        self.integration_level(level).unwrap_or(0.0)
    }

    /// Managed list first, then approved-unmanaged, then the `other` fallback.
    pub fn tool_quality(&self, tool: &str) -> (ToolTier, f64) {
        if let Some(weight) = self.tool_quality.managed.get(tool) {
            return (ToolTier::Managed, *weight);
        }
        if let Some(weight) = self.tool_quality.approved_unmanaged.get(tool) {
            return (ToolTier::ApprovedUnmanaged, *weight);
        }
        (ToolTier::Other, self.tool_quality.other)
    }

    pub fn facing_multiplier(&self, facing: &str) -> Option<f64> {
        self.risk_factors.facing.get(facing).copied()
    }

    pub fn data_type_multiplier(&self, tag: &str) -> Option<f64> {
        self.risk_factors.data_types.get(tag).copied()
    }

    /// SHA-256 over the canonical JSON form of the tables.
    pub fn fingerprint(&self) -> Result<String> {
        let canonical = serde_json::to_vec(self)?;
        let digest = Sha256::digest(&canonical);
        Ok(format!("{digest:x}"))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects tables whose shape cannot be scored. Unusual tool weights only
    /// warn, and a tool listed in both tiers resolves to `managed`.
    pub fn validate(&self) -> Result<()> {
        if self.integration_levels.is_empty() {
            warn!("integration_levels is empty, every integration level weighs 0");
        }
        for (key, level) in &self.integration_levels {
            if key.trim().parse::<i64>().is_err() || key.trim() != key {
                return Err(ScoreError::InvalidConfig(format!(
                    "integration_levels key '{key}' is not an integer level"
                )));
            }
            if !(0.0..=1.0).contains(&level.weight) {
                return Err(ScoreError::InvalidConfig(format!(
                    "integration_levels.{key}.weight must be between 0.0 and 1.0 (found {})",
                    level.weight
                )));
            }
        }

        warn_unusual_tool_weight("tool_quality.other", self.tool_quality.other);
        for (stage, tools) in [
            ("managed", &self.tool_quality.managed),
            ("approved_unmanaged", &self.tool_quality.approved_unmanaged),
        ] {
            for (tool, weight) in tools {
                if tool.trim().is_empty() {
                    return Err(ScoreError::InvalidConfig(format!(
                        "tool_quality.{stage} entries must be non-empty tool names"
                    )));
                }
                warn_unusual_tool_weight(&format!("tool_quality.{stage}.{tool}"), *weight);
            }
        }

        for (table, factors) in [
            ("facing", &self.risk_factors.facing),
            ("data_types", &self.risk_factors.data_types),
        ] {
            for (name, multiplier) in factors {
                if name.trim().is_empty() {
                    return Err(ScoreError::InvalidConfig(format!(
                        "risk_factors.{table} entries must be non-empty names"
                    )));
                }
                if !multiplier.is_finite() || *multiplier <= 0.0 {
                    return Err(ScoreError::InvalidConfig(format!(
                        "risk_factors.{table}.{name} must be a positive finite multiplier"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn warn_unusual_tool_weight(path: &str, weight: f64) {
    if !(0.0..=1.0).contains(&weight) {
        warn!(path, weight, "tool weight outside 0.0..=1.0");
    }
}
