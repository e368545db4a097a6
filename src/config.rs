use crate::error::{Result, ScoreError};
use crate::types::config::{ScoringConfig, BUILTIN_CONFIG};
use std::path::Path;
use toml::map::Map;
use toml::Value;
use tracing::debug;

/// Loads the scoring tables.
///
/// Without a base file the built-in tables are used. An overlay file is merged
/// key by key on top of the base before typing, then the result is validated.
pub fn load_config(base: Option<&Path>, overlay: Option<&Path>) -> Result<ScoringConfig> {
    let mut merged = Value::Table(Map::new());
    match base {
        Some(path) => {
            if !path.exists() {
                return Err(ScoreError::ConfigNotFound(path.display().to_string()));
            }
            merge_toml(&mut merged, read_config_value(path)?);
        }
        None => {
            debug!("no scoring config given, using built-in tables");
            let builtin = toml::from_str(BUILTIN_CONFIG)
                .map_err(|e| ScoreError::ConfigParse(format!("built-in config: {e}")))?;
            merge_toml(&mut merged, builtin);
        }
    }
    if let Some(path) = overlay {
        if !path.exists() {
            return Err(ScoreError::ConfigNotFound(path.display().to_string()));
        }
        merge_toml(&mut merged, read_config_value(path)?);
    }

    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Reads a TOML or JSON (by `.json` extension) config file as a TOML value.
fn read_config_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let json: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))?;
        Value::try_from(json)
            .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
    } else {
        toml::from_str(&content)
            .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
    }
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
