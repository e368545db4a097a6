use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Security-tool domains scored by the tool usage half of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolCategory {
    Sast,
    Dast,
    AppFirewall,
    ApiSecurity,
}

impl ToolCategory {
    /// Fixed iteration order used by the tool usage scorer.
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::Sast,
        ToolCategory::Dast,
        ToolCategory::AppFirewall,
        ToolCategory::ApiSecurity,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ToolCategory::Sast => "sast",
            ToolCategory::Dast => "dast",
            ToolCategory::AppFirewall => "appFirewall",
            ToolCategory::ApiSecurity => "apiSecurity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolCategory::Sast => "SAST",
            ToolCategory::Dast => "DAST",
            ToolCategory::AppFirewall => "Application Firewall",
            ToolCategory::ApiSecurity => "API Security",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApplicationId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationId::Number(id) => write!(f, "{id}"),
            ApplicationId::Text(id) => f.write_str(id),
        }
    }
}

/// Snapshot of one catalog application as handed over by the persistence layer.
///
/// Every field is optional; absent and `null` values are both read as `None`.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(default)]
    pub id: Option<ApplicationId>,
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub server_environment: Option<String>,
    #[serde(default)]
    pub auth_profiles: Option<String>,
    #[serde(default)]
    pub data_types: Option<String>,
    #[serde(default, deserialize_with = "deserialize_review_timestamp")]
    pub metadata_last_reviewed: Option<DateTime<Utc>>,

    #[serde(default)]
    pub facing: Option<String>,

    #[serde(default)]
    pub sast_tool: Option<String>,
    #[serde(default)]
    pub sast_integration_level: Option<i64>,
    #[serde(default)]
    pub dast_tool: Option<String>,
    #[serde(default)]
    pub dast_integration_level: Option<i64>,
    #[serde(default)]
    pub app_firewall_tool: Option<String>,
    #[serde(default)]
    pub app_firewall_integration_level: Option<i64>,
    #[serde(default)]
    pub api_security_tool: Option<String>,
    #[serde(default)]
    pub api_security_integration_level: Option<i64>,
    #[serde(default, rename = "apiSecurityNA")]
    pub api_security_na: Option<bool>,
}

impl ApplicationRecord {
    pub fn tool(&self, category: ToolCategory) -> Option<&str> {
        let tool = match category {
            ToolCategory::Sast => &self.sast_tool,
            ToolCategory::Dast => &self.dast_tool,
            ToolCategory::AppFirewall => &self.app_firewall_tool,
            ToolCategory::ApiSecurity => &self.api_security_tool,
        };
        tool.as_deref()
    }

    pub fn integration_level(&self, category: ToolCategory) -> Option<i64> {
        match category {
            ToolCategory::Sast => self.sast_integration_level,
            ToolCategory::Dast => self.dast_integration_level,
            ToolCategory::AppFirewall => self.app_firewall_integration_level,
            ToolCategory::ApiSecurity => self.api_security_integration_level,
        }
    }

    /// Only API security can be marked not applicable.
    pub fn is_not_applicable(&self, category: ToolCategory) -> bool {
        matches!(category, ToolCategory::ApiSecurity) && self.api_security_na == Some(true)
    }

    /// Comma-separated `dataTypes` tags, trimmed, empty entries dropped.
    pub fn data_type_tags(&self) -> impl Iterator<Item = &str> {
        self.data_types
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Human readable label for reports: name, then id, then a fallback.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => format!("application {id}"),
            _ => "unnamed application".to_string(),
        }
    }
}

fn deserialize_review_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("unrecognized metadataLastReviewed value: {value}"))
        }),
    }
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
