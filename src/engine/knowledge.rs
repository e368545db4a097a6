use crate::types::application::ApplicationRecord;
use crate::types::scoring::{round_half_score, KnowledgeBreakdown};
use chrono::{DateTime, Months, Utc};

pub const COMPLETENESS_POINTS: f64 = 40.0;
pub const FRESHNESS_POINTS: f64 = 10.0;
pub const FRESHNESS_WINDOW_MONTHS: u32 = 6;

/// Metadata fields that count toward completeness, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeField {
    Description,
    Owner,
    RepoUrl,
    Language,
    Framework,
    ServerEnvironment,
    AuthProfiles,
    DataTypes,
}

impl KnowledgeField {
    pub const ALL: [KnowledgeField; 8] = [
        KnowledgeField::Description,
        KnowledgeField::Owner,
        KnowledgeField::RepoUrl,
        KnowledgeField::Language,
        KnowledgeField::Framework,
        KnowledgeField::ServerEnvironment,
        KnowledgeField::AuthProfiles,
        KnowledgeField::DataTypes,
    ];

    pub fn key(self) -> &'static str {
        match self {
            KnowledgeField::Description => "description",
            KnowledgeField::Owner => "owner",
            KnowledgeField::RepoUrl => "repoUrl",
            KnowledgeField::Language => "language",
            KnowledgeField::Framework => "framework",
            KnowledgeField::ServerEnvironment => "serverEnvironment",
            KnowledgeField::AuthProfiles => "authProfiles",
            KnowledgeField::DataTypes => "dataTypes",
        }
    }

    fn value(self, app: &ApplicationRecord) -> Option<&str> {
        let value = match self {
            KnowledgeField::Description => &app.description,
            KnowledgeField::Owner => &app.owner,
            KnowledgeField::RepoUrl => &app.repo_url,
            KnowledgeField::Language => &app.language,
            KnowledgeField::Framework => &app.framework,
            KnowledgeField::ServerEnvironment => &app.server_environment,
            KnowledgeField::AuthProfiles => &app.auth_profiles,
            KnowledgeField::DataTypes => &app.data_types,
        };
        value.as_deref()
    }

    /// All knowledge fields are text: filled means present and non-empty.
    /// Whitespace-only values still count.
    pub fn is_filled(self, app: &ApplicationRecord) -> bool {
        self.value(app).is_some_and(|value| !value.is_empty())
    }
}

/// Cliff function: full credit inside the window, nothing outside it.
pub fn is_fresh(last_reviewed: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    let Some(reviewed) = last_reviewed else {
        return false;
    };
    now.checked_sub_months(Months::new(FRESHNESS_WINDOW_MONTHS))
        .is_some_and(|cutoff| reviewed > cutoff)
}

pub fn knowledge_breakdown(app: &ApplicationRecord, now: DateTime<Utc>) -> KnowledgeBreakdown {
    let missing_fields = KnowledgeField::ALL
        .iter()
        .filter(|field| !field.is_filled(app))
        .map(|field| field.key())
        .collect::<Vec<_>>();
    let fields_total = KnowledgeField::ALL.len();
    let fields_filled = fields_total - missing_fields.len();

    let completeness = (fields_filled as f64 / fields_total as f64) * COMPLETENESS_POINTS;
    let freshness = if is_fresh(app.metadata_last_reviewed, now) {
        FRESHNESS_POINTS
    } else {
        0.0
    };

    KnowledgeBreakdown {
        fields_filled,
        fields_total,
        missing_fields,
        completeness,
        freshness,
        last_reviewed: app.metadata_last_reviewed,
        // rounded once, on the sum
        score: round_half_score(completeness + freshness),
    }
}

pub fn knowledge_score(app: &ApplicationRecord, now: DateTime<Utc>) -> u8 {
    knowledge_breakdown(app, now).score
}
