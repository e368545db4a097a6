use crate::types::scoring::ScoreBreakdown;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub application: String,
    pub source: PathBuf,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub config_fingerprint: String,
    pub entries: Vec<ReportEntry>,
}

impl ScoreReport {
    pub fn average_total(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: u32 = self
            .entries
            .iter()
            .map(|entry| u32::from(entry.breakdown.result.total_score))
            .sum();
        Some(f64::from(sum) / self.entries.len() as f64)
    }

    /// Entries ordered lowest total first, for triage.
    pub fn sort_by_total(&mut self) {
        self.entries.sort_by(|a, b| {
            a.breakdown
                .result
                .total_score
                .cmp(&b.breakdown.result.total_score)
                .then_with(|| a.application.cmp(&b.application))
        });
    }
}
