use crate::error::{Result, ScoreError};
use crate::types::application::ApplicationRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct LoadedApplication {
    pub source: PathBuf,
    pub record: ApplicationRecord,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ApplicationDocument {
    Many(Vec<ApplicationRecord>),
    One(Box<ApplicationRecord>),
}

/// Reads application records from a JSON file, or from every `*.json` file
/// below a directory in path order.
pub fn load_applications(path: &Path) -> Result<Vec<LoadedApplication>> {
    if !path.exists() {
        return Err(ScoreError::InputNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return read_application_file(path);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_json(entry.path()) {
            files.push(entry.into_path());
        }
    }
    if files.is_empty() {
        warn!(path = %path.display(), "no application files found");
    }

    let mut applications = Vec::new();
    for file in files {
        applications.extend(read_application_file(&file)?);
    }
    Ok(applications)
}

fn read_application_file(path: &Path) -> Result<Vec<LoadedApplication>> {
    let content = std::fs::read_to_string(path)?;
    let document: ApplicationDocument = serde_json::from_str(&content)
        .map_err(|e| ScoreError::InputParse(format!("{}: {}", path.display(), e)))?;
    let records = match document {
        ApplicationDocument::Many(records) => records,
        ApplicationDocument::One(record) => vec![*record],
    };
    debug!(path = %path.display(), count = records.len(), "loaded application records");
    Ok(records
        .into_iter()
        .map(|record| LoadedApplication {
            source: path.to_path_buf(),
            record,
        })
        .collect())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
