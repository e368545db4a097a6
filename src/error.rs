use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("input path does not exist: {0}")]
    InputNotFound(String),

    #[error("application input parse error: {0}")]
    InputParse(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml render error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
