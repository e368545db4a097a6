use crate::error::{Result, ScoreError};
use tracing_subscriber::EnvFilter;

/// Default filter for the CLI verbosity flags. `RUST_LOG` overrides it.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs a compact fmt subscriber on stderr so stdout stays parseable.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let level = default_filter(verbose, quiet);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            ScoreError::Telemetry(format!("invalid log filter '{level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ScoreError::Telemetry(e.to_string()))
}
