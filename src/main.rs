mod cli;

use appsec_score::error::ScoreError;
use appsec_score::record::{self, ScoreRecord};
use appsec_score::report::{self, OutputFormat};
use appsec_score::types::application::parse_timestamp;
use appsec_score::types::config::ScoringConfig;
use appsec_score::types::report::{ReportEntry, ScoreReport};
use appsec_score::{config, input, telemetry, ScoringEngine};
use chrono::Utc;
use clap::Parser;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = config::load_config(cmd.config.as_deref(), cmd.overlay.as_deref())?;
            let engine = ScoringEngine::new(loaded)?;
            let fingerprint = engine.config().fingerprint()?;

            let now = match &cmd.as_of {
                Some(value) => parse_timestamp(value)
                    .ok_or_else(|| ScoreError::InvalidTimestamp(value.clone()))?,
                None => Utc::now(),
            };

            let applications = input::load_applications(&cmd.path)?;
            let entries = applications
                .iter()
                .map(|loaded| ReportEntry {
                    application: loaded.record.display_name(),
                    source: loaded.source.clone(),
                    breakdown: engine.breakdown_at(&loaded.record, now),
                })
                .collect::<Vec<_>>();

            if let Some(path) = &cmd.record {
                let records = applications
                    .iter()
                    .zip(&entries)
                    .map(|(loaded, entry)| {
                        ScoreRecord::new(&loaded.record, entry.breakdown.result, now, &fingerprint)
                    })
                    .collect::<Vec<_>>();
                record::append_records(path, &records)?;
                info!(count = records.len(), path = %path.display(), "appended score records");
            }

            let mut score_report = ScoreReport {
                generated_at: now,
                config_fingerprint: fingerprint,
                entries,
            };
            if cmd.sort {
                score_report.sort_by_total();
            }

            let output_format = match cmd.format {
                cli::ReportFormat::Json => OutputFormat::Json,
                cli::ReportFormat::Md => OutputFormat::Md,
            };
            let rendered = report::render(&score_report, output_format)?;
            println!("{rendered}");

            let below_minimum = cmd
                .min_total
                .map(|minimum| {
                    score_report
                        .entries
                        .iter()
                        .filter(|entry| entry.breakdown.result.total_score < minimum)
                        .map(|entry| entry.application.clone())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            let with_fallbacks = score_report
                .entries
                .iter()
                .filter(|entry| entry.breakdown.used_fallback())
                .map(|entry| entry.application.clone())
                .collect::<Vec<_>>();

            if !with_fallbacks.is_empty() {
                eprintln!(
                    "warning: fallback weights applied for unknown tools or integration levels: {}",
                    with_fallbacks.join(", ")
                );
            }

            if let Some(minimum) = cmd.min_total.filter(|_| !below_minimum.is_empty()) {
                eprintln!(
                    "blocking: total score below {minimum}: {}",
                    below_minimum.join(", ")
                );
                Ok(exit_code::BLOCKING)
            } else if !with_fallbacks.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::CheckConfig(cmd) => {
            let loaded = config::load_config(Some(&cmd.path), cmd.overlay.as_deref())?;
            println!(
                "config ok: {} integration levels, {} managed tools, {} approved unmanaged tools, {} facing factors, {} data type factors",
                loaded.integration_levels.len(),
                loaded.tool_quality.managed.len(),
                loaded.tool_quality.approved_unmanaged.len(),
                loaded.risk_factors.facing.len(),
                loaded.risk_factors.data_types.len()
            );
            println!("fingerprint: {}", loaded.fingerprint()?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Defaults => {
            print!("{}", ScoringConfig::builtin()?.to_toml()?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
