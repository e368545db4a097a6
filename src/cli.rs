use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "appsec-score",
    version,
    about = "Risk-weighted security scoring for application catalogs"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every application record found at a path
    Score(ScoreCommand),
    /// Load and validate a scoring config
    CheckConfig(CheckConfigCommand),
    /// Print the built-in scoring config
    Defaults,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file (object or array) or directory of JSON files
    pub path: PathBuf,
    /// Scoring config (TOML or JSON); built-in tables when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Config merged on top of the base tables
    #[arg(long)]
    pub overlay: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Evaluate review freshness as of this RFC 3339 timestamp or date
    #[arg(long)]
    pub as_of: Option<String>,
    /// Append one audit record per application to this JSON lines file
    #[arg(long)]
    pub record: Option<PathBuf>,
    /// Exit with status 2 when any total score falls below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_total: Option<u8>,
    /// List lowest totals first
    #[arg(long)]
    pub sort: bool,
}

#[derive(Args)]
pub struct CheckConfigCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub overlay: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
