//! Application security scoring engine.
//!
//! Turns an application's catalog metadata into a knowledge sharing score,
//! a risk-weighted tool usage score, and their total.

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod record;
pub mod report;
pub mod telemetry;
pub mod types;

pub use engine::ScoringEngine;
pub use error::{Result, ScoreError};
pub use types::application::{ApplicationRecord, ToolCategory};
pub use types::config::ScoringConfig;
pub use types::scoring::{ScoreBreakdown, ScoreResult};
