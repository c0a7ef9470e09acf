//! Backtesting module
//!
//! Generates a synthetic market and order list, evaluates them through the
//! engine and repeats the process for Monte-Carlo averaging.

mod analytics;
mod batch;
mod simulator;

pub use analytics::{format_run_json, format_run_report, write_json};
pub use batch::{BatchSummary, MonteCarlo};
pub use simulator::{resolve_seed, RunReport, SimulationRun};

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::market::GeneratorError;
use thiserror::Error;

/// Errors that abort a whole run (per-order failures never do)
#[derive(Debug, Error)]
pub enum BacktestError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("data generation failed: {0}")]
    Generator(#[from] GeneratorError),
    #[error("engine setup failed: {0}")]
    Engine(#[from] EngineError),
    #[error("simulation task did not complete: {0}")]
    Join(String),
}
