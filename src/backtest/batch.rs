//! Monte-Carlo batch driver
//!
//! Runs share no state, so each one is executed on the blocking pool and
//! the totals are averaged once all have finished.

use super::{resolve_seed, BacktestError, SimulationRun};
use crate::config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Averages of per-run totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: usize,
    pub base_seed: u64,
    pub average_execution_cost: f64,
    pub average_slippage: f64,
    /// Orders excluded from totals, summed over all runs
    pub failed_orders: usize,
}

impl BatchSummary {
    /// Build a summary from per-run (total cost, total slippage, failures)
    fn from_totals(base_seed: u64, totals: &[(f64, f64, usize)]) -> Self {
        let runs = totals.len();
        let (cost, slippage, failed) = totals
            .iter()
            .fold((0.0, 0.0, 0), |(c, s, f), (rc, rs, rf)| (c + rc, s + rs, f + rf));
        Self {
            runs,
            base_seed,
            average_execution_cost: cost / runs as f64,
            average_slippage: slippage / runs as f64,
            failed_orders: failed,
        }
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               MONTE-CARLO RESULTS
══════════════════════════════════════════════════════
Runs:                       {}
Base Seed:                  {}
Average Total Exec Cost:    {:.2}
Average Total Slippage:     {:.2}
Failed Orders (all runs):   {}
══════════════════════════════════════════════════════
"#,
            self.runs,
            self.base_seed,
            self.average_execution_cost,
            self.average_slippage,
            self.failed_orders,
        )
    }
}

/// Repeats independent simulation runs and averages their totals
pub struct MonteCarlo {
    config: Arc<Config>,
}

impl MonteCarlo {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Execute `batch.runs` runs seeded `base_seed + i`
    pub async fn run(&self) -> Result<BatchSummary, BacktestError> {
        let runs = self.config.batch.runs;
        if runs == 0 {
            return Err(ConfigError::NotPositive("runs").into());
        }
        self.config.validate()?;
        let base_seed = resolve_seed(self.config.batch.seed);
        tracing::info!(runs, base_seed, "Starting Monte-Carlo batch");

        let mut tasks = JoinSet::new();
        for run in 0..runs {
            let config = Arc::clone(&self.config);
            let seed = base_seed.wrapping_add(run as u64);
            tasks.spawn_blocking(move || (run, SimulationRun::execute(&config, seed)));
        }

        let mut totals = vec![(0.0, 0.0, 0usize); runs];
        while let Some(joined) = tasks.join_next().await {
            let (run, outcome) = joined.map_err(|e| BacktestError::Join(e.to_string()))?;
            let report = outcome?.report;
            totals[run] = (
                report.totals.total_execution_cost,
                report.totals.total_slippage,
                report.failed.len(),
            );
        }

        // summed in run order so the average does not depend on completion order
        let summary = BatchSummary::from_totals(base_seed, &totals);
        tracing::info!(
            runs,
            average_execution_cost = summary.average_execution_cost,
            average_slippage = summary.average_slippage,
            "Monte-Carlo batch complete"
        );
        Ok(summary)
    }
}
