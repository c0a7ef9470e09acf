//! Single simulation run

use super::BacktestError;
use crate::config::Config;
use crate::engine::{self, AggregateReport, ExecutionResult, MarketObservation, Order, VwapPoint};
use crate::market::MarketGenerator;
use crate::orders::OrderGenerator;
use crate::telemetry;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Inputs and outputs of one run, exportable for plotting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub seed: u64,
    pub execution_interval: u64,
    pub window_length: u64,
    pub observations: Vec<MarketObservation>,
    pub orders: Vec<Order>,
    pub vwap_series: Vec<VwapPoint>,
    pub results: Vec<ExecutionResult>,
    pub report: AggregateReport,
}

/// Use the configured seed, or draw one and log it for replay
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random();
            tracing::info!(seed, "No seed configured, drew one from entropy");
            seed
        }
    }
}

/// One generate-then-evaluate pass
pub struct SimulationRun;

impl SimulationRun {
    /// Execute a run with a deterministic RNG seeded from `seed`
    pub fn execute(config: &Config, seed: u64) -> Result<RunReport, BacktestError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let observations = MarketGenerator::new(&config.market).generate(&mut rng)?;
        let orders = OrderGenerator::new(&config.orders).generate(
            &mut rng,
            config.market.time_periods,
            config.engine.execution_interval,
        )?;

        let evaluation = engine::evaluate(
            &observations,
            &orders,
            config.engine.window_length,
            config.engine.execution_interval,
        )?;

        for failed in &evaluation.report.failed {
            tracing::warn!(order_id = %failed.order_id, reason = %failed.reason, "Order excluded from totals");
        }
        telemetry::record_results(&evaluation.results);
        telemetry::record_run(&evaluation.report);
        tracing::debug!(
            seed,
            orders = orders.len(),
            total_execution_cost = evaluation.report.totals.total_execution_cost,
            total_slippage = evaluation.report.totals.total_slippage,
            "Run complete"
        );

        Ok(RunReport {
            seed,
            execution_interval: config.engine.execution_interval,
            window_length: config.engine.window_length,
            observations,
            orders,
            vwap_series: evaluation.vwap_series,
            results: evaluation.results,
            report: evaluation.report,
        })
    }
}
