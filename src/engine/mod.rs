//! Execution metrics engine
//!
//! Rolling VWAP benchmark, per-order execution simulation and the
//! reduction of per-order results into totals. Everything here is a pure
//! function of its inputs.

mod aggregator;
mod simulator;
mod types;
mod vwap;

pub use aggregator::MetricsAggregator;
pub use simulator::{validate_order, ExecutionSimulator, MarketIndex};
pub use types::{
    AggregateMetrics, AggregateReport, EngineError, ExecutionError, ExecutionResult, FailedOrder,
    MarketObservation, Order, OrderId, Timestamp, VenueId, VwapPoint,
};
pub use vwap::{VwapCalculator, DEFAULT_WINDOW_LENGTH};

use serde::{Deserialize, Serialize};

/// Everything the engine derives from one market and one order list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub vwap_series: Vec<VwapPoint>,
    pub results: Vec<ExecutionResult>,
    pub report: AggregateReport,
}

/// Run VWAP, per-order simulation and aggregation in sequence
pub fn evaluate(
    observations: &[MarketObservation],
    orders: &[Order],
    window_length: u64,
    execution_interval: u64,
) -> Result<Evaluation, EngineError> {
    let vwap_series = VwapCalculator::new(window_length)?.compute(observations);
    let simulator = ExecutionSimulator::new(observations, &vwap_series, execution_interval)?;
    let results = simulator.simulate_all(orders);
    let report = MetricsAggregator::aggregate(&results);

    Ok(Evaluation {
        vwap_series,
        results,
        report,
    })
}
