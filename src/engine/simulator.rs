//! Per-order execution simulation
//!
//! An order placed at `start` is worked over `[start, start + interval)`.
//! The expected price is the best price seen on any venue inside that
//! window; the actual price blends it with the best price at the settlement
//! instant `end` when the market has data there.

use super::types::{
    EngineError, ExecutionError, ExecutionResult, MarketObservation, Order, Timestamp, VwapPoint,
};
use std::collections::BTreeMap;

/// Best (lowest) price per timestamp across all venues
#[derive(Debug, Clone, Default)]
pub struct MarketIndex {
    best_price: BTreeMap<Timestamp, f64>,
}

impl MarketIndex {
    /// Index observations by timestamp, keeping the cheapest venue
    pub fn build(observations: &[MarketObservation]) -> Self {
        let mut best_price: BTreeMap<Timestamp, f64> = BTreeMap::new();
        for obs in observations {
            best_price
                .entry(obs.timestamp)
                .and_modify(|p| *p = p.min(obs.price))
                .or_insert(obs.price);
        }
        Self { best_price }
    }

    /// Best price at exactly `timestamp`
    pub fn best_at(&self, timestamp: Timestamp) -> Option<f64> {
        self.best_price.get(&timestamp).copied()
    }

    /// Best price over `[start, end)`
    pub fn best_in(&self, start: Timestamp, end: Timestamp) -> Option<f64> {
        self.best_price
            .range(start..end)
            .map(|(_, p)| *p)
            .reduce(f64::min)
    }
}

/// Reject orders that cannot produce a meaningful window
pub fn validate_order(order: &Order, execution_interval: u64) -> Result<(), ExecutionError> {
    if order.size == 0 {
        return Err(ExecutionError::InvalidOrder(format!(
            "{} has zero size",
            order.order_id
        )));
    }
    if order.placement_time.checked_add(execution_interval).is_none() {
        return Err(ExecutionError::InvalidOrder(format!(
            "{} window end overflows timestamp range (placed at {}, interval {})",
            order.order_id, order.placement_time, execution_interval
        )));
    }
    Ok(())
}

/// Simulates orders against one fixed market and VWAP series
#[derive(Debug, Clone)]
pub struct ExecutionSimulator {
    index: MarketIndex,
    vwap: BTreeMap<Timestamp, Option<f64>>,
    execution_interval: u64,
}

impl ExecutionSimulator {
    /// Build the lookup tables once for a batch of orders
    pub fn new(
        observations: &[MarketObservation],
        vwap_series: &[VwapPoint],
        execution_interval: u64,
    ) -> Result<Self, EngineError> {
        if execution_interval == 0 {
            return Err(EngineError::InvalidParameter {
                name: "execution_interval",
            });
        }
        Ok(Self {
            index: MarketIndex::build(observations),
            vwap: vwap_series.iter().map(|p| (p.timestamp, p.vwap)).collect(),
            execution_interval,
        })
    }

    /// Mean of the defined VWAP points over `[start, end)`
    fn benchmark(&self, start: Timestamp, end: Timestamp) -> Option<f64> {
        let (sum, count) = self
            .vwap
            .range(start..end)
            .filter_map(|(_, v)| *v)
            .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Simulate a single order
    pub fn simulate(&self, order: &Order) -> ExecutionResult {
        if let Err(e) = validate_order(order, self.execution_interval) {
            return ExecutionResult::failed(order, e);
        }
        let start = order.placement_time;
        let end = start + self.execution_interval;

        let Some(expected) = self.index.best_in(start, end) else {
            return ExecutionResult::failed(order, ExecutionError::InsufficientData { start, end });
        };

        let actual = match self.index.best_at(end) {
            Some(settlement) => (expected + settlement) / 2.0,
            None => expected,
        };
        let benchmark = self.benchmark(start, end);

        let execution_cost = benchmark
            .map(|b| actual - b)
            .ok_or(ExecutionError::UndefinedBenchmark { start, end });
        let slippage = expected - actual;

        tracing::debug!(
            order_id = %order.order_id,
            start,
            end,
            expected,
            actual,
            benchmark = ?benchmark,
            "Order simulated"
        );

        ExecutionResult {
            order_id: order.order_id.clone(),
            size: order.size,
            placement_time: start,
            expected_price: Some(expected),
            actual_price: Some(actual),
            benchmark,
            execution_cost,
            slippage: Ok(slippage),
        }
    }

    /// Simulate every order independently, preserving input order
    pub fn simulate_all(&self, orders: &[Order]) -> Vec<ExecutionResult> {
        orders.iter().map(|o| self.simulate(o)).collect()
    }
}
