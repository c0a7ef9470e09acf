//! Reduction of per-order results into totals

use super::types::{AggregateReport, ExecutionResult, FailedOrder};

/// Sums cost and slippage over successful orders
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Aggregate results; failed orders are listed instead of summed
    pub fn aggregate(results: &[ExecutionResult]) -> AggregateReport {
        results
            .iter()
            .fold(AggregateReport::default(), |mut report, result| {
                match (&result.execution_cost, &result.slippage) {
                    (Ok(cost), Ok(slippage)) => {
                        report.totals.total_execution_cost += cost;
                        report.totals.total_slippage += slippage;
                        report.succeeded += 1;
                    }
                    _ => {
                        if let Some(reason) = result.failure() {
                            report.failed.push(FailedOrder {
                                order_id: result.order_id.clone(),
                                reason: reason.clone(),
                            });
                        }
                    }
                }
                report
            })
    }
}

impl AggregateReport {
    /// Combine two partial reports (e.g. from separate chunks of orders)
    pub fn merge(mut self, other: AggregateReport) -> AggregateReport {
        self.totals.total_execution_cost += other.totals.total_execution_cost;
        self.totals.total_slippage += other.totals.total_slippage;
        self.succeeded += other.succeeded;
        self.failed.extend(other.failed);
        self
    }
}
