//! Run counters via the `metrics` facade
//!
//! No recorder is installed by this crate; an embedding program can
//! register one to collect these.

use crate::engine::{AggregateReport, ExecutionResult};

pub const ORDERS_SIMULATED: &str = "venuetca_orders_simulated_total";
pub const ORDERS_FAILED: &str = "venuetca_orders_failed_total";
pub const RUNS_COMPLETED: &str = "venuetca_runs_completed_total";

/// Count simulated orders, labelling failures by reason
pub fn record_results(results: &[ExecutionResult]) {
    ::metrics::counter!(ORDERS_SIMULATED).increment(results.len() as u64);
    for failure in results.iter().filter_map(ExecutionResult::failure) {
        ::metrics::counter!(ORDERS_FAILED, "reason" => failure.kind()).increment(1);
    }
}

/// Count a finished run
pub fn record_run(report: &AggregateReport) {
    ::metrics::counter!(RUNS_COMPLETED).increment(1);
    tracing::trace!(
        metric = RUNS_COMPLETED,
        succeeded = report.succeeded,
        failed = report.failed.len(),
        "Recording run"
    );
}
