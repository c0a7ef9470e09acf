//! Run reporting and export

use super::RunReport;
use crate::engine::{AggregateReport, ExecutionResult};
use serde::Serialize;
use std::path::Path;

/// Per-order lines followed by cumulative totals
pub fn format_run_report(run: &RunReport) -> String {
    let mut out: String = run.results.iter().map(format_order).collect();

    let totals = &run.report.totals;
    out.push_str(&format!(
        "\nCumulative Metrics:\n  Total Execution Cost: {:.2}\n  Total Slippage: {:.2}\n",
        totals.total_execution_cost, totals.total_slippage
    ));
    if !run.report.failed.is_empty() {
        out.push_str(&format!("  Failed Orders: {}\n", run.report.failed.len()));
    }
    out
}

fn format_order(result: &ExecutionResult) -> String {
    let header = format!(
        "{} - Size: {} placed at {}:\n",
        result.order_id, result.size, result.placement_time
    );
    let body = match (&result.execution_cost, &result.slippage) {
        (Ok(cost), Ok(slippage)) => {
            format!("  Execution Cost: {cost:.2}\n  Slippage: {slippage:.2}\n")
        }
        _ => result
            .failure()
            .map(|reason| format!("  Failed: {reason}\n"))
            .unwrap_or_default(),
    };
    header + &body
}

/// Per-order results and totals, without the raw market data
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    seed: u64,
    results: &'a [ExecutionResult],
    report: &'a AggregateReport,
}

/// JSON counterpart of [`format_run_report`]
pub fn format_run_json(run: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RunSummary {
        seed: run.seed,
        results: &run.results,
        report: &run.report,
    })
}

/// Write any report as pretty JSON
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path.as_ref(), json)?;
    tracing::info!(path = %path.as_ref().display(), "Report exported");
    Ok(())
}
