//! Telemetry module
//!
//! Logging and counters

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{record_results, record_run, ORDERS_FAILED, ORDERS_SIMULATED, RUNS_COMPLETED};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)
}
