//! Single run command

use super::{OutputFormat, Overrides};
use crate::backtest::{
    format_run_json, format_run_report, resolve_seed, write_json, SimulationRun,
};
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub overrides: Overrides,

    /// Output format: table or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write observations, VWAP series, orders and results as JSON for plotting
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl RunArgs {
    pub fn execute(&self, mut config: Config) -> anyhow::Result<()> {
        self.overrides.apply(&mut config);
        let seed = resolve_seed(config.batch.seed);
        tracing::info!(seed, orders = config.orders.num_orders, "Running simulation");

        let run = SimulationRun::execute(&config, seed)?;

        match self.format {
            OutputFormat::Table => print!("{}", format_run_report(&run)),
            OutputFormat::Json => println!("{}", format_run_json(&run)?),
        }

        if let Some(ref path) = self.export {
            write_json(path, &run)?;
        }
        Ok(())
    }
}
