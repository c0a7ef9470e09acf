//! CLI interface for venue-tca
//!
//! Provides subcommands for:
//! - `run`: One simulation with a per-order report
//! - `batch`: Monte-Carlo averaging over many runs
//! - `config`: Show the effective configuration

mod batch;
mod run;

pub use batch::BatchArgs;
pub use run::RunArgs;

use crate::config::Config;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "venue-tca")]
#[command(about = "Execution cost and slippage against a multi-venue VWAP benchmark")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one simulation and report every order
    Run(RunArgs),
    /// Average totals over many independent runs
    Batch(BatchArgs),
    /// Show the effective configuration
    Config,
}

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Flags that override the configuration file
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Execution interval in timestamps
    #[arg(long)]
    pub interval: Option<u64>,

    /// VWAP trailing window in timestamps
    #[arg(long)]
    pub window: Option<u64>,

    /// Number of orders per run
    #[arg(long)]
    pub orders: Option<usize>,

    /// Number of timestamps to generate
    #[arg(long)]
    pub periods: Option<u64>,

    /// Number of venues
    #[arg(long)]
    pub venues: Option<u32>,
}

impl Overrides {
    /// Apply any flags that were given
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.batch.seed = Some(seed);
        }
        if let Some(interval) = self.interval {
            config.engine.execution_interval = interval;
        }
        if let Some(window) = self.window {
            config.engine.window_length = window;
        }
        if let Some(orders) = self.orders {
            config.orders.num_orders = orders;
        }
        if let Some(periods) = self.periods {
            config.market.time_periods = periods;
        }
        if let Some(venues) = self.venues {
            config.market.num_venues = venues;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "venue-tca", "run", "--seed", "24", "--interval", "3", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.overrides.seed, Some(24));
                assert_eq!(args.overrides.interval, Some(3));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.config, "config.toml");
    }

    #[test]
    fn test_parse_batch() {
        let cli =
            Cli::try_parse_from(["venue-tca", "-c", "x.toml", "batch", "--runs", "10"]).unwrap();
        assert_eq!(cli.config, "x.toml");
        assert!(matches!(cli.command, Commands::Batch(ref a) if a.runs == Some(10)));
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        let overrides = Overrides {
            seed: Some(1),
            window: Some(8),
            venues: Some(5),
            ..Overrides::default()
        };
        overrides.apply(&mut config);

        assert_eq!(config.batch.seed, Some(1));
        assert_eq!(config.engine.window_length, 8);
        assert_eq!(config.market.num_venues, 5);
        assert_eq!(config.engine.execution_interval, 10);
    }
}
