//! Monte-Carlo batch command

use super::{OutputFormat, Overrides};
use crate::backtest::MonteCarlo;
use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub overrides: Overrides,

    /// Number of independent runs
    #[arg(long)]
    pub runs: Option<usize>,

    /// Output format: table or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl BatchArgs {
    pub async fn execute(&self, mut config: Config) -> anyhow::Result<()> {
        self.overrides.apply(&mut config);
        if let Some(runs) = self.runs {
            config.batch.runs = runs;
        }

        let summary = MonteCarlo::new(config).run().await?;

        match self.format {
            OutputFormat::Table => print!("{}", summary.format_table()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        }
        Ok(())
    }
}
