//! Configuration types for venue-tca

use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("time_periods ({time_periods}) must exceed execution_interval ({execution_interval})")]
    HorizonTooShort {
        time_periods: u64,
        execution_interval: u64,
    },
    #[error("order size range [{min}, {max}) is empty or includes zero")]
    InvalidSizeRange { min: u64, max: u64 },
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub orders: OrderConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Synthetic market generation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketConfig {
    /// Number of timestamps to generate
    #[serde(default = "default_time_periods")]
    pub time_periods: u64,

    /// Starting level of the baseline random walk
    #[serde(default = "default_start_price")]
    pub start_price: f64,

    /// Standard deviation of each baseline step; venue noise uses 20% of it
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    #[serde(default = "default_num_venues")]
    pub num_venues: u32,

    /// Exclusive upper bound of per-observation volume
    #[serde(default = "default_max_volume")]
    pub max_volume: u64,
}

fn default_time_periods() -> u64 {
    100
}
fn default_start_price() -> f64 {
    100.0
}
fn default_volatility() -> f64 {
    1.0
}
fn default_num_venues() -> u32 {
    3
}
fn default_max_volume() -> u64 {
    1000
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            time_periods: default_time_periods(),
            start_price: default_start_price(),
            volatility: default_volatility(),
            num_venues: default_num_venues(),
            max_volume: default_max_volume(),
        }
    }
}

/// Synthetic order generation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderConfig {
    #[serde(default = "default_num_orders")]
    pub num_orders: usize,

    /// Inclusive lower bound of order size
    #[serde(default = "default_min_size")]
    pub min_size: u64,

    /// Exclusive upper bound of order size
    #[serde(default = "default_max_size")]
    pub max_size: u64,
}

fn default_num_orders() -> usize {
    5
}
fn default_min_size() -> u64 {
    500
}
fn default_max_size() -> u64 {
    2000
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            num_orders: default_num_orders(),
            min_size: default_min_size(),
            max_size: default_max_size(),
        }
    }
}

/// Metrics engine parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Trailing VWAP window in timestamps
    #[serde(default = "default_window_length")]
    pub window_length: u64,

    /// Timestamps over which each order is worked
    #[serde(default = "default_execution_interval")]
    pub execution_interval: u64,
}

fn default_window_length() -> u64 {
    crate::engine::DEFAULT_WINDOW_LENGTH
}
fn default_execution_interval() -> u64 {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_length: default_window_length(),
            execution_interval: default_execution_interval(),
        }
    }
}

/// Monte-Carlo batch configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    #[serde(default = "default_runs")]
    pub runs: usize,

    /// Base seed; run `i` uses `seed + i`. Drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_runs() -> usize {
    100
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            seed: None,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.window_length == 0 {
            return Err(ConfigError::NotPositive("window_length"));
        }
        if self.engine.execution_interval == 0 {
            return Err(ConfigError::NotPositive("execution_interval"));
        }
        if self.market.num_venues == 0 {
            return Err(ConfigError::NotPositive("num_venues"));
        }
        if self.market.time_periods <= self.engine.execution_interval {
            return Err(ConfigError::HorizonTooShort {
                time_periods: self.market.time_periods,
                execution_interval: self.engine.execution_interval,
            });
        }
        if self.orders.min_size == 0 || self.orders.min_size >= self.orders.max_size {
            return Err(ConfigError::InvalidSizeRange {
                min: self.orders.min_size,
                max: self.orders.max_size,
            });
        }
        Ok(())
    }
}
