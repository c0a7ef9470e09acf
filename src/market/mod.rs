//! Synthetic multi-venue market data
//!
//! Supplies the engine with observations: a shared random-walk baseline,
//! independent per-venue noise and random traded volume.

mod generator;

pub use generator::{MarketGenerator, VENUE_NOISE_RATIO};

use thiserror::Error;

/// Errors from the synthetic data generators
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid distribution parameters: {0}")]
    Distribution(#[from] rand_distr::NormalError),
    #[error("cannot place {requested} orders in {available} distinct start times")]
    NotEnoughPlacementSlots { requested: usize, available: u64 },
    #[error("order size range [{min}, {max}) is empty")]
    InvalidSizeRange { min: u64, max: u64 },
}
