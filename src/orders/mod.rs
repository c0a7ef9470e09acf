//! Synthetic order flow

mod generator;

pub use generator::OrderGenerator;
