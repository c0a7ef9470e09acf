//! venue-tca: execution quality analysis on a synthetic multi-venue market
//!
//! This library provides:
//! - Rolling cross-venue VWAP benchmark
//! - Per-order execution simulation (best-venue price, settlement blend)
//! - Execution cost and slippage aggregation
//! - Seeded synthetic market and order generators
//! - Single runs and Monte-Carlo batches with JSON export

pub mod backtest;
pub mod cli;
pub mod config;
pub mod engine;
pub mod market;
pub mod orders;
pub mod telemetry;
