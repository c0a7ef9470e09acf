//! Integration tests

mod backtest_test;
mod config_test;
mod engine_test;
