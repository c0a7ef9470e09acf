//! Backtest driver integration tests

use venue_tca::backtest::{write_json, MonteCarlo, RunReport, SimulationRun};
use venue_tca::config::Config;

#[test]
fn test_run_export_round_trip() {
    let run = SimulationRun::execute(&Config::default(), 24).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");

    write_json(&path, &run).unwrap();
    let loaded: RunReport = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(loaded.seed, 24);
    assert_eq!(loaded.vwap_series.len(), 100);
    assert_eq!(loaded.results.len(), run.results.len());
}

#[test]
fn test_orders_start_inside_horizon() {
    let run = SimulationRun::execute(&Config::default(), 5).unwrap();
    assert!(run
        .orders
        .iter()
        .all(|o| o.placement_time + run.execution_interval < 100));
    // every window has three venues at every timestamp
    assert!(run.results.iter().all(|r| r.expected_price.is_some()));
}

#[tokio::test]
async fn test_batch_matches_individual_runs() {
    let mut config = Config::default();
    config.batch.runs = 4;
    config.batch.seed = Some(100);

    let summary = MonteCarlo::new(config.clone()).run().await.unwrap();

    let totals: Vec<_> = (0..4u64)
        .map(|i| SimulationRun::execute(&config, 100 + i).unwrap().report.totals)
        .collect();
    let cost = totals.iter().fold(0.0, |a, t| a + t.total_execution_cost) / 4.0;
    let slippage = totals.iter().fold(0.0, |a, t| a + t.total_slippage) / 4.0;

    assert_eq!(summary.average_execution_cost, cost);
    assert_eq!(summary.average_slippage, slippage);
}
