//! End-to-end engine scenarios through the public API

use approx::assert_relative_eq;
use venue_tca::engine::{
    evaluate, ExecutionError, ExecutionSimulator, MarketObservation, MetricsAggregator, Order,
    OrderId, VenueId, VwapCalculator,
};

fn obs(timestamp: u64, price: f64, volume: u64, venue: &str) -> MarketObservation {
    MarketObservation::new(timestamp, price, volume, VenueId::new(venue))
}

fn order(id: &str, placement_time: u64) -> Order {
    Order::new(OrderId::new(id), 1000, placement_time)
}

#[test]
fn test_single_venue_rising_prices_vwap() {
    let data: Vec<_> = (0..10)
        .map(|t| obs(t, 100.0 + t as f64, 100, "Venue_1"))
        .collect();
    let series = VwapCalculator::new(5).unwrap().compute(&data);

    let last = series.last().unwrap();
    assert_eq!(last.timestamp, 9);
    assert_relative_eq!(last.vwap.unwrap(), 106.5, epsilon = 1e-9);
}

#[test]
fn test_missing_settlement_point_gives_zero_slippage() {
    let data = vec![obs(0, 50.0, 10, "Venue_1"), obs(1, 40.0, 10, "Venue_1")];
    let series = VwapCalculator::default().compute(&data);
    let sim = ExecutionSimulator::new(&data, &series, 3).unwrap();

    let result = sim.simulate(&order("Order_1", 0));
    assert_eq!(result.expected_price, Some(40.0));
    assert_eq!(result.actual_price, Some(40.0));
    assert_eq!(result.slippage, Ok(0.0));
}

#[test]
fn test_empty_window_reported_and_excluded() {
    let data = vec![
        obs(0, 50.0, 10, "Venue_1"),
        obs(1, 40.0, 10, "Venue_1"),
        obs(20, 45.0, 10, "Venue_1"),
    ];
    let orders = vec![order("Order_1", 0), order("Order_2", 5)];
    let eval = evaluate(&data, &orders, 5, 3).unwrap();

    assert_eq!(eval.results.len(), 2);
    assert_eq!(eval.report.succeeded, 1);
    assert_eq!(eval.report.failed.len(), 1);
    assert_eq!(eval.report.failed[0].order_id, OrderId::new("Order_2"));
    assert_eq!(
        eval.report.failed[0].reason,
        ExecutionError::InsufficientData { start: 5, end: 8 }
    );
    assert_eq!(
        eval.report.totals.total_execution_cost,
        *eval.results[0].execution_cost.as_ref().unwrap()
    );
}

#[test]
fn test_settlement_point_blends_actual_price() {
    let data = vec![
        obs(0, 50.0, 10, "Venue_1"),
        obs(1, 40.0, 10, "Venue_1"),
        obs(1, 42.0, 10, "Venue_2"),
        obs(3, 30.0, 10, "Venue_1"),
    ];
    let series = VwapCalculator::default().compute(&data);
    let sim = ExecutionSimulator::new(&data, &series, 3).unwrap();

    let result = sim.simulate(&order("Order_1", 0));
    assert_eq!(result.expected_price, Some(40.0));
    assert_eq!(result.actual_price, Some(35.0));
    assert_eq!(result.slippage, Ok(5.0));
}

#[test]
fn test_totals_equal_sum_of_successes() {
    let data: Vec<_> = (0..40)
        .flat_map(|t| {
            let base = 100.0 + ((t * 37) % 13) as f64 * 0.25;
            vec![
                obs(t, base, (t * 11) % 7, "Venue_1"),
                obs(t, base + 0.3, (t * 3) % 5, "Venue_2"),
            ]
        })
        .collect();
    let orders: Vec<_> = [0u64, 7, 15, 29, 36, 45]
        .iter()
        .enumerate()
        .map(|(i, &t)| order(&format!("Order_{}", i + 1), t))
        .collect();
    let eval = evaluate(&data, &orders, 5, 5).unwrap();

    let succeeded: Vec<_> = eval.results.iter().filter(|r| r.is_success()).collect();
    let cost: f64 = succeeded
        .iter()
        .map(|r| *r.execution_cost.as_ref().unwrap())
        .fold(0.0, |a, b| a + b);
    let slippage: f64 = succeeded
        .iter()
        .map(|r| *r.slippage.as_ref().unwrap())
        .fold(0.0, |a, b| a + b);

    assert_eq!(eval.report.totals.total_execution_cost, cost);
    assert_eq!(eval.report.totals.total_slippage, slippage);
    assert_eq!(
        eval.report.succeeded + eval.report.failed.len(),
        orders.len()
    );
    // window [45, 50) lies beyond the data
    assert!(eval
        .report
        .failed
        .iter()
        .any(|f| f.order_id == OrderId::new("Order_6")));
    assert_eq!(MetricsAggregator::aggregate(&eval.results), eval.report);
}

#[test]
fn test_evaluate_rejects_zero_parameters() {
    let data = vec![obs(0, 1.0, 1, "Venue_1")];
    assert!(evaluate(&data, &[], 0, 3).is_err());
    assert!(evaluate(&data, &[], 5, 0).is_err());
}

#[test]
fn test_evaluate_is_idempotent() {
    let data: Vec<_> = (0..15).map(|t| obs(t, 20.0 + (t % 3) as f64, 4, "Venue_1")).collect();
    let orders = vec![order("Order_1", 2), order("Order_2", 9)];
    assert_eq!(
        evaluate(&data, &orders, 5, 4).unwrap(),
        evaluate(&data, &orders, 5, 4).unwrap()
    );
}
