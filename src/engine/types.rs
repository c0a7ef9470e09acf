//! Engine data model and error taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Discrete market time (one unit per observation period)
pub type Timestamp = u64;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Trading venue identifier
    VenueId
);
string_id!(
    /// Order identifier
    OrderId
);

/// A single venue's price and traded volume at one timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketObservation {
    pub timestamp: Timestamp,
    pub price: f64,
    pub volume: u64,
    pub venue: VenueId,
}

impl MarketObservation {
    pub fn new(timestamp: Timestamp, price: f64, volume: u64, venue: VenueId) -> Self {
        Self {
            timestamp,
            price,
            volume,
            venue,
        }
    }
}

/// Rolling VWAP benchmark at one timestamp
///
/// `vwap` is `None` when the trailing window traded no volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VwapPoint {
    pub timestamp: Timestamp,
    pub vwap: Option<f64>,
}

/// An order to evaluate against the market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub size: u64,
    pub placement_time: Timestamp,
}

impl Order {
    pub fn new(order_id: OrderId, size: u64, placement_time: Timestamp) -> Self {
        Self {
            order_id,
            size,
            placement_time,
        }
    }
}

/// Per-order failure reasons
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ExecutionError {
    /// No market observations inside the execution window
    #[error("insufficient data: no observations in [{start}, {end})")]
    InsufficientData { start: Timestamp, end: Timestamp },
    /// Every VWAP point inside the execution window is undefined
    #[error("undefined benchmark: no VWAP with volume in [{start}, {end})")]
    UndefinedBenchmark { start: Timestamp, end: Timestamp },
    /// Order rejected at validation
    #[error("invalid order: {0}")]
    InvalidOrder(String),
}

impl ExecutionError {
    /// Short label used for logs and counters
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutionError::InsufficientData { .. } => "insufficient_data",
            ExecutionError::UndefinedBenchmark { .. } => "undefined_benchmark",
            ExecutionError::InvalidOrder(_) => "invalid_order",
        }
    }
}

/// Engine construction errors
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{name} must be positive")]
    InvalidParameter { name: &'static str },
}

/// Outcome of simulating one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub order_id: OrderId,
    pub size: u64,
    pub placement_time: Timestamp,
    /// Best in-window price, when the window had data
    pub expected_price: Option<f64>,
    /// Blended settlement price, when the window had data
    pub actual_price: Option<f64>,
    /// Mean VWAP across the window, when any point was defined
    pub benchmark: Option<f64>,
    pub execution_cost: Result<f64, ExecutionError>,
    pub slippage: Result<f64, ExecutionError>,
}

impl ExecutionResult {
    /// Build a result for an order that failed before any price was found
    pub fn failed(order: &Order, error: ExecutionError) -> Self {
        Self {
            order_id: order.order_id.clone(),
            size: order.size,
            placement_time: order.placement_time,
            expected_price: None,
            actual_price: None,
            benchmark: None,
            execution_cost: Err(error.clone()),
            slippage: Err(error),
        }
    }

    /// Both cost and slippage were computed
    pub fn is_success(&self) -> bool {
        self.execution_cost.is_ok() && self.slippage.is_ok()
    }

    /// First failure reason, if any
    pub fn failure(&self) -> Option<&ExecutionError> {
        self.execution_cost
            .as_ref()
            .err()
            .or_else(|| self.slippage.as_ref().err())
    }
}

/// Summed cost and slippage over successful orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub total_execution_cost: f64,
    pub total_slippage: f64,
}

/// An order excluded from the totals, with its reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedOrder {
    pub order_id: OrderId,
    pub reason: ExecutionError,
}

/// Totals plus the orders that did not contribute to them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub totals: AggregateMetrics,
    pub succeeded: usize,
    pub failed: Vec<FailedOrder>,
}
