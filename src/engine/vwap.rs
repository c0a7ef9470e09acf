//! Rolling cross-venue VWAP benchmark

use super::types::{EngineError, MarketObservation, Timestamp, VwapPoint};
use std::collections::BTreeMap;

/// Trailing window length used when none is configured
pub const DEFAULT_WINDOW_LENGTH: u64 = 5;

/// Price-volume totals for one timestamp across all venues
#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    notional: f64,
    volume: u128,
}

/// Computes one VWAP point per distinct timestamp over `[t - window, t]`
#[derive(Debug, Clone, Copy)]
pub struct VwapCalculator {
    window_length: u64,
}

impl VwapCalculator {
    /// Create a calculator with the given trailing window
    pub fn new(window_length: u64) -> Result<Self, EngineError> {
        if window_length == 0 {
            return Err(EngineError::InvalidParameter {
                name: "window_length",
            });
        }
        Ok(Self { window_length })
    }

    pub fn window_length(&self) -> u64 {
        self.window_length
    }

    /// Compute the VWAP series in ascending timestamp order
    ///
    /// The window is closed on both ends and truncates at the start of the
    /// series. Zero traded volume yields an undefined point.
    pub fn compute(&self, observations: &[MarketObservation]) -> Vec<VwapPoint> {
        let mut buckets: BTreeMap<Timestamp, Bucket> = BTreeMap::new();
        for obs in observations {
            let bucket = buckets.entry(obs.timestamp).or_default();
            bucket.notional += obs.price * obs.volume as f64;
            bucket.volume += u128::from(obs.volume);
        }

        buckets
            .keys()
            .map(|&t| {
                let from = t.saturating_sub(self.window_length);
                let (notional, volume) = buckets
                    .range(from..=t)
                    .fold((0.0, 0u128), |(n, v), (_, b)| (n + b.notional, v + b.volume));

                let vwap = if volume > 0 {
                    Some(notional / volume as f64)
                } else {
                    None
                };
                VwapPoint { timestamp: t, vwap }
            })
            .collect()
    }
}

impl Default for VwapCalculator {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH,
        }
    }
}
