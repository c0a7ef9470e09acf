//! Random order generator
//!
//! Sizes are uniform over the configured range; placement times are drawn
//! without replacement so no two orders start at the same timestamp.

use crate::config::OrderConfig;
use crate::engine::{Order, OrderId, Timestamp};
use crate::market::GeneratorError;
use rand::seq::index;
use rand::Rng;

pub struct OrderGenerator<'a> {
    config: &'a OrderConfig,
}

impl<'a> OrderGenerator<'a> {
    pub fn new(config: &'a OrderConfig) -> Self {
        Self { config }
    }

    /// Generate orders whose windows start in `[0, time_periods - execution_interval)`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        time_periods: u64,
        execution_interval: u64,
    ) -> Result<Vec<Order>, GeneratorError> {
        if self.config.min_size >= self.config.max_size {
            return Err(GeneratorError::InvalidSizeRange {
                min: self.config.min_size,
                max: self.config.max_size,
            });
        }
        let available = time_periods.saturating_sub(execution_interval);
        let requested = self.config.num_orders;
        if requested as u64 > available {
            return Err(GeneratorError::NotEnoughPlacementSlots {
                requested,
                available,
            });
        }

        let starts = index::sample(rng, available as usize, requested);
        let orders = starts
            .into_iter()
            .enumerate()
            .map(|(i, start)| {
                let size = rng.gen_range(self.config.min_size..self.config.max_size);
                Order::new(
                    OrderId::new(format!("Order_{}", i + 1)),
                    size,
                    start as Timestamp,
                )
            })
            .collect();
        Ok(orders)
    }
}
