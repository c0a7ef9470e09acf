//! Random-walk market generator

use super::GeneratorError;
use crate::config::MarketConfig;
use crate::engine::{MarketObservation, Timestamp, VenueId};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Venue noise standard deviation as a fraction of baseline volatility
pub const VENUE_NOISE_RATIO: f64 = 0.2;

/// Generates observations for every venue at every timestamp
pub struct MarketGenerator<'a> {
    config: &'a MarketConfig,
}

impl<'a> MarketGenerator<'a> {
    pub fn new(config: &'a MarketConfig) -> Self {
        Self { config }
    }

    /// Baseline price path: cumulative normal steps from the start price
    fn baseline<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>, GeneratorError> {
        let step = Normal::new(0.0, self.config.volatility)?;
        let mut level = self.config.start_price;
        Ok((0..self.config.time_periods)
            .map(|_| {
                level += step.sample(rng);
                level
            })
            .collect())
    }

    /// Generate observations sorted by (timestamp, venue)
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<MarketObservation>, GeneratorError> {
        let baseline = self.baseline(rng)?;
        let noise = Normal::new(0.0, self.config.volatility * VENUE_NOISE_RATIO)?;

        let mut observations =
            Vec::with_capacity(baseline.len() * self.config.num_venues as usize);
        for venue_id in 1..=self.config.num_venues {
            let venue = VenueId::new(format!("Venue_{venue_id}"));
            for (t, base) in baseline.iter().enumerate() {
                let price = base + noise.sample(rng);
                let volume = if self.config.max_volume > 0 {
                    rng.gen_range(0..self.config.max_volume)
                } else {
                    0
                };
                observations.push(MarketObservation::new(
                    t as Timestamp,
                    price,
                    volume,
                    venue.clone(),
                ));
            }
        }

        observations.sort_by(|a, b| (a.timestamp, &a.venue).cmp(&(b.timestamp, &b.venue)));

        tracing::debug!(
            observations = observations.len(),
            venues = self.config.num_venues,
            "Market data generated"
        );
        Ok(observations)
    }
}
