//! Simulation configuration and validation.
//!
//! Configuration is an explicit immutable value passed into
//! [`World::new`](super::world::World::new) and updated through
//! [`World::set_config`](super::world::World::set_config); the engine never
//! reads presentation-layer state mid-tick.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base of the food spawn cadence: a food item appears whenever the tick
/// counter is a multiple of `SPAWN_CADENCE_BASE - food_rate`.
pub const SPAWN_CADENCE_BASE: u32 = 25;

/// Largest accepted `food_rate`; anything higher would make the spawn
/// cadence zero or negative.
pub const MAX_FOOD_RATE: u32 = SPAWN_CADENCE_BASE - 1;

/// Tunable simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Food spawn rate control in `[1, 24]`: a food item spawns every
    /// `25 - food_rate` ticks, so larger values mean more frequent spawns.
    pub food_rate: u32,
    /// Per-trait mutation probability in `[0, 1]` applied when an offspring
    /// genome is derived from its parent.
    pub mutation_rate: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            food_rate: 12,
            mutation_rate: 0.1,
        }
    }
}

/// Rejected configuration, reported at world construction or config update
/// time rather than discovered mid-tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `food_rate` would drive the spawn cadence to zero or below.
    #[error("food rate {0} exceeds the maximum of 24")]
    FoodRateTooHigh(u32),
    /// `mutation_rate` is not a probability.
    #[error("mutation rate {0} is outside [0, 1]")]
    MutationRateOutOfRange(f32),
}

impl SimulationConfig {
    /// Checks the configuration against its documented input constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.food_rate > MAX_FOOD_RATE {
            return Err(ConfigError::FoodRateTooHigh(self.food_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }

    /// Number of ticks between food spawns.
    ///
    /// Only meaningful on a validated configuration; guaranteed to be at
    /// least 1.
    pub fn spawn_cadence(&self) -> u64 {
        u64::from(SPAWN_CADENCE_BASE - self.food_rate)
    }
}
