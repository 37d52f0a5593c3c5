//! Organism behavior, state, and lifecycle management.
//!
//! Organisms sense the nearest food, move toward it (or wander), pay a
//! metabolic cost every tick, age, and reproduce by budding off a mutated
//! copy of their genome once their energy crosses the genome's threshold.

use ndarray::Array1;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::genome::Genome;
use super::geometric_utils;
use super::locatable::Locatable;

/// Energy every organism starts with, founder and offspring alike.
pub const INITIAL_ENERGY: f32 = 100.0;

/// Undirected wander covers half the ground of directed movement.
const WANDER_DAMPING: f32 = 0.5;

/// A simulated organism.
///
/// Each organism owns a private `ChaCha8` stream seeded at creation, so its
/// stochastic behavior (wandering, mutation draws) is a function of its own
/// identity rather than of the order the world happens to process entities
/// in.
#[derive(Debug, Clone)]
pub struct Organism {
    /// Unique identifier, stable for renderer diffing.
    pub id: u64,
    /// Position in 2D space, always within world bounds after a tick.
    pub pos: Array1<f32>,
    /// Current energy; unbounded above, dead at zero or below.
    pub energy: f32,
    /// Ticks survived.
    pub age: u32,
    /// Heritable traits.
    pub genome: Genome,
    rng: ChaCha8Rng,
}

impl Organism {
    /// Creates a founder with a freshly randomized genome.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `pos` - Spawn position
    /// * `seed` - Seed for the organism's private random stream
    pub fn founder(id: u64, pos: Array1<f32>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let genome = Genome::founder(&mut rng);
        Self {
            id,
            pos,
            energy: INITIAL_ENERGY,
            age: 0,
            genome,
            rng,
        }
    }

    /// Moves one step toward `target` at the genome's speed.
    pub fn seek(&mut self, target: &Array1<f32>) {
        let angle = (target[1] - self.pos[1]).atan2(target[0] - self.pos[0]);
        self.pos[0] += angle.cos() * self.genome.speed;
        self.pos[1] += angle.sin() * self.genome.speed;
    }

    /// Wanders: perturbs each axis independently by `rand(-1, 1)` scaled by
    /// half the genome's speed.
    pub fn wander(&mut self) {
        let step = self.genome.speed * WANDER_DAMPING;
        self.pos[0] += self.rng.random_range(-1.0..1.0) * step;
        self.pos[1] += self.rng.random_range(-1.0..1.0) * step;
    }

    /// Energy lost per tick: larger and faster organisms burn more, which is
    /// the fitness trade-off driving selection.
    pub fn metabolic_cost(&self) -> f32 {
        0.1 + self.genome.speed * 0.05 + self.genome.size * 0.02
    }

    /// Deducts one tick's metabolic cost.
    pub fn metabolize(&mut self) {
        self.energy -= self.metabolic_cost();
    }

    /// Advances age by one tick.
    pub fn grow_older(&mut self) {
        self.age += 1;
    }

    /// Adds energy, e.g. from a consumed food item. Energy has no upper
    /// bound.
    pub fn gain_energy(&mut self, amount: f32) {
        self.energy += amount;
    }

    /// Pulls the position back to `[size, dimension - size]` on both axes.
    pub fn clamp_to_bounds(&mut self, width: f32, height: f32) {
        geometric_utils::clamp_to_bounds(&mut self.pos, self.genome.size, width, height);
    }

    /// Checks whether the organism is alive: energy above zero and age within
    /// the genome's maximum.
    pub fn is_alive(&self) -> bool {
        self.energy > 0.0 && self.age as f32 <= self.genome.max_age
    }

    /// Buds off one offspring if energy exceeds the reproduction threshold.
    ///
    /// Reproduction halves the parent's energy. The child spawns at the
    /// parent's current position with a mutated genome, full starting energy,
    /// and a fresh random stream seeded from the parent's. Checked at most
    /// once per tick; the halving is not re-checked within the same tick.
    ///
    /// # Arguments
    ///
    /// * `mutation_rate` - Per-trait mutation probability
    /// * `child_id` - Identifier assigned to the offspring
    pub fn try_reproduce(&mut self, mutation_rate: f32, child_id: u64) -> Option<Self> {
        if self.energy <= self.genome.reproduction_threshold {
            return None;
        }
        self.energy /= 2.0;

        let genome = self.genome.mutate(mutation_rate, &mut self.rng);
        let child_seed = self.rng.random::<u64>();
        Some(Self {
            id: child_id,
            pos: self.pos.clone(),
            energy: INITIAL_ENERGY,
            age: 0,
            genome,
            rng: ChaCha8Rng::seed_from_u64(child_seed),
        })
    }
}

impl Locatable for Organism {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
