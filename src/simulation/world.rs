//! World state, tick orchestration, and entity lifecycle management.
//!
//! The world owns every organism and food item. An external driver calls
//! [`World::tick`] once per simulation step; rendering and statistics read
//! the collections between ticks. A tick runs in two phases: every organism
//! acts against the same snapshot of the food supply (collecting offspring
//! and consumption claims as it goes), then all claims, deaths, removals,
//! and insertions are applied serially. Offspring born during a tick are
//! never processed within that tick.

use ndarray::Array1;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{ConfigError, SimulationConfig};
use super::events::{self, FoodClaim};
use super::food::FoodItem;
use super::geometric_utils;
use super::organism::Organism;
use super::sensor;

/// Founders injected by [`World::spawn_cluster`] are jittered by up to this
/// much on each axis.
const CLUSTER_SPREAD: f32 = 10.0;

/// What happened during one tick, in terms a renderer can diff against its
/// scene: ids of entities created and destroyed plus closing counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSummary {
    /// Index of the tick that produced this summary (pre-increment counter).
    pub tick: u64,
    /// Live organisms after the tick.
    pub organism_count: usize,
    /// Live food items after the tick.
    pub food_count: usize,
    /// Ids of organisms born this tick.
    pub born: Vec<u64>,
    /// Ids of organisms that died this tick.
    pub died: Vec<u64>,
    /// Ids of food items spawned this tick.
    pub food_spawned: Vec<u64>,
    /// Ids of food items consumed this tick.
    pub food_consumed: Vec<u64>,
}

/// The simulation world: bounds, entities, configuration, and the seeded
/// random stream all randomness descends from.
#[derive(Debug, Clone)]
pub struct World {
    /// All living organisms.
    pub organisms: Vec<Organism>,
    /// All uneaten food items.
    pub food: Vec<FoodItem>,
    width: f32,
    height: f32,
    config: SimulationConfig,
    tick: u64,
    next_organism_id: u64,
    next_food_id: u64,
    rng: ChaCha8Rng,
    seed: u64,
}

impl World {
    /// Creates an empty world with a randomly drawn seed.
    ///
    /// # Errors
    ///
    /// Rejects invalid configuration ([`ConfigError`]) at construction time.
    pub fn new(width: f32, height: f32, config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_seed(width, height, config, rand::rng().random())
    }

    /// Creates an empty world with a specific seed for reproducible runs.
    ///
    /// Two worlds built with the same seed, configuration, and sequence of
    /// calls evolve identically.
    pub fn with_seed(
        width: f32,
        height: f32,
        config: SimulationConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            organisms: Vec::new(),
            food: Vec::new(),
            width,
            height,
            config,
            tick: 0,
            next_organism_id: 0,
            next_food_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        })
    }

    /// World width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// World height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Ticks elapsed since construction or the last [`World::reset`].
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The seed this world was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the configuration, e.g. when a driver-side slider moves.
    ///
    /// # Errors
    ///
    /// Rejects invalid configuration and leaves the current one in place.
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Read-only view of the living organisms, for rendering and statistics.
    pub fn organisms(&self) -> impl Iterator<Item = &Organism> {
        self.organisms.iter()
    }

    /// Read-only view of the uneaten food items.
    pub fn food(&self) -> impl Iterator<Item = &FoodItem> {
        self.food.iter()
    }

    /// Injects `count` founder organisms jittered around a point, the
    /// click-to-seed interaction.
    pub fn spawn_cluster(&mut self, x: f32, y: f32, count: usize) {
        for _ in 0..count {
            let pos = Array1::from_vec(vec![
                x + self.rng.random_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
                y + self.rng.random_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
            ]);
            let seed = self.rng.random();
            let organism = Organism::founder(self.next_organism_id, pos, seed);
            debug!(organism = organism.id, "founder spawned");
            self.next_organism_id += 1;
            self.organisms.push(organism);
        }
    }

    /// Clears all entities, zeroes the tick and id counters, and reseeds the
    /// random stream from the construction seed, so a reset world replays
    /// the same run.
    pub fn reset(&mut self) {
        self.organisms.clear();
        self.food.clear();
        self.tick = 0;
        self.next_organism_id = 0;
        self.next_food_id = 0;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// Advances the simulation by one step.
    ///
    /// Order within a tick: food spawning, then the per-organism scan
    /// (sense/move, metabolize, age, clamp, reproduce, record consumption
    /// claims), then claim resolution, death sweep, food sweep, and offspring
    /// insertion. Organisms processed later in the scan see the same food
    /// snapshot as those processed earlier; contested food goes to the
    /// closest claimant (id as tie-break), so the outcome does not depend on
    /// iteration order.
    pub fn tick(&mut self) -> TickSummary {
        let mut summary = TickSummary {
            tick: self.tick,
            ..TickSummary::default()
        };

        if self.tick % self.config.spawn_cadence() == 0 {
            let pos = Array1::from_vec(vec![
                self.rng.random_range(0.0..self.width),
                self.rng.random_range(0.0..self.height),
            ]);
            let item = FoodItem::new(self.next_food_id, pos);
            self.next_food_id += 1;
            debug!(food = item.id, "food spawned");
            summary.food_spawned.push(item.id);
            self.food.push(item);
        }

        let mut births: Vec<Organism> = Vec::new();
        let mut claims: Vec<FoodClaim> = Vec::new();

        let alive_at_start = self.organisms.len();
        for index in 0..alive_at_start {
            let target = sensor::nearest(
                &self.organisms[index].pos,
                &self.food,
                self.organisms[index].genome.sense_radius,
            )
            .map(|food_index| self.food[food_index].pos.clone());

            let organism = &mut self.organisms[index];
            match target {
                Some(ref pos) => organism.seek(pos),
                None => organism.wander(),
            }
            organism.metabolize();
            organism.grow_older();
            organism.clamp_to_bounds(self.width, self.height);

            if let Some(child) =
                organism.try_reproduce(self.config.mutation_rate, self.next_organism_id)
            {
                self.next_organism_id += 1;
                debug!(organism = child.id, parent = organism.id, "offspring born");
                births.push(child);
            }

            let organism = &self.organisms[index];
            for (food_index, item) in self.food.iter().enumerate() {
                let distance = geometric_utils::euclidean_distance(&organism.pos, &item.pos);
                if distance < organism.genome.size {
                    claims.push(FoodClaim {
                        organism_index: index,
                        food_index,
                        distance,
                    });
                }
            }
        }

        summary.food_consumed =
            events::resolve_food_claims(&mut self.organisms, &mut self.food, claims);

        for organism in &self.organisms {
            if !organism.is_alive() {
                debug!(organism = organism.id, age = organism.age, "organism died");
                summary.died.push(organism.id);
            }
        }
        self.organisms.retain(Organism::is_alive);
        self.food.retain(|item| !item.is_consumed());

        summary.born = births.iter().map(|child| child.id).collect();
        self.organisms.extend(births);

        self.tick += 1;
        summary.organism_count = self.organisms.len();
        summary.food_count = self.food.len();
        summary
    }
}
