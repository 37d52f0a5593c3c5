//! Population statistics aggregation.
//!
//! A pure, read-only pass over the world's current state, recomputed fresh
//! on every call; no history is kept. Degenerate states (no organisms, no
//! food) produce zeroed and empty results rather than errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::world::World;

/// Ticks per simulated second, used to report elapsed time.
pub const TICKS_PER_SECOND: u64 = 60;

/// Species entries reported, ranked by member count.
pub const MAX_SPECIES: usize = 5;

/// One species: the organisms sharing an identical color hue, i.e. one
/// mutation lineage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    /// The shared color hue in degrees.
    pub color_hue: f32,
    /// Number of living members.
    pub count: usize,
    /// Speed of the representative (first encountered) member's genome.
    pub speed: f32,
    /// Size of the representative member's genome.
    pub size: f32,
}

/// Snapshot of population-level metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Whole seconds elapsed (tick counter over [`TICKS_PER_SECOND`]).
    pub elapsed_secs: u64,
    /// Living organisms.
    pub organism_count: usize,
    /// Uneaten food items.
    pub food_count: usize,
    /// Mean genome speed across living organisms, zero when none live.
    pub mean_speed: f32,
    /// Mean genome size across living organisms, zero when none live.
    pub mean_size: f32,
    /// Up to [`MAX_SPECIES`] species, largest first.
    pub species: Vec<SpeciesEntry>,
}

/// Derives [`Stats`] from world state.
pub struct StatsAggregator;

impl StatsAggregator {
    /// Summarizes the world's current population.
    pub fn summarize(world: &World) -> Stats {
        let organism_count = world.organisms().count();
        let food_count = world.food().count();

        let (mean_speed, mean_size) = if organism_count == 0 {
            (0.0, 0.0)
        } else {
            let total_speed: f32 = world.organisms().map(|o| o.genome.speed).sum();
            let total_size: f32 = world.organisms().map(|o| o.genome.size).sum();
            (
                total_speed / organism_count as f32,
                total_size / organism_count as f32,
            )
        };

        let mut groups: BTreeMap<u32, SpeciesEntry> = BTreeMap::new();
        for organism in world.organisms() {
            groups
                .entry(organism.genome.species_key())
                .and_modify(|entry| entry.count += 1)
                .or_insert_with(|| SpeciesEntry {
                    color_hue: organism.genome.color_hue,
                    count: 1,
                    speed: organism.genome.speed,
                    size: organism.genome.size,
                });
        }

        let mut species: Vec<SpeciesEntry> = groups.into_values().collect();
        species.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.color_hue.total_cmp(&b.color_hue))
        });
        species.truncate(MAX_SPECIES);

        Stats {
            elapsed_secs: world.ticks() / TICKS_PER_SECOND,
            organism_count,
            food_count,
            mean_speed,
            mean_size,
            species,
        }
    }
}
