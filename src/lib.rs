//! # Petri - Deterministic Artificial-Life Engine
//!
//! A discrete-time simulation of autonomous organisms that forage for food,
//! burn energy, age, reproduce with heritable mutation, and die, producing an
//! emergent population dynamic.
//!
//! ## Features
//!
//! - Heritable genomes with bounded, clamped mutation
//! - Nearest-neighbor food sensing and directed/wandering movement
//! - Energy metabolism scaling with speed and size (the core fitness trade-off)
//! - Reproduction with energy halving and per-trait mutation
//! - Two-phase tick update: actions are computed against a snapshot, then
//!   applied, so no entity is skipped or double-processed during removal
//! - Seeded `ChaCha8` randomness for bit-reproducible runs
//! - Population statistics with species grouping by color lineage
//!
//! Rendering, input handling, and on-screen presentation are external
//! collaborators: they drive [`simulation::world::World::tick`] and read the
//! world's collections and [`simulation::stats::Stats`] snapshots.
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - World state and tick orchestration
//! - [`simulation::organism`] - Organism behavior and lifecycle
//! - [`simulation::genome`] - Heritable traits and mutation
//! - [`simulation::sensor`] - Nearest-neighbor sensing
//! - [`simulation::stats`] - Population statistics aggregation

/// Core simulation logic and data structures.
pub mod simulation {
    /// Simulation configuration and validation.
    pub mod config;
    /// Deferred consumption claims resolved after the per-organism scan.
    pub mod events;
    /// Food items that organisms can consume.
    pub mod food;
    /// Heritable trait bundle and the mutation operator.
    pub mod genome;
    /// Geometric utility functions for distance and bounds clamping.
    pub mod geometric_utils;
    /// Trait for entities that have a position in 2D space.
    ///
    /// The [`locatable::Locatable`] trait is implemented by all entities with
    /// a position (food items, organisms) and is the seam the sensing code
    /// works through.
    pub mod locatable;
    /// Organism behavior, state, and lifecycle.
    pub mod organism;
    /// Nearest-neighbor sensing queries.
    pub mod sensor;
    /// Population statistics aggregation.
    pub mod stats;
    /// World state, tick orchestration, and entity lifecycle management.
    pub mod world;
}
