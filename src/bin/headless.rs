//! Minimal headless driver: seeds a founder cluster, advances the world for
//! a fixed stretch of simulated time, and reports population statistics once
//! per simulated second.

use petri::simulation::config::SimulationConfig;
use petri::simulation::stats::{StatsAggregator, TICKS_PER_SECOND};
use petri::simulation::world::World;
use tracing::info;

const RUN_SECONDS: u64 = 120;

fn main() {
    tracing_subscriber::fmt::init();

    let config = SimulationConfig::default();
    let mut world = match World::with_seed(800.0, 600.0, config, 42) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    world.spawn_cluster(world.width() / 2.0, world.height() / 2.0, 5);

    info!(seed = world.seed(), "starting headless run");

    for _ in 0..RUN_SECONDS * TICKS_PER_SECOND {
        world.tick();
        if world.ticks() % TICKS_PER_SECOND == 0 {
            let stats = StatsAggregator::summarize(&world);
            info!(
                t = stats.elapsed_secs,
                organisms = stats.organism_count,
                food = stats.food_count,
                mean_speed = stats.mean_speed,
                mean_size = stats.mean_size,
                species = stats.species.len(),
                "population"
            );
        }
    }
}
