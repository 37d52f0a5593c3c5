#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use petri::simulation::config::SimulationConfig;
use petri::simulation::stats::{MAX_SPECIES, Stats, StatsAggregator};
use petri::simulation::world::World;

fn test_world(seed: u64) -> World {
    World::with_seed(800.0, 600.0, SimulationConfig::default(), seed).expect("config is valid")
}

/// Spawns `count` founders and stamps them all with the same hue so they
/// read as one lineage.
fn seed_lineage(world: &mut World, hue: f32, count: usize) {
    world.spawn_cluster(200.0, 200.0, count);
    let len = world.organisms.len();
    for organism in &mut world.organisms[len - count..] {
        organism.genome.color_hue = hue;
    }
}

#[test]
fn empty_world_reports_zeroed_stats() {
    let world = test_world(1);
    let stats = StatsAggregator::summarize(&world);
    assert_eq!(stats, Stats::default());
}

#[test]
fn means_cover_the_live_population() {
    let mut world = test_world(2);
    world.spawn_cluster(400.0, 300.0, 4);

    let expected_speed = world.organisms().map(|o| o.genome.speed).sum::<f32>() / 4.0;
    let expected_size = world.organisms().map(|o| o.genome.size).sum::<f32>() / 4.0;

    let stats = StatsAggregator::summarize(&world);
    assert_eq!(stats.organism_count, 4);
    assert!((stats.mean_speed - expected_speed).abs() < 1e-5);
    assert!((stats.mean_size - expected_size).abs() < 1e-5);
}

#[test]
fn species_are_ranked_by_member_count() {
    let mut world = test_world(3);
    seed_lineage(&mut world, 10.0, 1);
    seed_lineage(&mut world, 20.0, 3);
    seed_lineage(&mut world, 30.0, 2);

    let stats = StatsAggregator::summarize(&world);

    assert_eq!(stats.species.len(), 3);
    assert_eq!(stats.species[0].count, 3);
    assert_eq!(stats.species[0].color_hue, 20.0);
    assert_eq!(stats.species[1].count, 2);
    assert_eq!(stats.species[1].color_hue, 30.0);
    assert_eq!(stats.species[2].count, 1);
    assert_eq!(stats.species[2].color_hue, 10.0);

    // The entry reports the first member's genome as representative.
    let first = world
        .organisms()
        .find(|o| o.genome.color_hue == 20.0)
        .unwrap();
    assert_eq!(stats.species[0].speed, first.genome.speed);
    assert_eq!(stats.species[0].size, first.genome.size);
}

#[test]
fn species_list_caps_at_five() {
    let mut world = test_world(4);
    for i in 0..8u8 {
        seed_lineage(&mut world, f32::from(i) * 11.0, 1);
    }

    let stats = StatsAggregator::summarize(&world);
    assert_eq!(stats.species.len(), MAX_SPECIES);
}

#[test]
fn elapsed_time_counts_whole_seconds() {
    let mut world = test_world(5);
    for _ in 0..59 {
        world.tick();
    }
    assert_eq!(StatsAggregator::summarize(&world).elapsed_secs, 0);

    world.tick();
    assert_eq!(StatsAggregator::summarize(&world).elapsed_secs, 1);
}

#[test]
fn food_count_tracks_the_table() {
    let mut world = test_world(6);
    // Cadence 13 with nobody eating: items appear at ticks 0 and 13.
    for _ in 0..14 {
        world.tick();
    }
    assert_eq!(StatsAggregator::summarize(&world).food_count, 2);
}
