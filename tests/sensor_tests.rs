#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use petri::simulation::food::FoodItem;
use petri::simulation::locatable::Locatable;
use petri::simulation::organism::Organism;
use petri::simulation::sensor;

fn food_at(id: u64, x: f32, y: f32) -> FoodItem {
    FoodItem::new(id, Array1::from_vec(vec![x, y]))
}

#[test]
fn nearest_returns_the_closest_candidate_within_radius() {
    let origin = Array1::from_vec(vec![0.0, 0.0]);
    let candidates = vec![
        food_at(0, 30.0, 0.0),
        food_at(1, 10.0, 0.0),
        food_at(2, 20.0, 0.0),
    ];

    assert_eq!(sensor::nearest(&origin, &candidates, 50.0), Some(1));
}

#[test]
fn nearest_requires_strictly_closer_than_the_radius() {
    let origin = Array1::from_vec(vec![0.0, 0.0]);
    let candidates = vec![food_at(0, 25.0, 0.0)];

    assert_eq!(sensor::nearest(&origin, &candidates, 25.0), None);
    assert_eq!(sensor::nearest(&origin, &candidates, 26.0), Some(0));
}

#[test]
fn nearest_on_no_candidates_returns_none() {
    let origin = Array1::from_vec(vec![5.0, 5.0]);
    let candidates: Vec<FoodItem> = Vec::new();

    assert_eq!(sensor::nearest(&origin, &candidates, 100.0), None);
}

#[test]
fn exact_distance_tie_resolves_to_scan_order() {
    let origin = Array1::from_vec(vec![0.0, 0.0]);
    // Both candidates are exactly 5 away.
    let candidates = vec![food_at(0, 3.0, 4.0), food_at(1, -3.0, -4.0)];

    assert_eq!(sensor::nearest(&origin, &candidates, 10.0), Some(0));
}

#[test]
fn nearest_works_over_any_locatable() {
    let origin = Array1::from_vec(vec![0.0, 0.0]);
    let organisms = vec![
        Organism::founder(0, Array1::from_vec(vec![40.0, 0.0]), 1),
        Organism::founder(1, Array1::from_vec(vec![15.0, 0.0]), 2),
    ];

    assert_eq!(sensor::nearest(&origin, &organisms, 60.0), Some(1));
}

#[test]
fn entities_expose_their_positions_through_locatable() {
    let organism = Organism::founder(0, Array1::from_vec(vec![12.0, 34.0]), 99);
    assert_eq!(organism.pos()[0], 12.0);
    assert_eq!(organism.pos()[1], 34.0);

    let mut food = food_at(0, 1.0, 2.0);
    food.pos_mut()[0] = 3.0;
    assert_eq!(food.pos()[0], 3.0);
}
