//! Deferred consumption claims resolved after the per-organism scan.
//!
//! During a tick every organism records which food items it could reach
//! against the same immutable snapshot; nothing is removed mid-scan. The
//! claims are then resolved in one serial pass, which is what keeps removal
//! from corrupting iteration and keeps the outcome independent of the order
//! organisms were processed in.

use std::collections::BTreeMap;

use tracing::debug;

use super::food::FoodItem;
use super::organism::Organism;

/// One organism's claim on one food item, recorded during the scan phase.
#[derive(Debug, Clone, Copy)]
pub struct FoodClaim {
    /// Index of the claiming organism in the world's organism vector.
    pub organism_index: usize,
    /// Index of the claimed food item in the world's food vector.
    pub food_index: usize,
    /// Distance between the two at claim time.
    pub distance: f32,
}

/// Resolves all claims collected during a tick.
///
/// Each food item goes to exactly one claimant: the closest, with ties broken
/// by lowest organism id. The winner gains the item's energy and the item is
/// marked consumed (the world sweeps consumed items afterwards).
///
/// # Returns
///
/// Ids of the food items consumed this tick, in ascending food-index order.
pub fn resolve_food_claims(
    organisms: &mut [Organism],
    food: &mut [FoodItem],
    claims: Vec<FoodClaim>,
) -> Vec<u64> {
    let mut claims_by_item: BTreeMap<usize, Vec<FoodClaim>> = BTreeMap::new();
    for claim in claims {
        claims_by_item.entry(claim.food_index).or_default().push(claim);
    }

    let mut consumed = Vec::new();
    for (food_index, claimants) in claims_by_item {
        let winner = claimants.into_iter().min_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| organisms[a.organism_index].id.cmp(&organisms[b.organism_index].id))
        });
        let Some(winner) = winner else { continue };

        let item = &mut food[food_index];
        let organism = &mut organisms[winner.organism_index];
        organism.gain_energy(item.energy);
        debug!(organism = organism.id, food = item.id, "food consumed");
        item.consume();
        consumed.push(item.id);
    }

    consumed
}
