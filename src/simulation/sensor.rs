//! Nearest-neighbor sensing queries.
//!
//! Sensing is a stateless linear scan: O(n) per query and O(n·m) per tick
//! across all organisms and food items. That ceiling is accepted at current
//! population scales; a spatial index is the known optimization if
//! populations grow past a few thousand entities.

use ndarray::Array1;

use super::geometric_utils::euclidean_distance;
use super::locatable::Locatable;

/// Finds the candidate nearest to `origin`, if any lies strictly within
/// `max_radius`.
///
/// Scans in slice order and keeps the first minimum found, so an exact
/// distance tie resolves to the earlier candidate. Ties are measure-zero for
/// continuous coordinates and no stronger guarantee is made.
///
/// # Arguments
///
/// * `origin` - Point the search is centered on
/// * `candidates` - Entities to search over
/// * `max_radius` - Exclusive upper bound on the accepted distance
///
/// # Returns
///
/// Index of the nearest candidate, or `None` when none is in range.
pub fn nearest<T: Locatable>(
    origin: &Array1<f32>,
    candidates: &[T],
    max_radius: f32,
) -> Option<usize> {
    let mut closest = None;
    let mut closest_distance = max_radius;

    for (index, candidate) in candidates.iter().enumerate() {
        let distance = euclidean_distance(origin, candidate.pos());
        if distance < closest_distance {
            closest_distance = distance;
            closest = Some(index);
        }
    }

    closest
}
