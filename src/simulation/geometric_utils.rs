//! Geometric utility functions for distance calculations and bounds clamping.

use ndarray::Array1;

/// Calculates the Euclidean distance between two points.
pub fn euclidean_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

/// Clamps a position to `[margin, dimension - margin]` on both axes.
///
/// The min/max composition resolves to `margin` when the margin exceeds half
/// a dimension, so degenerate bounds never panic.
pub fn clamp_to_bounds(pos: &mut Array1<f32>, margin: f32, width: f32, height: f32) {
    pos[0] = pos[0].min(width - margin).max(margin);
    pos[1] = pos[1].min(height - margin).max(margin);
}
