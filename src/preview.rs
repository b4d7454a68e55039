//! Stride down-sampling for lightweight route previews.
//!
//! Much cheaper than Douglas-Peucker and blind to shape: fine for drawing a
//! thumbnail, wrong for anything that needs geometric fidelity such as
//! route length.

use crate::coordinate::Coordinate;

/// Down-samples a route to at most `max_points` points.
///
/// Routes that already fit are returned unchanged. Otherwise every
/// `len / max_points`-th point is taken starting at index 0, capped at
/// `max_points`. The last point is not guaranteed to survive.
pub fn sample(coords: &[Coordinate], max_points: usize) -> Vec<Coordinate> {
    if coords.len() <= max_points {
        return coords.to_vec();
    }
    if max_points == 0 {
        return Vec::new();
    }

    let stride = coords.len() / max_points;
    coords
        .iter()
        .step_by(stride)
        .take(max_points)
        .copied()
        .collect()
}
