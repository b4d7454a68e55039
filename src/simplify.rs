//! Douglas-Peucker route simplification.
//!
//! Distances are planar in degree space (longitude as x, latitude as y).
//! That's a fair approximation for the short spans a single route covers,
//! and `tolerance` is therefore expressed in degrees. It under-weights
//! longitude error toward the poles.
//!
//! The divide-and-conquer is driven by an explicit stack of index ranges
//! so very long tracks can't exhaust the call stack. Output is identical to
//! the textbook recursive formulation.

use crate::coordinate::Coordinate;

/// Simplifies a route, keeping every point whose removal would move the
/// line by more than `tolerance` degrees.
///
/// Routes with fewer than 3 points are returned unchanged. The first and
/// last point are always kept. A negative or NaN tolerance behaves like 0,
/// which still removes exactly collinear points.
pub fn simplify(coords: &[Coordinate], tolerance: f64) -> Vec<Coordinate> {
    if coords.len() < 3 {
        return coords.to_vec();
    }

    let simplified: Vec<Coordinate> = simplify_indices(coords, tolerance)
        .into_iter()
        .map(|i| coords[i])
        .collect();

    tracing::debug!(
        input = coords.len(),
        output = simplified.len(),
        tolerance,
        "simplified route"
    );
    simplified
}

/// Like [`simplify`], but returns the ascending indices of the kept points.
pub fn simplify_indices(coords: &[Coordinate], tolerance: f64) -> Vec<usize> {
    let n = coords.len();
    if n < 3 {
        return (0..n).collect();
    }
    let tolerance = if tolerance > 0.0 { tolerance } else { 0.0 };

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let first = coords[start];
        let last = coords[end];
        let mut max_distance = 0.0;
        let mut split = None;

        for (i, point) in coords.iter().enumerate().take(end).skip(start + 1) {
            let distance = perpendicular_distance(*point, first, last);
            if distance > max_distance {
                max_distance = distance;
                split = Some(i);
            }
        }

        match split {
            Some(index) if max_distance > tolerance => {
                keep[index] = true;
                // Order doesn't affect the keep mask; push right first so the
                // left half is processed first, as recursion would.
                stack.push((index, end));
                stack.push((start, index));
            }
            _ => {}
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &kept)| kept.then_some(i))
        .collect()
}

/// Distance from `point` to the line through `start` and `end`, in degrees.
///
/// Falls back to the straight distance to `start` when the two anchors
/// coincide.
pub fn perpendicular_distance(point: Coordinate, start: Coordinate, end: Coordinate) -> f64 {
    let dx = end.lng - start.lng;
    let dy = end.lat - start.lat;
    let length = dx.hypot(dy);

    if length == 0.0 {
        return (point.lng - start.lng).hypot(point.lat - start.lat);
    }

    let cross = dx * (start.lat - point.lat) - dy * (start.lng - point.lng);
    cross.abs() / length
}
