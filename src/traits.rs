//! Seams to collaborators outside the geometry core.
//!
//! Kept minimal: callers plug in their own primitives, and the crate ships
//! a default where one is cheap to provide.

use crate::coordinate::Coordinate;

/// Great-circle distance between two coordinates.
///
/// Route length and statistics are computed against this trait rather
/// than a fixed formula. The bundled [`crate::haversine::Haversine`]
/// provider is the default; closures of the shape
/// `Fn(Coordinate, Coordinate) -> f64` work as well.
pub trait GeodesicDistance {
    /// Distance from `a` to `b` in meters.
    fn distance_m(&self, a: Coordinate, b: Coordinate) -> f64;
}

impl<F> GeodesicDistance for F
where
    F: Fn(Coordinate, Coordinate) -> f64,
{
    fn distance_m(&self, a: Coordinate, b: Coordinate) -> f64 {
        self(a, b)
    }
}
