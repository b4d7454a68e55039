//! Haversine great-circle distance provider.
//!
//! Treats the Earth as a sphere. Error against the ellipsoid is under 0.5%,
//! which is plenty for route lengths and summaries.

use crate::coordinate::Coordinate;
use crate::traits::GeodesicDistance;

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Haversine-based distance provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    /// Sphere radius in meters.
    pub radius_m: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_m: EARTH_RADIUS_M,
        }
    }
}

impl Haversine {
    pub fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }

    /// Central angle between two points in radians.
    fn central_angle(from: Coordinate, to: Coordinate) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lng - from.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        // Rounding can push `a` a hair above 1 for antipodal points.
        2.0 * a.min(1.0).sqrt().asin()
    }
}

impl GeodesicDistance for Haversine {
    fn distance_m(&self, a: Coordinate, b: Coordinate) -> f64 {
        self.radius_m * Self::central_angle(a, b)
    }
}
