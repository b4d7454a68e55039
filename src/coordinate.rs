//! Geographic coordinate value type.

use serde::{Deserialize, Serialize};

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A (latitude, longitude) pair in degrees.
///
/// Plain value type: two coordinates are the same point iff both axes
/// compare equal. Nothing here rejects out-of-range values; use
/// [`Coordinate::is_in_range`] (or the validator) where that matters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether latitude is within [-90, 90] and longitude within [-180, 180].
    ///
    /// NaN on either axis is out of range.
    pub fn is_in_range(&self) -> bool {
        LATITUDE_RANGE.contains(&self.lat) && LONGITUDE_RANGE.contains(&self.lng)
    }

    /// Returns the coordinate as a (lat, lng) tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lng)
    }
}

/// Converts (lat, lng) tuples into a coordinate sequence.
pub fn from_tuples(points: &[(f64, f64)]) -> Vec<Coordinate> {
    points.iter().copied().map(Coordinate::from).collect()
}
