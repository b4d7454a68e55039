//! Summary geometry derived from a coordinate sequence.
//!
//! Nothing here is cached; every value is recomputed from the points.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::haversine::Haversine;
use crate::traits::GeodesicDistance;

/// Multiplier applied to the tight min/max box so a framed route doesn't
/// touch the viewport edges.
pub const REGION_PADDING: f64 = 1.3;

/// A padded region framing a route: center plus per-axis span in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub center: Coordinate,
    pub lat_span: f64,
    pub lng_span: f64,
}

impl BoundingRegion {
    /// South-west corner of the padded region.
    pub fn min(&self) -> Coordinate {
        Coordinate::new(
            self.center.lat - self.lat_span / 2.0,
            self.center.lng - self.lng_span / 2.0,
        )
    }

    /// North-east corner of the padded region.
    pub fn max(&self) -> Coordinate {
        Coordinate::new(
            self.center.lat + self.lat_span / 2.0,
            self.center.lng + self.lng_span / 2.0,
        )
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.lat..=max.lat).contains(&coord.lat) && (min.lng..=max.lng).contains(&coord.lng)
    }
}

/// Aggregate summary of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteStatistics {
    pub total_distance_m: f64,
    pub point_count: usize,
    pub bounding_region: Option<BoundingRegion>,
}

/// Route length in meters using the haversine formula.
///
/// Sequences of 0 or 1 points have length 0.
pub fn total_distance(coords: &[Coordinate]) -> f64 {
    total_distance_with(coords, &Haversine::default())
}

/// Route length in meters using the given distance primitive.
pub fn total_distance_with<D: GeodesicDistance>(coords: &[Coordinate], distance: &D) -> f64 {
    coords
        .windows(2)
        .fold(0.0, |total, pair| total + distance.distance_m(pair[0], pair[1]))
}

/// Padded region framing all points, or `None` for an empty sequence.
///
/// The center is the midpoint of the tight min/max box and each span is
/// that box's extent times [`REGION_PADDING`]. Antimeridian crossings are
/// not unwrapped.
pub fn bounding_region(coords: &[Coordinate]) -> Option<BoundingRegion> {
    let (first, rest) = coords.split_first()?;

    let (mut min_lat, mut max_lat) = (first.lat, first.lat);
    let (mut min_lng, mut max_lng) = (first.lng, first.lng);
    for coord in rest {
        min_lat = min_lat.min(coord.lat);
        max_lat = max_lat.max(coord.lat);
        min_lng = min_lng.min(coord.lng);
        max_lng = max_lng.max(coord.lng);
    }

    Some(BoundingRegion {
        center: Coordinate::new((min_lat + max_lat) / 2.0, (min_lng + max_lng) / 2.0),
        lat_span: (max_lat - min_lat) * REGION_PADDING,
        lng_span: (max_lng - min_lng) * REGION_PADDING,
    })
}

/// Distance, point count and bounding region in one call.
pub fn route_statistics(coords: &[Coordinate]) -> RouteStatistics {
    route_statistics_with(coords, &Haversine::default())
}

pub fn route_statistics_with<D: GeodesicDistance>(
    coords: &[Coordinate],
    distance: &D,
) -> RouteStatistics {
    RouteStatistics {
        total_distance_m: total_distance_with(coords, distance),
        point_count: coords.len(),
        bounding_region: bounding_region(coords),
    }
}
