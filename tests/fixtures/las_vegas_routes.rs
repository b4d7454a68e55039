//! Real Las Vegas locations chained into routes.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

#![allow(dead_code)]

use route_polyline::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Strip walk, south to north
// ============================================================================

pub const STRIP_WALK: &[Location] = &[
    Location::new("Strip Steak", 36.0908722, -115.1776176),
    Location::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
    Location::new("Slice of Vegas Pizza", 36.0944330, -115.1759954),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("Earl of Sandwich Planet Hollywood", 36.1093912, -115.1720087),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
];

// ============================================================================
// Henderson / East Las Vegas Area
// ============================================================================

pub const HENDERSON_LOCATIONS: &[Location] = &[
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
    Location::new("Naga", 36.0137634, -114.9928676),
    Location::new("RibCage", 35.9949754, -115.0999810),
    Location::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Location::new("Sunset Station Area", 36.0614, -115.0631),
];

pub fn strip_walk() -> Vec<Coordinate> {
    STRIP_WALK.iter().map(Location::coord).collect()
}

pub fn henderson_loop() -> Vec<Coordinate> {
    let mut route: Vec<Coordinate> = HENDERSON_LOCATIONS.iter().map(Location::coord).collect();
    route.push(HENDERSON_LOCATIONS[0].coord());
    route
}

/// A dense GPS-style track from the south to the north end of the Strip,
/// sampled roughly every meter with a deterministic sensor wobble.
pub fn dense_strip_track(points: usize) -> Vec<Coordinate> {
    let start = STRIP_WALK[0].coord();
    let end = STRIP_WALK[STRIP_WALK.len() - 1].coord();
    (0..points)
        .map(|i| {
            let t = i as f64 / (points.max(2) - 1) as f64;
            let wobble = (i as f64 * 0.7).sin() * 0.000003;
            Coordinate::new(
                start.lat + (end.lat - start.lat) * t + wobble,
                start.lng + (end.lng - start.lng) * t + (t * 12.0).sin() * 0.002,
            )
        })
        .collect()
}

/// Rounds each axis to 5 decimal places (the polyline grid).
pub fn quantized(route: &[Coordinate]) -> Vec<Coordinate> {
    route
        .iter()
        .map(|c| {
            Coordinate::new(
                (c.lat * 1e5).round() / 1e5,
                (c.lng * 1e5).round() / 1e5,
            )
        })
        .collect()
}
