//! Test fixtures for route-polyline.
//!
//! Provides realistic route data:
//! - Real Las Vegas Strip locations (from OpenStreetMap) chained into a walk
//! - Deterministic dense GPS-style tracks with jitter

pub mod las_vegas_routes;

pub use las_vegas_routes::*;
