//! route-polyline: GPS route codec and geometric reduction
//!
//! Encodes coordinate sequences to and from the compact polyline text
//! format, simplifies routes with Douglas-Peucker, and derives summary
//! geometry (length, bounding region). Every operation is a pure function
//! over its inputs; empty or damaged input produces an empty or partial
//! result rather than an error, and strict variants are available where a
//! caller needs to reject bad data.

pub mod batch;
pub mod coordinate;
pub mod error;
pub mod geometry;
pub mod haversine;
pub mod polyline;
pub mod preview;
pub mod simplify;
pub mod traits;
pub mod validate;

pub use coordinate::Coordinate;
pub use error::{CodecError, DecodeError, ValidationError};
pub use geometry::{
    BoundingRegion, RouteStatistics, bounding_region, route_statistics, total_distance,
    total_distance_with,
};
pub use haversine::Haversine;
pub use polyline::{Polyline, PolylineCodec, decode, encode, try_decode};
pub use preview::sample;
pub use simplify::{simplify, simplify_indices};
pub use traits::GeodesicDistance;
pub use validate::{is_valid, validate};
