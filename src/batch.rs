//! Data-parallel helpers over many independent routes.
//!
//! Routes share nothing, so each batch is a plain rayon map. Output order
//! always matches input order.

use rayon::prelude::*;

use crate::coordinate::Coordinate;
use crate::geometry::{self, RouteStatistics};
use crate::polyline::PolylineCodec;
use crate::simplify;

/// Encodes each route with the default codec.
pub fn encode_all<R>(routes: &[R]) -> Vec<String>
where
    R: AsRef<[Coordinate]> + Sync,
{
    encode_all_with(&PolylineCodec::default(), routes)
}

pub fn encode_all_with<R>(codec: &PolylineCodec, routes: &[R]) -> Vec<String>
where
    R: AsRef<[Coordinate]> + Sync,
{
    tracing::debug!(routes = routes.len(), "encoding batch");
    routes
        .par_iter()
        .map(|route| codec.encode(route.as_ref()))
        .collect()
}

/// Decodes each string permissively with the default codec.
pub fn decode_all<S>(encoded: &[S]) -> Vec<Vec<Coordinate>>
where
    S: AsRef<str> + Sync,
{
    decode_all_with(&PolylineCodec::default(), encoded)
}

pub fn decode_all_with<S>(codec: &PolylineCodec, encoded: &[S]) -> Vec<Vec<Coordinate>>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(routes = encoded.len(), "decoding batch");
    encoded
        .par_iter()
        .map(|polyline| codec.decode(polyline.as_ref()))
        .collect()
}

/// Simplifies each route with the same tolerance.
pub fn simplify_all<R>(routes: &[R], tolerance: f64) -> Vec<Vec<Coordinate>>
where
    R: AsRef<[Coordinate]> + Sync,
{
    tracing::debug!(routes = routes.len(), tolerance, "simplifying batch");
    routes
        .par_iter()
        .map(|route| simplify::simplify(route.as_ref(), tolerance))
        .collect()
}

/// Computes statistics for each route using haversine distances.
pub fn statistics_all<R>(routes: &[R]) -> Vec<RouteStatistics>
where
    R: AsRef<[Coordinate]> + Sync,
{
    routes
        .par_iter()
        .map(|route| geometry::route_statistics(route.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::from_tuples;
    use crate::polyline::{decode, encode};

    fn routes() -> Vec<Vec<Coordinate>> {
        (0..64)
            .map(|r| {
                (0..=r)
                    .map(|i| Coordinate::new(36.0 + r as f64 * 0.01, -115.0 + i as f64 * 0.001))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_encode_all_matches_sequential() {
        let routes = routes();
        let encoded = encode_all(&routes);
        let expected: Vec<String> = routes.iter().map(|r| encode(r)).collect();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_decode_all_preserves_order() {
        let encoded = vec!["_p~iF~ps|U_ulLnnqC", "", "??"];
        let decoded = decode_all(&encoded);
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0], decode("_p~iF~ps|U_ulLnnqC"));
        assert!(decoded[1].is_empty());
        assert_eq!(decoded[2], from_tuples(&[(0.0, 0.0)]));
    }

    #[test]
    fn test_simplify_all_matches_sequential() {
        let routes = routes();
        let simplified = simplify_all(&routes, 0.0);
        for (route, result) in routes.iter().zip(&simplified) {
            assert_eq!(result, &simplify::simplify(route, 0.0));
        }
    }

    #[test]
    fn test_statistics_all() {
        let routes = routes();
        let stats = statistics_all(&routes);
        assert_eq!(stats.len(), routes.len());
        assert_eq!(stats[0].point_count, 1);
        assert_eq!(stats[0].total_distance_m, 0.0);
        assert_eq!(stats[10].point_count, 11);
        assert!(stats[10].total_distance_m > 0.0);
    }

    #[test]
    fn test_slices_of_slices_work() {
        let a = from_tuples(&[(1.0, 1.0)]);
        let b = from_tuples(&[(2.0, 2.0), (3.0, 3.0)]);
        let batch: Vec<&[Coordinate]> = vec![a.as_slice(), b.as_slice()];
        let encoded = encode_all(&batch);
        assert_eq!(decode_all(&encoded), vec![a, b]);
    }
}
