//! Validation of externally supplied encoded polylines.
//!
//! Decoding is permissive, so this is where damaged input gets rejected.
//! A string is valid when it decodes cleanly to at least one point and
//! every point lies within latitude [-90, 90] and longitude [-180, 180].

use crate::error::ValidationError;
use crate::polyline::PolylineCodec;

/// Whether `encoded` is a structurally sound, non-empty polyline with all
/// points in range. Truncated strings are invalid.
pub fn is_valid(encoded: &str) -> bool {
    validate(encoded).is_ok()
}

/// Validates `encoded` with the default precision-5 codec, returning the
/// number of points.
pub fn validate(encoded: &str) -> Result<usize, ValidationError> {
    validate_with(&PolylineCodec::default(), encoded)
}

/// Validates `encoded` with the given codec, returning the number of points.
///
/// Stops at the first problem found.
pub fn validate_with(codec: &PolylineCodec, encoded: &str) -> Result<usize, ValidationError> {
    let mut count = 0;
    for (index, point) in codec.points(encoded).enumerate() {
        let coordinate = point?;
        if !coordinate.is_in_range() {
            return Err(ValidationError::OutOfRange { index, coordinate });
        }
        count += 1;
    }

    if count == 0 {
        return Err(ValidationError::Empty);
    }
    Ok(count)
}
