//! Encoded polyline codec.
//!
//! Converts coordinate sequences to and from Google's [encoded polyline
//! format](https://developers.google.com/maps/documentation/utilities/polylinealgorithm):
//! each axis is scaled to a fixed-point integer, delta-encoded against the
//! previous point, zigzag-mapped to an unsigned value and written as
//! little-endian 5-bit chunks offset into printable ASCII (63..=126).
//!
//! Scaling rounds with [`f64::round`], i.e. ties go away from zero, so
//! `0.000005` encodes as `1` at precision 5 and `-0.000005` as `-1`.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::{CodecError, DecodeError};

/// Precision of the standard polyline format (1e5, about 1.1 m).
pub const DEFAULT_PRECISION: u32 = 5;

/// Highest supported precision. Keeps scaled longitudes well inside i64.
pub const MAX_PRECISION: u32 = 10;

const CHAR_OFFSET: u8 = 63;
const MIN_CHAR: u8 = 63;
const MAX_CHAR: u8 = 126;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1F;
const CONTINUATION: u64 = 0x20;

/// Polyline encoder/decoder for a fixed precision.
///
/// The default codec uses precision 5 (the Google format); OSRM and
/// Valhalla also speak `polyline6`, available via
/// [`PolylineCodec::with_precision`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineCodec {
    precision: u32,
    factor: f64,
}

impl Default for PolylineCodec {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            factor: 1e5,
        }
    }
}

impl PolylineCodec {
    /// Creates a codec scaling by `10^precision`.
    pub fn with_precision(precision: u32) -> Result<Self, CodecError> {
        if !(1..=MAX_PRECISION).contains(&precision) {
            return Err(CodecError::UnsupportedPrecision(precision));
        }
        Ok(Self {
            precision,
            factor: 10f64.powi(precision as i32),
        })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Fixed-point scale factor (`10^precision`).
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Encodes a coordinate sequence. The empty sequence encodes to `""`.
    pub fn encode(&self, coords: &[Coordinate]) -> String {
        // Typical track deltas take 2-4 chars per axis.
        let mut out = String::with_capacity(coords.len() * 8);
        let mut prev_lat = 0i64;
        let mut prev_lng = 0i64;

        for coord in coords {
            let lat = self.scale(coord.lat);
            let lng = self.scale(coord.lng);
            write_value(&mut out, lat.wrapping_sub(prev_lat));
            write_value(&mut out, lng.wrapping_sub(prev_lng));
            prev_lat = lat;
            prev_lng = lng;
        }

        out
    }

    /// Decodes an encoded polyline, keeping every point decoded before the
    /// first structural error.
    ///
    /// Never fails: a string that ends mid-value, or contains a byte
    /// outside the polyline alphabet, yields the fully decoded prefix. Use
    /// [`PolylineCodec::try_decode`] or [`crate::validate::validate`] when
    /// a damaged string must be rejected instead.
    pub fn decode(&self, encoded: &str) -> Vec<Coordinate> {
        let mut coords = Vec::with_capacity(encoded.len() / 4);
        for point in self.points(encoded) {
            match point {
                Ok(coord) => coords.push(coord),
                Err(err) => {
                    tracing::debug!(
                        decoded = coords.len(),
                        "truncating malformed polyline: {}",
                        err
                    );
                    break;
                }
            }
        }
        coords
    }

    /// Decodes an encoded polyline, failing on the first structural error.
    pub fn try_decode(&self, encoded: &str) -> Result<Vec<Coordinate>, DecodeError> {
        self.points(encoded).collect()
    }

    /// Lazily decodes points from an encoded polyline.
    ///
    /// The iterator yields at most one error and then stops.
    pub fn points<'a>(&self, encoded: &'a str) -> Points<'a> {
        Points {
            bytes: encoded.as_bytes(),
            pos: 0,
            lat: 0,
            lng: 0,
            factor: self.factor,
            failed: false,
        }
    }

    fn scale(&self, degrees: f64) -> i64 {
        // Saturating cast: NaN maps to 0, infinities to i64::MIN/MAX.
        (degrees * self.factor).round() as i64
    }
}

/// Iterator over the points of an encoded polyline.
///
/// Created by [`PolylineCodec::points`].
#[derive(Debug, Clone)]
pub struct Points<'a> {
    bytes: &'a [u8],
    pos: usize,
    lat: i64,
    lng: i64,
    factor: f64,
    failed: bool,
}

impl Points<'_> {
    fn read_point(&mut self) -> Result<Coordinate, DecodeError> {
        let d_lat = self.read_value()?;
        let d_lng = self.read_value()?;
        self.lat = self.lat.wrapping_add(d_lat);
        self.lng = self.lng.wrapping_add(d_lng);
        Ok(Coordinate::new(
            self.lat as f64 / self.factor,
            self.lng as f64 / self.factor,
        ))
    }

    fn read_value(&mut self) -> Result<i64, DecodeError> {
        let start = self.pos;
        let mut value = 0u64;
        let mut shift = 0u32;

        loop {
            let Some(&byte) = self.bytes.get(self.pos) else {
                return Err(DecodeError::Truncated { offset: self.pos });
            };
            if !(MIN_CHAR..=MAX_CHAR).contains(&byte) {
                return Err(DecodeError::InvalidCharacter {
                    offset: self.pos,
                    byte,
                });
            }

            let chunk = u64::from(byte - CHAR_OFFSET);
            let bits = chunk & CHUNK_MASK;
            // The 13th chunk only has room for 4 bits.
            let overflows = shift >= u64::BITS
                || (shift > u64::BITS - CHUNK_BITS && bits >> (u64::BITS - shift) != 0);
            if overflows {
                return Err(DecodeError::Overflow { offset: start });
            }

            value |= bits << shift;
            self.pos += 1;

            if chunk < CONTINUATION {
                return Ok(unzigzag(value));
            }
            shift += CHUNK_BITS;
        }
    }
}

impl Iterator for Points<'_> {
    type Item = Result<Coordinate, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        let point = self.read_point();
        self.failed = point.is_err();
        Some(point)
    }
}

impl std::iter::FusedIterator for Points<'_> {}

/// Maps a signed delta so small magnitudes of either sign stay small.
///
/// Same as `v < 0 ? !(v << 1) : v << 1`.
fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

fn write_value(out: &mut String, delta: i64) {
    let mut value = zigzag(delta);
    while value >= CONTINUATION {
        out.push(char::from(((value & CHUNK_MASK) | CONTINUATION) as u8 + CHAR_OFFSET));
        value >>= CHUNK_BITS;
    }
    out.push(char::from(value as u8 + CHAR_OFFSET));
}

/// Encodes with the default precision-5 codec.
pub fn encode(coords: &[Coordinate]) -> String {
    PolylineCodec::default().encode(coords)
}

/// Decodes with the default precision-5 codec, truncating on malformed input.
pub fn decode(encoded: &str) -> Vec<Coordinate> {
    PolylineCodec::default().decode(encoded)
}

/// Strictly decodes with the default precision-5 codec.
pub fn try_decode(encoded: &str) -> Result<Vec<Coordinate>, DecodeError> {
    PolylineCodec::default().try_decode(encoded)
}

/// A route geometry held as decoded coordinates.
///
/// Encoding to the compact string form happens at the boundary (storage,
/// transmission); everything in between works on the points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes a precision-5 encoded polyline (permissively).
    pub fn from_encoded(encoded: &str) -> Self {
        Self::new(decode(encoded))
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Encodes the points with the default precision-5 codec.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}
