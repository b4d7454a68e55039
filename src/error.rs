//! Error types for strict decoding, validation, and codec configuration.
//!
//! The plain operations of this crate are total and never return these;
//! they back the strict variants (`try_decode`, `validate`) and
//! constructors that take configuration.

use crate::coordinate::Coordinate;

/// Structural problem found while decoding an encoded polyline.
///
/// Offsets are byte positions into the encoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid polyline character {byte:#04x} at offset {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },

    #[error("polyline ends mid-value at offset {offset}")]
    Truncated { offset: usize },

    #[error("polyline value starting at offset {offset} does not fit in 64 bits")]
    Overflow { offset: usize },
}

/// Why an encoded polyline was rejected by the validator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("polyline contains no points")]
    Empty,

    #[error("malformed polyline: {0}")]
    Malformed(#[from] DecodeError),

    #[error("point {index} is out of range: ({}, {})", .coordinate.lat, .coordinate.lng)]
    OutOfRange { index: usize, coordinate: Coordinate },
}

/// Invalid codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unsupported polyline precision {0} (expected 1..=10)")]
    UnsupportedPrecision(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::InvalidCharacter { offset: 3, byte: b' ' };
        assert_eq!(err.to_string(), "invalid polyline character 0x20 at offset 3");
        assert_eq!(
            DecodeError::Truncated { offset: 7 }.to_string(),
            "polyline ends mid-value at offset 7"
        );
    }

    #[test]
    fn test_validation_error_wraps_decode_error() {
        let err: ValidationError = DecodeError::Truncated { offset: 2 }.into();
        assert_eq!(err, ValidationError::Malformed(DecodeError::Truncated { offset: 2 }));
        assert!(err.to_string().starts_with("malformed polyline"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ValidationError::OutOfRange {
            index: 1,
            coordinate: Coordinate::new(91.0, 0.0),
        };
        assert_eq!(err.to_string(), "point 1 is out of range: (91, 0)");
    }
}
