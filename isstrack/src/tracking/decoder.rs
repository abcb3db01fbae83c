//! Raw observation decoding.
//!
//! The upstream feed encodes coordinates as text, so a record is validated in
//! a second stage rather than trusted from deserialization. Decoding is pure:
//! the same record always yields the same result.

use super::state::{CoordinateField, DecodeError, Position};
use crate::source::RawObservation;

/// Decode a raw record into a validated [`Position`].
///
/// Latitude is checked before longitude. A field fails if it does not parse as
/// a base-10 float or lies outside its range. The timestamp is copied through
/// unchanged.
pub fn decode(raw: &RawObservation) -> Result<Position, DecodeError> {
    let latitude = parse_coordinate(&raw.latitude, CoordinateField::Latitude)?;
    let longitude = parse_coordinate(&raw.longitude, CoordinateField::Longitude)?;

    Position::new(latitude, longitude, raw.timestamp)
}

fn parse_coordinate(text: &str, field: CoordinateField) -> Result<f64, DecodeError> {
    text.parse::<f64>().map_err(|_| DecodeError::MalformedCoordinate(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(latitude: &str, longitude: &str, timestamp: i64, message: &str) -> RawObservation {
        RawObservation {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            timestamp,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_decode_valid_record() {
        let position = decode(&raw("51.5074", "-0.1278", 1694700000, "success")).unwrap();

        assert_eq!(position, Position::new(51.5074, -0.1278, 1694700000).unwrap());
    }

    #[test]
    fn test_decode_non_numeric_latitude() {
        let result = decode(&raw("not-a-number", "0", 0, "x"));

        assert_eq!(
            result,
            Err(DecodeError::MalformedCoordinate(CoordinateField::Latitude))
        );
    }

    #[test]
    fn test_decode_out_of_range_latitude() {
        let result = decode(&raw("120.0", "0", 0, "success"));

        assert_eq!(
            result,
            Err(DecodeError::MalformedCoordinate(CoordinateField::Latitude))
        );
    }

    #[test]
    fn test_decode_bad_longitude() {
        assert_eq!(
            decode(&raw("10.0", "", 0, "success")),
            Err(DecodeError::MalformedCoordinate(CoordinateField::Longitude))
        );
        assert_eq!(
            decode(&raw("10.0", "-181", 0, "success")),
            Err(DecodeError::MalformedCoordinate(CoordinateField::Longitude))
        );
    }

    #[test]
    fn test_decode_latitude_checked_first() {
        // Both fields are bad; latitude is reported.
        let result = decode(&raw("north", "east", 0, "success"));
        assert_eq!(result.unwrap_err().field(), CoordinateField::Latitude);
    }

    #[test]
    fn test_decode_rejects_non_finite_text() {
        assert!(decode(&raw("NaN", "0", 0, "success")).is_err());
        assert!(decode(&raw("0", "inf", 0, "success")).is_err());
    }

    #[test]
    fn test_decode_rejects_padded_text() {
        assert!(decode(&raw(" 51.5", "0", 0, "success")).is_err());
    }

    #[test]
    fn test_decode_ignores_message() {
        let a = decode(&raw("-12.25", "100.5", 42, "success")).unwrap();
        let b = decode(&raw("-12.25", "100.5", 42, "anything else")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let record = raw("abc", "0", 0, "x");
        assert_eq!(decode(&record), decode(&record));
    }
}
