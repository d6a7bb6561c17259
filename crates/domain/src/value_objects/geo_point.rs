//! Geographic point value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A WGS84 point with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint", into = "RawPoint")]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoPoint {
    /// Create a new point with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in
    /// [-90, 90] or longitude is not in [-180, 180] (NaN is rejected too).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Arithmetic mean of two points
    ///
    /// Not a great-circle midpoint: good enough for picking a search anchor
    /// halfway along a route, and never leaves the valid range.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }

    /// Format as the `lat,lng` pair used in query strings
    #[must_use]
    pub fn to_query_pair(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[derive(Serialize, Deserialize)]
struct RawPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = DomainError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl From<GeoPoint> for RawPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_coordinates() {
        let point = GeoPoint::new(52.52, 13.405).expect("valid coordinates");
        assert!((point.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((point.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoPoint::new(0.0, 181.0).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_midpoint() {
        let a = GeoPoint::new(10.0, 20.0).expect("valid");
        let b = GeoPoint::new(20.0, 40.0).expect("valid");
        let mid = a.midpoint(&b);
        assert!((mid.latitude() - 15.0).abs() < f64::EPSILON);
        assert!((mid.longitude() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_query_pair() {
        let point = GeoPoint::new(48.8566, 2.3522).expect("valid");
        assert_eq!(point.to_query_pair(), "48.8566,2.3522");
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(52.52, 13.405).expect("valid");
        let display = format!("{point}");
        assert!(display.contains("52.52"));
        assert!(display.contains("13.405"));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let result: Result<GeoPoint, _> =
            serde_json::from_str(r#"{"latitude": 123.0, "longitude": 0.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization() {
        let point = GeoPoint::new(52.52, 13.405).expect("valid");
        let json = serde_json::to_string(&point).expect("serialize");
        let deserialized: GeoPoint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(point, deserialized);
    }

    proptest! {
        #[test]
        fn midpoint_stays_in_range(
            lat1 in -90.0f64..=90.0,
            lng1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lng2 in -180.0f64..=180.0,
        ) {
            let a = GeoPoint::new(lat1, lng1).expect("valid");
            let b = GeoPoint::new(lat2, lng2).expect("valid");
            let mid = a.midpoint(&b);
            prop_assert!(GeoPoint::new(mid.latitude(), mid.longitude()).is_ok());
        }
    }
}
