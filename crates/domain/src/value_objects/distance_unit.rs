//! Distance unit value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Meters per statute mile, as used for display conversion
pub const METERS_PER_MILE: f64 = 1609.34;

/// Unit system used when presenting distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers
    #[default]
    Metric,
    /// Miles
    Imperial,
}

impl DistanceUnit {
    /// Meters per displayed unit
    #[must_use]
    pub const fn divisor(&self) -> f64 {
        match self {
            Self::Metric => 1000.0,
            Self::Imperial => METERS_PER_MILE,
        }
    }

    /// Suffix appended to formatted distances
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "miles",
        }
    }

    /// Convert meters into this unit
    #[must_use]
    pub fn from_meters(&self, meters: f64) -> f64 {
        meters / self.divisor()
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("metric"),
            Self::Imperial => f.write_str("imperial"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "km" => Ok(Self::Metric),
            "imperial" | "miles" | "mi" => Ok(Self::Imperial),
            other => Err(DomainError::invalid_input(format!(
                "unknown distance unit '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_conversion() {
        assert!((DistanceUnit::Metric.from_meters(12_345.0) - 12.345).abs() < 1e-9);
        assert_eq!(DistanceUnit::Metric.suffix(), "km");
    }

    #[test]
    fn imperial_conversion() {
        assert!((DistanceUnit::Imperial.from_meters(1609.34) - 1.0).abs() < 1e-9);
        assert_eq!(DistanceUnit::Imperial.suffix(), "miles");
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(
            "Imperial".parse::<DistanceUnit>().unwrap(),
            DistanceUnit::Imperial
        );
        assert_eq!(DistanceUnit::Metric.to_string(), "metric");
        assert!("parsecs".parse::<DistanceUnit>().is_err());
    }
}
