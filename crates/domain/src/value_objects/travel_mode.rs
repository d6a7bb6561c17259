//! Travel mode value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Vehicle profile requested from the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Motor vehicle
    #[default]
    Car,
    /// Bicycle
    Bike,
    /// Walking
    Foot,
}

impl TravelMode {
    /// Profile name understood by the routing service
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Foot => "foot",
        }
    }

    /// Whether fuel stations are relevant for this mode
    #[must_use]
    pub const fn needs_fuel(&self) -> bool {
        matches!(self, Self::Car)
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "foot" => Ok(Self::Foot),
            other => Err(DomainError::invalid_input(format!(
                "unknown travel mode '{other}'"
            ))),
        }
    }
}
