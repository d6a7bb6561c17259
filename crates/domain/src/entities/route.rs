//! Route returned by the router

use serde::{Deserialize, Serialize};

/// One turn-by-turn instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Instruction as worded by the routing service
    pub instruction_text: String,
    /// Length of this step in meters
    pub distance_meters: f64,
}

impl RouteStep {
    /// Create a step, clamping negative distances to zero
    #[must_use]
    pub fn new(instruction_text: impl Into<String>, distance_meters: f64) -> Self {
        Self {
            instruction_text: instruction_text.into(),
            distance_meters: distance_meters.max(0.0),
        }
    }
}

/// The best path between two points, in the router's native units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Total length in meters
    pub distance_meters: f64,
    /// Total travel time in milliseconds
    pub duration_millis: u64,
    /// Ordered instructions
    pub steps: Vec<RouteStep>,
}

impl RouteResult {
    /// Create a route result, clamping a negative distance to zero
    #[must_use]
    pub fn new(distance_meters: f64, duration_millis: u64, steps: Vec<RouteStep>) -> Self {
        Self {
            distance_meters: distance_meters.max(0.0),
            duration_millis,
            steps,
        }
    }
}
