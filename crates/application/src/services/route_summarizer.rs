//! Route summarizer
//!
//! Turns a [`RouteResult`] in the router's native units into display text.
//! Durations are split with integer floor division, so the printed
//! `HH:MM:SS` drops any sub-second remainder instead of rounding it.

use domain::{DistanceUnit, RouteResult, RouteStep};
use serde::{Deserialize, Serialize};

/// Display-ready view of a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Total distance, e.g. `12.3 km`
    pub distance_text: String,
    /// Total duration as `HH:MM:SS`
    pub duration_text: String,
    /// Numbered turn-by-turn lines
    pub step_texts: Vec<String>,
}

/// Hours, minutes and seconds of a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    /// Whole hours, unbounded
    pub hours: u64,
    /// Minutes within the hour
    pub minutes: u64,
    /// Seconds within the minute
    pub seconds: u64,
}

impl DurationParts {
    /// Split milliseconds, truncating toward zero at every step
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        let total_secs = millis / 1000;
        Self {
            hours: total_secs / 3600,
            minutes: (total_secs / 60) % 60,
            seconds: total_secs % 60,
        }
    }
}

/// Summarize a route in the given unit system
#[must_use]
pub fn summarize(result: &RouteResult, unit: DistanceUnit) -> RouteSummary {
    RouteSummary {
        distance_text: format_distance(result.distance_meters, unit),
        duration_text: format_duration(result.duration_millis),
        step_texts: result
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format_step(i + 1, step, unit))
            .collect(),
    }
}

/// Total distance with one decimal, e.g. `12.3 km` or `1.0 miles`
#[must_use]
pub fn format_distance(meters: f64, unit: DistanceUnit) -> String {
    format!("{:.1} {}", unit.from_meters(meters), unit.suffix())
}

/// Zero-padded `HH:MM:SS`; hours grow past two digits when needed
#[must_use]
pub fn format_duration(millis: u64) -> String {
    let DurationParts {
        hours,
        minutes,
        seconds,
    } = DurationParts::from_millis(millis);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// One numbered direction line; step distances keep two decimals
#[must_use]
pub fn format_step(number: usize, step: &RouteStep, unit: DistanceUnit) -> String {
    format!(
        "{number}. {} ({:.2} {})",
        step.instruction_text,
        unit.from_meters(step.distance_meters),
        unit.suffix()
    )
}
