//! A geocoded location

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::GeoPoint;

/// A point resolved from free text, with the label shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    point: GeoPoint,
    display_name: String,
}

impl ResolvedLocation {
    /// Create a resolved location
    #[must_use]
    pub fn new(point: GeoPoint, display_name: impl Into<String>) -> Self {
        Self {
            point,
            display_name: display_name.into(),
        }
    }

    /// Build the display label from the optional address parts
    ///
    /// Non-empty parts are joined with `", "`; `fallback` is used when
    /// every part is missing or blank.
    #[must_use]
    pub fn label_from_parts(parts: &[Option<&str>], fallback: &str) -> String {
        let label = parts
            .iter()
            .filter_map(|part| part.map(str::trim))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        if label.is_empty() {
            fallback.to_string()
        } else {
            label
        }
    }

    /// Coordinates of the location
    #[must_use]
    pub const fn point(&self) -> GeoPoint {
        self.point
    }

    /// Human-readable label
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether both locations sit on exactly the same coordinates
    #[must_use]
    pub fn same_point_as(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.point)
    }
}
