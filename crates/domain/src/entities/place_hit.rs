//! A point of interest found near an anchor

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// A labeled point returned by a places search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceHit {
    /// Full label of the place
    pub display_name: String,
    /// Location of the place
    pub point: GeoPoint,
}

impl PlaceHit {
    /// Create a place hit
    #[must_use]
    pub fn new(display_name: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            display_name: display_name.into(),
            point,
        }
    }
}
