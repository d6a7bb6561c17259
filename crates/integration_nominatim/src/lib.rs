//! Nominatim places search for the route planner
//!
//! Finds points of interest ("restaurant", "fuel", ...) near a coordinate using
//! the [Nominatim](https://nominatim.openstreetmap.org) search API restricted
//! to a bounding box around the anchor.
//!
//! [`PlacesClient`] defines the search interface, implemented by
//! [`NominatimPlacesClient`].

mod client;
mod config;
mod error;

pub use client::{BoundingBox, KM_PER_DEGREE, NominatimPlacesClient, PlacesClient};
pub use config::NominatimConfig;
pub use error::PlacesError;
