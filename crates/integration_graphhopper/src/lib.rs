//! GraphHopper integration for the route planner
//!
//! Provides place-name resolution via the
//! [GraphHopper Geocoding API](https://docs.graphhopper.com/#tag/Geocoding-API)
//! and point-to-point routing via the
//! [GraphHopper Routing API](https://docs.graphhopper.com/#tag/Routing-API).
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern of the other integration crates.
//! [`GeocodingClient`] defines free-text resolution and autocomplete,
//! implemented by [`GraphHopperGeocodingClient`]. [`RoutingClient`] returns the
//! top-ranked path between two points, implemented by
//! [`GraphHopperRoutingClient`]. Both share one [`GraphHopperConfig`] carrying
//! the static API key.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::TravelMode;
//! use integration_graphhopper::{
//!     GeocodingClient, GraphHopperConfig, GraphHopperGeocodingClient,
//!     GraphHopperRoutingClient, RoutingClient,
//! };
//!
//! let config = GraphHopperConfig::with_api_key("my-key");
//! let geocoder = GraphHopperGeocodingClient::new(&config)?;
//! let router = GraphHopperRoutingClient::new(&config)?;
//!
//! let from = geocoder.resolve("Berlin", 1).await?;
//! let to = geocoder.resolve("Hamburg", 1).await?;
//! let route = router.route(from[0].point(), to[0].point(), TravelMode::Car).await?;
//! ```

mod config;
mod error;
mod geocoding;
mod http;
mod routing;

pub use config::GraphHopperConfig;
pub use error::GraphHopperError;
pub use geocoding::{
    GeocodingClient, GraphHopperGeocodingClient, MIN_RESOLVE_CHARS, MIN_SUGGEST_CHARS,
};
pub use routing::{GraphHopperRoutingClient, RoutingClient};
