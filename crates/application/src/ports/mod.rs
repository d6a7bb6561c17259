//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! the remote services. Adapters in the infrastructure layer implement these
//! ports on top of the integration clients.

mod geocoder_port;
mod places_port;
mod router_port;

pub use geocoder_port::GeocoderPort;
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
pub use places_port::PlacesPort;
#[cfg(test)]
pub use places_port::MockPlacesPort;
pub use router_port::RouterPort;
#[cfg(test)]
pub use router_port::MockRouterPort;
