//! Adapters implementing the application ports on top of the integration clients

mod graphhopper_adapter;
mod places_adapter;

pub use graphhopper_adapter::GraphHopperAdapter;
pub use places_adapter::PlacesAdapter;
