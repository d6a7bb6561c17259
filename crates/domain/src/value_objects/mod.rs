//! Value Objects - Immutable, identity-less domain primitives

mod distance_unit;
mod geo_point;
mod travel_mode;

pub use distance_unit::DistanceUnit;
pub use geo_point::GeoPoint;
pub use travel_mode::TravelMode;
