//! Domain layer for the route planner
//!
//! Contains the coordinate and route value objects, the location entities
//! produced by the remote services, and the per-session selection state.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
