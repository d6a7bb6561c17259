//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the GraphHopper and Nominatim
//! clients, and owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;
mod wiring;

pub use adapters::*;
pub use config::{AppConfig, GraphHopperAppConfig, PlannerConfig};
pub use telemetry::{init_tracing, log_filter_from_verbosity};
pub use wiring::build_route_planner;
