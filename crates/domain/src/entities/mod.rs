//! Domain entities - Results produced per user action and the session state

mod place_hit;
mod resolved_location;
mod route;
mod selection;

pub use place_hit::PlaceHit;
pub use resolved_location::ResolvedLocation;
pub use route::{RouteResult, RouteStep};
pub use selection::{Role, RoleState, SelectionState};
