//! Application services - Use case implementations

mod action_runner;
mod route_planner_service;
pub mod route_summarizer;

pub use action_runner::{ActionHandle, ActionRunner};
pub use route_planner_service::{
    Anchor, PanelOutcome, PlaceCategory, PlacesPanel, PlannerSettings, RoutePlan,
    RoutePlannerService, RouteRequest, validate_request,
};
pub use route_summarizer::{DurationParts, RouteSummary, summarize};
