//! Route planning use case
//!
//! One call to [`RoutePlannerService::plan`] is one user action: validate the
//! two inputs, geocode start and destination, fetch the route, summarize it,
//! and search for places around the start, the midpoint and the destination.
//! All remote calls are issued one after another.

use std::fmt;
use std::sync::Arc;

use domain::{
    DistanceUnit, GeoPoint, PlaceHit, ResolvedLocation, Role, RouteResult, SelectionState,
    TravelMode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::route_summarizer::{RouteSummary, summarize};
use crate::error::ApplicationError;
use crate::ports::{GeocoderPort, PlacesPort, RouterPort};

/// Shortest accepted start or destination text
const MIN_INPUT_CHARS: usize = 2;

/// Tunables for the planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Candidates requested per autocomplete lookup
    pub suggestion_limit: u8,
    /// Places search radius; `None` defers to the places service default
    pub places_radius_km: Option<f64>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: 5,
            places_radius_km: None,
        }
    }
}

/// Free-text route request as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Start location text
    pub start: String,
    /// Destination text
    pub destination: String,
    /// Vehicle profile
    pub mode: TravelMode,
    /// Unit system for the summary
    pub unit: DistanceUnit,
    /// Whether to run the nearby-places searches
    pub include_places: bool,
}

impl RouteRequest {
    /// Request with default mode and unit, places included
    pub fn new(start: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            destination: destination.into(),
            mode: TravelMode::default(),
            unit: DistanceUnit::default(),
            include_places: true,
        }
    }

    /// Set the travel mode
    #[must_use]
    pub const fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the distance unit
    #[must_use]
    pub const fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Skip the nearby-places searches
    #[must_use]
    pub const fn without_places(mut self) -> Self {
        self.include_places = false;
        self
    }
}

/// Check a pair of typed locations before any request is made
///
/// # Errors
///
/// Returns `InvalidInput` if either side is blank, both name the same place
/// (ignoring case and surrounding whitespace), or either is shorter than two
/// characters.
pub fn validate_request(start: &str, destination: &str) -> Result<(), ApplicationError> {
    let start = start.trim();
    let destination = destination.trim();

    if start.is_empty() || destination.is_empty() {
        return Err(ApplicationError::InvalidInput(
            "Please enter both start and destination locations.".to_string(),
        ));
    }

    if start.to_lowercase() == destination.to_lowercase() {
        return Err(ApplicationError::InvalidInput(
            "Start and destination cannot be the same.".to_string(),
        ));
    }

    if start.chars().count() < MIN_INPUT_CHARS || destination.chars().count() < MIN_INPUT_CHARS {
        return Err(ApplicationError::InvalidInput(
            "Location names must have at least 2 characters.".to_string(),
        ));
    }

    Ok(())
}

/// Center used for a places search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Near the start
    Start,
    /// Halfway between start and destination
    Midpoint,
    /// Near the destination
    Destination,
}

impl Anchor {
    /// All anchors in display order
    pub const ALL: [Self; 3] = [Self::Start, Self::Midpoint, Self::Destination];

    /// Label used in panel titles
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Start => "near START",
            Self::Midpoint => "MID-ROUTE",
            Self::Destination => "near DESTINATION",
        }
    }

    /// The point this anchor stands for
    #[must_use]
    pub fn point(&self, start: GeoPoint, destination: GeoPoint) -> GeoPoint {
        match self {
            Self::Start => start,
            Self::Midpoint => start.midpoint(&destination),
            Self::Destination => destination,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of place searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    /// Places to eat
    Restaurant,
    /// Gas stations
    Fuel,
}

impl PlaceCategory {
    /// Categories worth searching for a travel mode
    #[must_use]
    pub fn for_mode(mode: TravelMode) -> Vec<Self> {
        if mode.needs_fuel() {
            vec![Self::Restaurant, Self::Fuel]
        } else {
            vec![Self::Restaurant]
        }
    }

    /// Search keyword sent to the places service
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Fuel => "fuel",
        }
    }

    /// Panel heading
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Restaurant => "🍔 Restaurants",
            Self::Fuel => "⛽ Gas Stations",
        }
    }
}

/// What a single places search produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PanelOutcome {
    /// At least one place
    Found {
        /// Places in upstream order
        places: Vec<PlaceHit>,
    },
    /// The search matched nothing
    Empty,
    /// The search failed; the message is shown in place of results
    Unavailable {
        /// User-facing reason
        message: String,
    },
}

/// Results of one {anchor × category} search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesPanel {
    /// Where the search was centred
    pub anchor: Anchor,
    /// What was searched for
    pub category: PlaceCategory,
    /// What came back
    pub outcome: PanelOutcome,
}

impl PlacesPanel {
    /// Panel heading, e.g. `🍔 Restaurants near START`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.category.title(), self.anchor.label())
    }
}

/// Everything produced by one successful route action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Resolved start
    pub start: ResolvedLocation,
    /// Resolved destination
    pub destination: ResolvedLocation,
    /// Vehicle profile used
    pub mode: TravelMode,
    /// Unit system of the summary
    pub unit: DistanceUnit,
    /// Route in native units
    pub route: RouteResult,
    /// Display text for the route
    pub summary: RouteSummary,
    /// Nearby-places panels, empty when places were not requested
    pub places: Vec<PlacesPanel>,
}

/// Route planning use case over the three remote services
pub struct RoutePlannerService {
    geocoder: Arc<dyn GeocoderPort>,
    router: Arc<dyn RouterPort>,
    places: Arc<dyn PlacesPort>,
    settings: PlannerSettings,
}

impl fmt::Debug for RoutePlannerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePlannerService")
            .field("geocoder", &"<GeocoderPort>")
            .field("router", &"<RouterPort>")
            .field("places", &"<PlacesPort>")
            .field("settings", &self.settings)
            .finish()
    }
}

impl RoutePlannerService {
    /// Create a planner with default settings
    pub fn new(
        geocoder: Arc<dyn GeocoderPort>,
        router: Arc<dyn RouterPort>,
        places: Arc<dyn PlacesPort>,
    ) -> Self {
        Self {
            geocoder,
            router,
            places,
            settings: PlannerSettings::default(),
        }
    }

    /// Replace the planner settings
    #[must_use]
    pub const fn with_settings(mut self, settings: PlannerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Current settings
    pub const fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Autocomplete candidates for partially typed text
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Result<Vec<ResolvedLocation>, ApplicationError> {
        self.geocoder
            .suggest(query, self.settings.suggestion_limit)
            .await
    }

    /// Run an autocomplete lookup for one role of a session
    ///
    /// Returns the next session state; an empty lookup still moves the role
    /// to showing (zero) suggestions.
    #[instrument(skip(self, state))]
    pub async fn suggest_for(
        &self,
        state: &SelectionState,
        role: Role,
        query: &str,
    ) -> Result<SelectionState, ApplicationError> {
        let querying = state.begin_query(role, query);
        let suggestions = self.suggest(query).await?;
        Ok(querying.show_suggestions(role, suggestions))
    }

    /// Resolve typed text to its best match
    ///
    /// # Errors
    ///
    /// Returns `NoMatchFound` when the geocoder has no candidate.
    #[instrument(skip(self))]
    pub async fn resolve_one(
        &self,
        role: Role,
        query: &str,
    ) -> Result<ResolvedLocation, ApplicationError> {
        self.geocoder
            .resolve(query, 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ApplicationError::NoMatchFound(format!(
                    "The {role} location '{}' could not be found.",
                    query.trim()
                ))
            })
    }

    /// Plan a route from two typed locations
    #[instrument(skip(self), fields(mode = %request.mode, unit = %request.unit))]
    pub async fn plan(&self, request: &RouteRequest) -> Result<RoutePlan, ApplicationError> {
        validate_request(&request.start, &request.destination)?;

        let start = self.resolve_one(Role::Start, &request.start).await?;
        let destination = self
            .resolve_one(Role::Destination, &request.destination)
            .await?;

        let selection = SelectionState::new()
            .select(Role::Start, start)
            .select(Role::Destination, destination);

        self.plan_selection(&selection, request.mode, request.unit, request.include_places)
            .await
    }

    /// Plan a route between the locations chosen in a session
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless the selection is ready for routing.
    #[instrument(skip(self, selection))]
    pub async fn plan_selection(
        &self,
        selection: &SelectionState,
        mode: TravelMode,
        unit: DistanceUnit,
        include_places: bool,
    ) -> Result<RoutePlan, ApplicationError> {
        let (start, destination) = selection.route_endpoints()?;

        debug!(start = %start, destination = %destination, "Requesting route");
        let route = self
            .router
            .route(start.point(), destination.point(), mode)
            .await?;
        let summary = summarize(&route, unit);

        info!(
            distance = %summary.distance_text,
            duration = %summary.duration_text,
            "Route calculated"
        );

        let places = if include_places {
            self.nearby_places(start.point(), destination.point(), mode)
                .await
        } else {
            Vec::new()
        };

        Ok(RoutePlan {
            start: start.clone(),
            destination: destination.clone(),
            mode,
            unit,
            route,
            summary,
            places,
        })
    }

    /// Keyword search around a single point
    ///
    /// `radius_km` overrides the configured radius for this search.
    #[instrument(skip(self))]
    pub async fn search_places(
        &self,
        center: GeoPoint,
        keyword: &str,
        radius_km: Option<f64>,
    ) -> Result<Vec<PlaceHit>, ApplicationError> {
        let radius_km = radius_km.or(self.settings.places_radius_km);
        let places = self.places.nearby(center, keyword, radius_km).await?;
        if places.is_empty() {
            warn!(%center, keyword, "No places found");
        }
        Ok(places)
    }

    /// Search every {anchor × category} combination for a trip
    ///
    /// Each search fails on its own: an unavailable service yields an
    /// `Unavailable` panel and the remaining searches still run.
    #[instrument(skip(self))]
    pub async fn nearby_places(
        &self,
        start: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Vec<PlacesPanel> {
        let categories = PlaceCategory::for_mode(mode);
        let mut panels = Vec::with_capacity(Anchor::ALL.len() * categories.len());

        for anchor in Anchor::ALL {
            let center = anchor.point(start, destination);
            for &category in &categories {
                let outcome = match self
                    .places
                    .nearby(center, category.keyword(), self.settings.places_radius_km)
                    .await
                {
                    Ok(places) if places.is_empty() => PanelOutcome::Empty,
                    Ok(places) => PanelOutcome::Found { places },
                    Err(e) => {
                        warn!(%anchor, keyword = category.keyword(), error = %e, "Places search failed");
                        PanelOutcome::Unavailable {
                            message: e.user_message(),
                        }
                    },
                };
                panels.push(PlacesPanel {
                    anchor,
                    category,
                    outcome,
                });
            }
        }

        panels
    }
}
