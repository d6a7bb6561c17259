//! GraphHopper adapter - Implements GeocoderPort and RouterPort using integration_graphhopper

use application::error::ApplicationError;
use application::ports::{GeocoderPort, RouterPort};
use async_trait::async_trait;
use domain::{GeoPoint, ResolvedLocation, RouteResult, TravelMode};
use integration_graphhopper::{
    GeocodingClient, GraphHopperConfig, GraphHopperError, GraphHopperGeocodingClient,
    GraphHopperRoutingClient, RoutingClient,
};
use tracing::{instrument, warn};

/// Adapter for geocoding and routing via GraphHopper
pub struct GraphHopperAdapter {
    geocoding_client: Box<dyn GeocodingClient>,
    routing_client: Box<dyn RoutingClient>,
}

impl std::fmt::Debug for GraphHopperAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphHopperAdapter")
            .field("geocoding_client", &"<GeocodingClient>")
            .field("routing_client", &"<RoutingClient>")
            .finish()
    }
}

impl GraphHopperAdapter {
    /// Create an adapter from existing clients
    pub fn new(
        geocoding_client: Box<dyn GeocodingClient>,
        routing_client: Box<dyn RoutingClient>,
    ) -> Self {
        Self {
            geocoding_client,
            routing_client,
        }
    }

    /// Create an adapter with GraphHopper clients for `config`
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid or the HTTP
    /// clients fail to initialize.
    pub fn from_config(config: &GraphHopperConfig) -> Result<Self, ApplicationError> {
        let geocoding_client = GraphHopperGeocodingClient::new(config).map_err(map_error)?;
        let routing_client = GraphHopperRoutingClient::new(config).map_err(map_error)?;
        Ok(Self::new(Box::new(geocoding_client), Box::new(routing_client)))
    }
}

/// Map a GraphHopper error to the application error space
pub(crate) fn map_error(err: GraphHopperError) -> ApplicationError {
    match err {
        GraphHopperError::NoRouteFound => ApplicationError::NoRouteFound,
        GraphHopperError::ConfigurationError(reason) => ApplicationError::Configuration(reason),
        other => ApplicationError::UpstreamUnavailable(other.to_string()),
    }
}

#[async_trait]
impl GeocoderPort for GraphHopperAdapter {
    #[instrument(skip(self))]
    async fn resolve(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<ResolvedLocation>, ApplicationError> {
        self.geocoding_client
            .resolve(query, limit)
            .await
            .map_err(|e| {
                warn!(error = %e, "Geocoding failed");
                map_error(e)
            })
    }

    #[instrument(skip(self))]
    async fn suggest(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<ResolvedLocation>, ApplicationError> {
        self.geocoding_client
            .suggest(query, limit)
            .await
            .map_err(|e| {
                warn!(error = %e, "Autocomplete failed");
                map_error(e)
            })
    }
}

#[async_trait]
impl RouterPort for GraphHopperAdapter {
    #[instrument(skip(self))]
    async fn route(
        &self,
        start: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<RouteResult, ApplicationError> {
        self.routing_client
            .route(start, destination, mode)
            .await
            .map_err(|e| {
                warn!(error = %e, "Routing failed");
                map_error(e)
            })
    }
}
