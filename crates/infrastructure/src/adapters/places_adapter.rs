//! Places adapter - Implements PlacesPort using integration_nominatim

use application::error::ApplicationError;
use application::ports::PlacesPort;
use async_trait::async_trait;
use domain::{GeoPoint, PlaceHit};
use integration_nominatim::{NominatimConfig, NominatimPlacesClient, PlacesClient, PlacesError};
use tracing::{instrument, warn};

/// Adapter for nearby-places searches via Nominatim
pub struct PlacesAdapter {
    client: Box<dyn PlacesClient>,
}

impl std::fmt::Debug for PlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAdapter")
            .field("client", &"<PlacesClient>")
            .finish()
    }
}

impl PlacesAdapter {
    /// Create an adapter from an existing client
    pub fn new(client: Box<dyn PlacesClient>) -> Self {
        Self { client }
    }

    /// Create an adapter with a Nominatim client for `config`
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid.
    pub fn from_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimPlacesClient::new(config).map_err(map_error)?;
        Ok(Self::new(Box::new(client)))
    }
}

/// Map a places error to the application error space
pub(crate) fn map_error(err: PlacesError) -> ApplicationError {
    match err {
        PlacesError::InvalidQuery(reason) => ApplicationError::InvalidInput(reason),
        PlacesError::ConfigurationError(reason) => ApplicationError::Configuration(reason),
        other => ApplicationError::UpstreamUnavailable(other.to_string()),
    }
}

#[async_trait]
impl PlacesPort for PlacesAdapter {
    #[instrument(skip(self))]
    async fn nearby(
        &self,
        center: GeoPoint,
        keyword: &str,
        radius_km: Option<f64>,
    ) -> Result<Vec<PlaceHit>, ApplicationError> {
        self.client
            .nearby(center, keyword, radius_km)
            .await
            .map_err(|e| {
                warn!(error = %e, keyword, "Places search failed");
                map_error(e)
            })
    }
}
