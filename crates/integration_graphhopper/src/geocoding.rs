//! GraphHopper geocoding client
//!
//! Resolves free-form place names to candidate points. The same endpoint
//! backs two entry points: direct resolution of a submitted field and
//! autocomplete while the user is still typing. Each has its own minimum
//! query length below which no request is made.

use async_trait::async_trait;
use domain::{GeoPoint, ResolvedLocation};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::GraphHopperConfig;
use crate::error::GraphHopperError;
use crate::http;

/// Shortest trimmed query that triggers an autocomplete lookup
pub const MIN_SUGGEST_CHARS: usize = 3;

/// Shortest trimmed query that triggers a direct lookup
pub const MIN_RESOLVE_CHARS: usize = 2;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a submitted place name to at most `limit` candidates
    ///
    /// Queries shorter than [`MIN_RESOLVE_CHARS`] yield an empty list
    /// without contacting the service.
    async fn resolve(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<ResolvedLocation>, GraphHopperError>;

    /// Autocomplete candidates for a partially typed place name
    ///
    /// Queries shorter than [`MIN_SUGGEST_CHARS`] yield an empty list
    /// without contacting the service.
    async fn suggest(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<ResolvedLocation>, GraphHopperError>;
}

/// GraphHopper-based geocoding client
#[derive(Debug)]
pub struct GraphHopperGeocodingClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, GraphHopperError> {
        Ok(Self {
            client: http::build_client(config)?,
            config: config.clone(),
        })
    }

    async fn search(
        &self,
        query: &str,
        limit: u8,
        min_chars: usize,
    ) -> Result<Vec<ResolvedLocation>, GraphHopperError> {
        let query = query.trim();
        if query.chars().count() < min_chars || limit == 0 {
            debug!(%query, min_chars, "Query too short, skipping geocoding");
            return Ok(Vec::new());
        }

        let url = self.config.endpoint("geocode");
        let params = [
            ("q", query.to_string()),
            ("limit", limit.to_string()),
            ("locale", self.config.locale.clone()),
            ("key", self.config.api_key.clone()),
        ];

        debug!(%query, limit, "Geocoding place name");

        let body = http::get_body(&self.client, &url, &params, self.config.timeout_secs).await?;
        let locations = Self::parse_geocode_response(&body, query)?;

        if locations.is_empty() {
            warn!(%query, "No geocoding matches");
        } else {
            debug!(count = locations.len(), "Geocoding matches found");
        }

        Ok(locations)
    }

    /// Parse the raw geocoding response into resolved locations
    ///
    /// Hits without a point or with coordinates outside the valid range are
    /// dropped.
    fn parse_geocode_response(
        body: &str,
        query: &str,
    ) -> Result<Vec<ResolvedLocation>, GraphHopperError> {
        let raw: RawGeocodeResponse =
            serde_json::from_str(body).map_err(|e| GraphHopperError::ParseError(e.to_string()))?;

        Ok(raw
            .hits
            .into_iter()
            .filter_map(|hit| Self::convert_hit(hit, query))
            .collect())
    }

    fn convert_hit(hit: RawHit, query: &str) -> Option<ResolvedLocation> {
        let Some(raw_point) = hit.point else {
            warn!(name = ?hit.name, "Skipping geocoding hit without a point");
            return None;
        };

        let point = match GeoPoint::new(raw_point.lat, raw_point.lng) {
            Ok(point) => point,
            Err(e) => {
                warn!(error = %e, "Skipping geocoding hit");
                return None;
            },
        };

        let label = ResolvedLocation::label_from_parts(
            &[
                hit.name.as_deref(),
                hit.state.as_deref(),
                hit.country.as_deref(),
            ],
            query,
        );

        Some(ResolvedLocation::new(point, label))
    }
}

#[async_trait]
impl GeocodingClient for GraphHopperGeocodingClient {
    #[instrument(skip(self))]
    async fn resolve(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<ResolvedLocation>, GraphHopperError> {
        self.search(query, limit, MIN_RESOLVE_CHARS).await
    }

    #[instrument(skip(self))]
    async fn suggest(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<ResolvedLocation>, GraphHopperError> {
        self.search(query, limit, MIN_SUGGEST_CHARS).await
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawGeocodeResponse {
    #[serde(default)]
    hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    point: Option<RawPoint>,
    name: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}
