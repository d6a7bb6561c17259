//! Nominatim places client
//!
//! Searches for a keyword inside a square viewbox centred on an anchor point.
//! The radius is turned into a degree offset with a flat-earth approximation
//! (one degree is taken as 111 km on both axes), which is only meaningful for
//! small radii and away from the poles.

use std::time::Duration;

use async_trait::async_trait;
use domain::{GeoPoint, PlaceHit};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::NominatimConfig;
use crate::error::PlacesError;

/// Kilometers per degree used for the viewbox approximation
pub const KM_PER_DEGREE: f64 = 111.0;

/// Fallback label for places without a display name
const UNKNOWN_PLACE: &str = "Unknown";

/// Trait for places search clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Places matching `keyword` within `radius_km` of `center`
    ///
    /// `None` uses the configured default radius.
    async fn nearby(
        &self,
        center: GeoPoint,
        keyword: &str,
        radius_km: Option<f64>,
    ) -> Result<Vec<PlaceHit>, PlacesError>;
}

/// Rectangular search region in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western longitude
    pub left: f64,
    /// Northern latitude
    pub top: f64,
    /// Eastern longitude
    pub right: f64,
    /// Southern latitude
    pub bottom: f64,
}

impl BoundingBox {
    /// Square box of half-width `radius_km / 111` degrees around `center`
    #[must_use]
    pub fn around(center: GeoPoint, radius_km: f64) -> Self {
        let offset = radius_km / KM_PER_DEGREE;
        Self {
            left: center.longitude() - offset,
            top: center.latitude() + offset,
            right: center.longitude() + offset,
            bottom: center.latitude() - offset,
        }
    }

    /// Nominatim `viewbox` value: `left,top,right,bottom`
    #[must_use]
    pub fn to_viewbox(&self) -> String {
        format!("{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

/// Nominatim-based places client
#[derive(Debug)]
pub struct NominatimPlacesClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimPlacesClient {
    /// Create a new places client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PlacesError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw search response into place hits
    ///
    /// Entries whose coordinates are missing, do not parse or are out of
    /// range are dropped.
    fn parse_search_response(body: &str) -> Result<Vec<PlaceHit>, PlacesError> {
        let raw: Vec<RawPlace> =
            serde_json::from_str(body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        Ok(raw.into_iter().filter_map(Self::convert_place).collect())
    }

    fn convert_place(raw: RawPlace) -> Option<PlaceHit> {
        let lat = raw.lat.as_deref().unwrap_or_default();
        let lon = raw.lon.as_deref().unwrap_or_default();
        let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) else {
            warn!(lat, lon, "Skipping place with missing or unparsable coordinates");
            return None;
        };

        let point = match GeoPoint::new(lat, lon) {
            Ok(point) => point,
            Err(e) => {
                warn!(error = %e, "Skipping place");
                return None;
            },
        };

        let name = raw
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string());

        Some(PlaceHit::new(name, point))
    }
}

#[async_trait]
impl PlacesClient for NominatimPlacesClient {
    #[instrument(skip(self), fields(center = %center.to_query_pair()))]
    async fn nearby(
        &self,
        center: GeoPoint,
        keyword: &str,
        radius_km: Option<f64>,
    ) -> Result<Vec<PlaceHit>, PlacesError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(PlacesError::InvalidQuery(
                "Search keyword must not be empty".to_string(),
            ));
        }

        let radius_km = radius_km.unwrap_or(self.config.radius_km);
        if radius_km.is_nan() || radius_km <= 0.0 {
            return Err(PlacesError::InvalidQuery(format!(
                "Search radius must be positive, got {radius_km}"
            )));
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let params = [
            ("q", keyword.to_string()),
            ("format", "json".to_string()),
            ("limit", self.config.result_limit.to_string()),
            ("bounded", "1".to_string()),
            ("viewbox", BoundingBox::around(center, radius_km).to_viewbox()),
        ];

        debug!(%keyword, radius_km, "Searching nearby places");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlacesError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    PlacesError::UpstreamUnavailable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(PlacesError::UpstreamUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;

        let places = Self::parse_search_response(&body)?;

        if places.is_empty() {
            warn!(%keyword, "No places found");
        } else {
            debug!(count = places.len(), "Places found");
        }

        Ok(places)
    }
}

/// Raw Nominatim search result
#[derive(Debug, Deserialize)]
struct RawPlace {
    display_name: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
}
