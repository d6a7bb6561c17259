//! GraphHopper routing client
//!
//! Requests a path between two points for a vehicle profile and keeps only
//! the top-ranked candidate. Distances stay in meters and durations in
//! milliseconds; display conversion happens further up.

use async_trait::async_trait;
use domain::{GeoPoint, RouteResult, RouteStep, TravelMode};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::GraphHopperConfig;
use crate::error::GraphHopperError;
use crate::http;

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Best path from `start` to `destination` for the given mode
    async fn route(
        &self,
        start: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<RouteResult, GraphHopperError>;
}

/// GraphHopper-based routing client
#[derive(Debug)]
pub struct GraphHopperRoutingClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperRoutingClient {
    /// Create a new routing client
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

    /// Parse the raw route response, keeping the first path
    fn parse_route_response(body: &str) -> Result<RouteResult, GraphHopperError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| GraphHopperError::ParseError(e.to_string()))?;

        let path = raw
            .paths
            .into_iter()
            .next()
            .ok_or(GraphHopperError::NoRouteFound)?;

        let steps = path
            .instructions
            .into_iter()
            .map(|inst| RouteStep::new(inst.text, inst.distance))
            .collect();

        Ok(RouteResult::new(path.distance, path.time, steps))
    }
}

#[async_trait]
impl RoutingClient for GraphHopperRoutingClient {
    #[instrument(skip(self), fields(from = %start.to_query_pair(), to = %destination.to_query_pair()))]
    async fn route(
        &self,
        start: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<RouteResult, GraphHopperError> {
        let url = self.config.endpoint("route");
        let params = [
            ("point", start.to_query_pair()),
            ("point", destination.to_query_pair()),
            ("vehicle", mode.as_str().to_string()),
            ("instructions", "true".to_string()),
            ("points_encoded", "false".to_string()),
            ("locale", self.config.locale.clone()),
            ("key", self.config.api_key.clone()),
        ];

        debug!(%mode, "Requesting route");

        let body = http::get_body(&self.client, &url, &params, self.config.timeout_secs).await?;

        match Self::parse_route_response(&body) {
            Ok(route) => {
                debug!(
                    distance_m = route.distance_meters,
                    time_ms = route.duration_millis,
                    steps = route.steps.len(),
                    "Route found"
                );
                Ok(route)
            },
            Err(GraphHopperError::NoRouteFound) => {
                warn!("Router returned no paths");
                Err(GraphHopperError::NoRouteFound)
            },
            Err(e) => Err(e),
        }
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    #[serde(default)]
    paths: Vec<RawPath>,
}

#[derive(Debug, Deserialize)]
struct RawPath {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    time: u64,
    #[serde(default)]
    instructions: Vec<RawInstruction>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    #[serde(default)]
    text: String,
    #[serde(default)]
    distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_response() {
        let json = r#"{
            "paths": [
                {
                    "distance": 289012.5,
                    "time": 10453000,
                    "instructions": [
                        { "text": "Continue onto Unter den Linden", "distance": 412.3, "sign": 0 },
                        { "text": "Arrive at destination", "distance": 0.0, "sign": 4 }
                    ]
                },
                { "distance": 300000.0, "time": 11000000, "instructions": [] }
            ],
            "info": { "took": 12 }
        }"#;

        let route = GraphHopperRoutingClient::parse_route_response(json).unwrap();
        assert!((route.distance_meters - 289_012.5).abs() < f64::EPSILON);
        assert_eq!(route.duration_millis, 10_453_000);
        assert_eq!(route.steps.len(), 2);
        assert_eq!(route.steps[0].instruction_text, "Continue onto Unter den Linden");
    }

    #[test]
    fn test_parse_zero_paths() {
        let result = GraphHopperRoutingClient::parse_route_response(r#"{"paths": []}"#);
        assert!(matches!(result, Err(GraphHopperError::NoRouteFound)));

        let result = GraphHopperRoutingClient::parse_route_response("{}");
        assert!(matches!(result, Err(GraphHopperError::NoRouteFound)));
    }

    #[test]
    fn test_parse_missing_fields_default_to_zero() {
        let route = GraphHopperRoutingClient::parse_route_response(r#"{"paths": [{}]}"#).unwrap();
        assert!(route.distance_meters.abs() < f64::EPSILON);
        assert_eq!(route.duration_millis, 0);
        assert!(route.steps.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = GraphHopperRoutingClient::parse_route_response("<html>");
        assert!(matches!(result, Err(GraphHopperError::ParseError(_))));
    }
}
