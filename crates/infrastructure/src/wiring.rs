//! Planner assembly from configuration

use std::sync::Arc;

use application::{ApplicationError, RoutePlannerService};
use tracing::info;

use crate::adapters::{GraphHopperAdapter, PlacesAdapter};
use crate::config::AppConfig;

/// Build a planner wired to GraphHopper and Nominatim
///
/// # Errors
///
/// Returns `Configuration` if any section fails validation.
pub fn build_route_planner(config: &AppConfig) -> Result<RoutePlannerService, ApplicationError> {
    config.validate().map_err(ApplicationError::Configuration)?;

    let graphhopper = Arc::new(GraphHopperAdapter::from_config(
        &config.graphhopper.to_client_config(),
    )?);
    let places = Arc::new(PlacesAdapter::from_config(&config.nominatim)?);

    info!(
        graphhopper = %config.graphhopper.base_url,
        nominatim = %config.nominatim.base_url,
        "Route planner ready"
    );

    Ok(
        RoutePlannerService::new(graphhopper.clone(), graphhopper, places)
            .with_settings(config.planner.to_settings()),
    )
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let result = build_route_planner(&AppConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(ref m)) if m.contains("graphhopper")));
    }

    #[test]
    fn test_settings_applied() {
        let mut config = AppConfig::default();
        config.graphhopper.api_key = SecretString::from("abc".to_string());
        config.planner.suggestion_limit = 9;

        let planner = build_route_planner(&config).unwrap();
        assert_eq!(planner.settings().suggestion_limit, 9);
    }
}
