//! Application configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `route-planner.toml` in the working directory (or an explicit file),
//! `ROUTE_PLANNER__SECTION__KEY` environment variables, and finally
//! `GRAPHHOPPER_API_KEY` for the one credential the planner needs.

use std::fmt;
use std::path::Path;

use application::PlannerSettings;
use integration_graphhopper::GraphHopperConfig;
use integration_nominatim::NominatimConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Base name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "route-planner";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "ROUTE_PLANNER";

/// Shortcut variable for the GraphHopper key
pub const API_KEY_ENV: &str = "GRAPHHOPPER_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoding and routing service
    #[serde(default)]
    pub graphhopper: GraphHopperAppConfig,

    /// Places search service
    #[serde(default)]
    pub nominatim: NominatimConfig,

    /// Planner behaviour
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // e.g. ROUTE_PLANNER__NOMINATIM__RADIUS_KM=5
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("graphhopper.api_key", std::env::var(API_KEY_ENV).ok())?;

        builder.build()?.try_deserialize()
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section name.
    pub fn validate(&self) -> Result<(), String> {
        self.graphhopper
            .to_client_config()
            .validate()
            .map_err(|e| format!("graphhopper: {e}"))?;
        self.nominatim
            .validate()
            .map_err(|e| format!("nominatim: {e}"))?;
        self.planner.validate().map_err(|e| format!("planner: {e}"))
    }
}

/// GraphHopper configuration as read from file and environment
#[derive(Clone, Serialize, Deserialize)]
pub struct GraphHopperAppConfig {
    /// Base URL of the GraphHopper API
    #[serde(default = "default_graphhopper_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(skip_serializing, default = "empty_secret")]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language for display names and instructions
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_graphhopper_base_url() -> String {
    GraphHopperConfig::default().base_url
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_locale() -> String {
    GraphHopperConfig::default().locale
}

impl Default for GraphHopperAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_graphhopper_base_url(),
            api_key: empty_secret(),
            timeout_secs: default_timeout_secs(),
            locale: default_locale(),
        }
    }
}

impl fmt::Debug for GraphHopperAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphHopperAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("locale", &self.locale)
            .finish()
    }
}

impl GraphHopperAppConfig {
    /// Configuration with a placeholder key for tests
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: SecretString::from("test-key".to_string()),
            timeout_secs: 5,
            ..Self::default()
        }
    }

    /// Convert into the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> GraphHopperConfig {
        GraphHopperConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.expose_secret().to_string(),
            timeout_secs: self.timeout_secs,
            locale: self.locale.clone(),
        }
    }
}

/// Planner configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Candidates requested per autocomplete lookup
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u8,

    /// Places search radius; unset uses `nominatim.radius_km`
    #[serde(default)]
    pub places_radius_km: Option<f64>,
}

const fn default_suggestion_limit() -> u8 {
    5
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            places_radius_km: None,
        }
    }
}

impl PlannerConfig {
    /// Configuration for tests
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            suggestion_limit: 3,
            places_radius_km: Some(1.0),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.suggestion_limit == 0 {
            return Err("suggestion_limit must be greater than 0".to_string());
        }

        if let Some(radius) = self.places_radius_km
            && (radius.is_nan() || radius <= 0.0)
        {
            return Err("places_radius_km must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Settings handed to the planner service
    #[must_use]
    pub const fn to_settings(&self) -> PlannerSettings {
        PlannerSettings {
            suggestion_limit: self.suggestion_limit,
            places_radius_km: self.places_radius_km,
        }
    }
}
