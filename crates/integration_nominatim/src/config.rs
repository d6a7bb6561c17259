//! Nominatim service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim places search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of places returned per search
    #[serde(default = "default_result_limit")]
    pub result_limit: u8,

    /// Default search radius around an anchor, in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// User-Agent header (required by the Nominatim usage policy)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_result_limit() -> u8 {
    10
}

const fn default_radius_km() -> f64 {
    3.0
}

fn default_user_agent() -> String {
    "RouteApp".to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            result_limit: default_result_limit(),
            radius_km: default_radius_km(),
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            result_limit: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.result_limit == 0 {
            return Err("result_limit must be greater than 0".to_string());
        }

        if self.radius_km.is_nan() || self.radius_km <= 0.0 {
            return Err("radius_km must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        Ok(())
    }
}
