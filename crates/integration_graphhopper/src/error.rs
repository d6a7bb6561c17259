//! GraphHopper error types

use thiserror::Error;

/// Errors that can occur while talking to GraphHopper
#[derive(Debug, Error)]
pub enum GraphHopperError {
    /// Transport failure or non-success HTTP status
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Failed to parse a response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The router answered but returned no path
    #[error("No route found")]
    NoRouteFound,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GraphHopperError {
    /// Returns true if the service could not deliver a usable answer
    #[must_use]
    pub const fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable(_) | Self::Timeout { .. } | Self::ParseError(_)
        )
    }

    /// Classify a reqwest transport error
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::UpstreamUnavailable(err.to_string())
        }
    }
}
