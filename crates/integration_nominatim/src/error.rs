//! Places search error types

use thiserror::Error;

/// Errors that can occur during a places search
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Transport failure or non-success HTTP status
    #[error("Places search unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Request timeout
    #[error("Places search timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Failed to parse the search response
    #[error("Places parse error: {0}")]
    ParseError(String),

    /// Invalid search parameters
    #[error("Invalid places query: {0}")]
    InvalidQuery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl PlacesError {
    /// Returns true if the service could not deliver a usable answer
    #[must_use]
    pub const fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable(_) | Self::Timeout { .. } | Self::ParseError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_unavailable_group() {
        assert!(PlacesError::UpstreamUnavailable("HTTP 500".to_string()).is_upstream_unavailable());
        assert!(PlacesError::Timeout { timeout_secs: 10 }.is_upstream_unavailable());
        assert!(PlacesError::ParseError("x".to_string()).is_upstream_unavailable());
        assert!(!PlacesError::InvalidQuery("x".to_string()).is_upstream_unavailable());
    }

    #[test]
    fn test_error_display() {
        let err = PlacesError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("timed out"));
        assert!(err.to_string().contains("10"));
    }
}
