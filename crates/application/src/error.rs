//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every variant is caught at the action boundary and turned into a message
/// for the user; none of them should end the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Empty, too short or contradictory user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A remote service failed, timed out or answered with an error status
    #[error("Service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The router returned no path
    #[error("No route found")]
    NoRouteFound,

    /// A lookup succeeded but matched nothing
    #[error("No match found: {0}")]
    NoMatchFound(String),

    /// Another action is still in flight
    #[error("Another request is still running")]
    Busy,

    /// The action was cancelled before it completed
    #[error("Request cancelled")]
    Cancelled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether this is an empty result to render, rather than a failure
    pub const fn is_empty_state(&self) -> bool {
        matches!(self, Self::NoMatchFound(_))
    }

    /// Short text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(reason) => format!("⚠️ {reason}"),
            Self::UpstreamUnavailable(reason) => format!("❌ Service unavailable: {reason}"),
            Self::NoRouteFound => "❌ Unable to retrieve route data.".to_string(),
            Self::NoMatchFound(what) => format!("ℹ️ {what}"),
            Self::Busy => "⏳ Please wait for the current request to finish.".to_string(),
            Self::Cancelled => "Request cancelled.".to_string(),
            Self::Configuration(reason) => format!("❌ Configuration error: {reason}"),
            Self::Internal(reason) => format!("❌ Internal error: {reason}"),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(reason) => Self::InvalidInput(reason),
            other @ DomainError::InvalidCoordinates { .. } => Self::InvalidInput(other.to_string()),
        }
    }
}
