//! Routing service port

use async_trait::async_trait;
use domain::{GeoPoint, RouteResult, TravelMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for point-to-point routing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RouterPort: Send + Sync {
    /// Top-ranked path between two points
    ///
    /// Fails with `NoRouteFound` when the service has no path.
    async fn route(
        &self,
        start: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<RouteResult, ApplicationError>;
}
