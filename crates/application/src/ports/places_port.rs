//! Places search port

use async_trait::async_trait;
use domain::{GeoPoint, PlaceHit};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for keyword searches around a point
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlacesPort: Send + Sync {
    /// Places matching `keyword` near `center`; `None` uses the default radius
    async fn nearby(
        &self,
        center: GeoPoint,
        keyword: &str,
        radius_km: Option<f64>,
    ) -> Result<Vec<PlaceHit>, ApplicationError>;
}
