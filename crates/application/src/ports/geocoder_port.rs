//! Geocoding service port

use async_trait::async_trait;
use domain::ResolvedLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving place names to coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve a submitted place name; short queries yield an empty list
    async fn resolve(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<ResolvedLocation>, ApplicationError>;

    /// Autocomplete candidates; queries under three characters yield an empty list
    async fn suggest(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<ResolvedLocation>, ApplicationError>;
}
