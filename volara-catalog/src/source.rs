use async_trait::async_trait;
use volara_core::offer::FlightOffer;

/// Catalog backend errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of flight offers for the search service.
///
/// The search service only ever reads through this seam, so tests can
/// substitute alternate datasets or failing backends for the built-in
/// [`crate::dataset::StaticCatalog`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<FlightOffer>, CatalogError>;
}
