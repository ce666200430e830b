use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use volara_catalog::source::{CatalogError, CatalogSource};
use volara_core::criteria::SearchCriteria;
use volara_core::offer::FlightOffer;

use crate::scoring::{score, ScoreWeights};

/// Tunables for the simulated search round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Simulated network latency before results become available.
    pub latency_ms: u64,
    /// Bound on the whole search, including the simulated latency.
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            latency_ms: 2000,
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The single user-facing failure kind. Retrying with identical
    /// criteria is always valid.
    #[error("Failed to search flights. Please try again.")]
    Failed(#[source] CatalogError),

    /// The bounded wait elapsed before the backend answered.
    #[error("Flight search timed out. Please try again.")]
    TimedOut,

    /// A newer search in the same session superseded this one; its
    /// results were discarded.
    #[error("Search superseded by a newer request")]
    Superseded,
}

/// Scores and ranks the catalog for a search.
///
/// The catalog is injected so tests can swap datasets or failing
/// backends. The service never mutates the catalog; each search returns a
/// freshly scored vector.
pub struct FlightSearchService {
    catalog: Arc<dyn CatalogSource>,
    weights: ScoreWeights,
    config: SearchConfig,
}

impl FlightSearchService {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self::with_config(catalog, ScoreWeights::default(), SearchConfig::default())
    }

    pub fn with_config(
        catalog: Arc<dyn CatalogSource>,
        weights: ScoreWeights,
        config: SearchConfig,
    ) -> Self {
        Self {
            catalog,
            weights,
            config,
        }
    }

    /// Recomputes the ranking score for a single offer.
    pub fn score_offer(&self, offer: &FlightOffer) -> u8 {
        score(offer, &self.weights)
    }

    /// Runs one search: simulated latency, then score and rank the whole
    /// catalog. Criteria do not filter the mock inventory but are always
    /// accepted.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        tracing::info!(
            from = %criteria.from_city,
            to = %criteria.to_city,
            passengers = criteria.passengers,
            "flight search initiated"
        );

        let bound = Duration::from_millis(self.config.timeout_ms);
        match tokio::time::timeout(bound, self.run()).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout_ms = self.config.timeout_ms, "flight search timed out");
                Err(SearchError::TimedOut)
            }
        }
    }

    async fn run(&self) -> Result<Vec<FlightOffer>, SearchError> {
        tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;

        let offers = self.catalog.fetch().await.map_err(|e| {
            tracing::error!(error = %e, "catalog fetch failed");
            SearchError::Failed(e)
        })?;

        let mut scored: Vec<FlightOffer> = offers
            .into_iter()
            .map(|mut offer| {
                offer.score = score(&offer, &self.weights);
                offer
            })
            .collect();

        // Stable sort: equal scores keep catalog order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::info!(results = scored.len(), "flight search completed");
        Ok(scored)
    }
}
