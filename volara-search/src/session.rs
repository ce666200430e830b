use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use volara_core::criteria::SearchCriteria;
use volara_core::offer::FlightOffer;

use crate::service::{FlightSearchService, SearchError};

/// One screen's search state: at most one live search, newest wins.
///
/// Issuing a new search while an older one is pending supersedes it; the
/// older caller gets [`SearchError::Superseded`] and its results are
/// discarded rather than overwriting fresher ones. The loading flag stays
/// up until the most recent search finishes.
pub struct SearchSession {
    service: Arc<FlightSearchService>,
    latest: AtomicU64,
    completed: AtomicU64,
}

impl SearchSession {
    pub fn new(service: Arc<FlightSearchService>) -> Self {
        Self {
            service,
            latest: AtomicU64::new(0),
            completed: AtomicU64::new(0),
        }
    }

    /// True while the most recent search has not finished.
    pub fn is_loading(&self) -> bool {
        self.completed.load(Ordering::SeqCst) < self.latest.load(Ordering::SeqCst)
    }

    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.service.search(criteria).await;

        if self.latest.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "discarding superseded search result");
            return Err(SearchError::Superseded);
        }

        self.completed.fetch_max(ticket, Ordering::SeqCst);
        result
    }
}
