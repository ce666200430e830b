use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use volara_core::criteria::{SearchCriteria, SortKey, TripType};
use volara_core::offer::FlightOffer;
use volara_search::prediction::PricePrediction;
use volara_search::sort::resort;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchFlightsRequest {
    pub from_city: String,
    pub to_city: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub trip_type: TripType,
    /// Optional client-side ordering; default is the score ranking the
    /// search already applies.
    pub sort: Option<SortKey>,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/flights/{id}/prediction", get(price_prediction))
}

/// POST /v1/flights/search
/// Score and rank the catalog for a search.
async fn search_flights(
    State(state): State<AppState>,
    Json(req): Json<SearchFlightsRequest>,
) -> Result<Json<Vec<FlightOffer>>, AppError> {
    let criteria = SearchCriteria {
        from_city: req.from_city,
        to_city: req.to_city,
        departure_date: req.departure_date,
        return_date: req.return_date,
        passengers: req.passengers,
        trip_type: req.trip_type,
    };

    let mut offers = state.search.search(&criteria).await?;

    if let Some(key) = req.sort {
        offers = resort(&offers, key);
    }

    Ok(Json(offers))
}

/// GET /v1/flights/:id/prediction
/// Cosmetic fare-trend flavor for one offer.
async fn price_prediction(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
) -> Result<Json<PricePrediction>, AppError> {
    let offers = state
        .catalog
        .fetch()
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    if !offers.iter().any(|o| o.id == offer_id) {
        return Err(AppError::NotFound(format!(
            "Unknown flight offer: {offer_id}"
        )));
    }

    Ok(Json(state.predictor.predict(&offer_id)))
}
