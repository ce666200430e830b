use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use volara_booking::models::{AddOns, BookingDetails, PassengerInfo};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub offer_id: String,
    pub passenger: PassengerInfo,
    pub seat: Option<String>,
    #[serde(default)]
    pub add_ons: AddOns,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(create_booking))
        .route("/v1/bookings/{reference}", get(get_booking))
}

/// POST /v1/bookings
/// Confirm a mock booking for a catalog offer.
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingDetails>), AppError> {
    let offers = state
        .catalog
        .fetch()
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    let mut offer = offers
        .into_iter()
        .find(|o| o.id == req.offer_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown flight offer: {}", req.offer_id)))?;

    // Catalog scores are placeholders; the booked record carries the
    // heuristic score.
    offer.score = state.search.score_offer(&offer);

    let details = state
        .desk
        .confirm(offer, req.passenger, req.seat, req.add_ons)?;

    Ok((StatusCode::CREATED, Json(details)))
}

/// GET /v1/bookings/:reference
/// Look up a confirmed booking.
async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<BookingDetails>, AppError> {
    state
        .desk
        .get(&reference)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown booking reference: {reference}")))
}
