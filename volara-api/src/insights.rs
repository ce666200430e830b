use axum::{extract::Path, routing::get, Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/insights/{route}", get(travel_insights))
}

/// GET /v1/insights/:route
/// Up to three static advisory strings for a route.
async fn travel_insights(Path(route): Path<String>) -> Json<Vec<String>> {
    Json(volara_search::insights::travel_insights(&route))
}
