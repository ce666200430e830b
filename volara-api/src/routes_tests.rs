use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use volara_booking::desk::BookingDesk;
use volara_catalog::dataset::StaticCatalog;
use volara_catalog::source::CatalogSource;
use volara_search::prediction::{OutcomePicker, PricePredictor};
use volara_search::scoring::ScoreWeights;
use volara_search::service::{FlightSearchService, SearchConfig};

use crate::{app, AppState};

struct FixedPicker(usize);

impl OutcomePicker for FixedPicker {
    fn pick(&self, _outcomes: usize) -> usize {
        self.0
    }
}

fn test_state() -> AppState {
    let catalog: Arc<dyn CatalogSource> = Arc::new(StaticCatalog::default());
    AppState {
        catalog: catalog.clone(),
        search: Arc::new(FlightSearchService::with_config(
            catalog,
            ScoreWeights::default(),
            SearchConfig {
                latency_ms: 0,
                timeout_ms: 10_000,
            },
        )),
        predictor: Arc::new(PricePredictor::with_picker(Box::new(FixedPicker(1)))),
        desk: Arc::new(BookingDesk::new()),
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn search_request(sort: Option<&str>) -> Value {
    let mut body = json!({
        "from_city": "New York",
        "to_city": "Los Angeles",
        "departure_date": "2026-09-01",
        "return_date": null,
        "passengers": 1,
        "trip_type": "ONE_WAY"
    });
    if let Some(key) = sort {
        body["sort"] = json!(key);
    }
    body
}

#[tokio::test]
async fn test_search_returns_ranked_offers() {
    let response = app(test_state())
        .oneshot(post_json("/v1/flights/search", search_request(None)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let offers = body_json(response).await;
    let ids: Vec<&str> = offers
        .as_array()
        .expect("array")
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();

    // Heuristic ranking of the demo inventory, ties in catalog order.
    assert_eq!(ids, vec!["1", "2", "3", "5", "4"]);
    assert_eq!(offers[0]["score"], 37);
}

#[tokio::test]
async fn test_search_applies_requested_sort() {
    let response = app(test_state())
        .oneshot(post_json("/v1/flights/search", search_request(Some("price"))))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let offers = body_json(response).await;
    let prices: Vec<u64> = offers
        .as_array()
        .expect("array")
        .iter()
        .map(|o| o["price"].as_u64().unwrap())
        .collect();

    assert_eq!(prices, vec![179, 249, 299, 329, 399]);
}

#[tokio::test]
async fn test_prediction_is_pinned_by_picker() {
    let response = app(test_state())
        .oneshot(get("/v1/flights/1/prediction"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let prediction = body_json(response).await;
    assert_eq!(prediction["trend"], "up");
    assert_eq!(prediction["confidence"], 92);
}

#[tokio::test]
async fn test_prediction_unknown_offer_is_404() {
    let response = app(test_state())
        .oneshot(get("/v1/flights/999/prediction"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_insights_returns_three_strings() {
    let response = app(test_state())
        .oneshot(get("/v1/insights/JFK-LAX"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let insights = body_json(response).await;
    assert_eq!(insights.as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn test_booking_round_trip() {
    let state = test_state();

    let response = app(state.clone())
        .oneshot(post_json(
            "/v1/bookings",
            json!({
                "offer_id": "1",
                "passenger": {
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": "ada@example.com",
                    "phone": null,
                    "date_of_birth": null,
                    "passport_number": null
                },
                "seat": "12A",
                "add_ons": { "baggage": true }
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);

    let details = body_json(response).await;
    let reference = details["reference"].as_str().expect("reference");
    assert!(reference.starts_with("FL"));
    assert_eq!(details["total_price"], 299 + 25 + 15);
    assert_eq!(details["status"], "CONFIRMED");
    // The ledger score is recomputed, not the catalog placeholder.
    assert_eq!(details["offer"]["score"], 37);

    let response = app(state)
        .oneshot(get(&format!("/v1/bookings/{reference}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_booking_missing_fields_is_400() {
    let response = app(test_state())
        .oneshot(post_json(
            "/v1/bookings",
            json!({
                "offer_id": "1",
                "passenger": {
                    "first_name": "",
                    "last_name": "Lovelace",
                    "email": "",
                    "phone": null,
                    "date_of_birth": null,
                    "passport_number": null
                },
                "seat": null
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("first_name"));
    assert!(message.contains("email"));
}

#[tokio::test]
async fn test_booking_unknown_offer_is_404() {
    let response = app(test_state())
        .oneshot(post_json(
            "/v1/bookings",
            json!({
                "offer_id": "999",
                "passenger": {
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": "ada@example.com",
                    "phone": null,
                    "date_of_birth": null,
                    "passport_number": null
                },
                "seat": null
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let response = app(test_state())
        .oneshot(get("/health"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
