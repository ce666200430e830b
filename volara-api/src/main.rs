use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use volara_api::{app, AppState};
use volara_booking::desk::BookingDesk;
use volara_catalog::dataset::StaticCatalog;
use volara_catalog::source::CatalogSource;
use volara_search::prediction::PricePredictor;
use volara_search::service::FlightSearchService;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "volara_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = volara_api::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Volara API on port {}", config.server.port);

    let catalog: Arc<dyn CatalogSource> = Arc::new(StaticCatalog::default());

    let state = AppState {
        catalog: catalog.clone(),
        search: Arc::new(FlightSearchService::with_config(
            catalog,
            config.ranking.clone(),
            config.search.clone(),
        )),
        predictor: Arc::new(PricePredictor::new()),
        desk: Arc::new(BookingDesk::new()),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
