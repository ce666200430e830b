use std::sync::Arc;

use volara_booking::desk::BookingDesk;
use volara_catalog::source::CatalogSource;
use volara_search::prediction::PricePredictor;
use volara_search::service::FlightSearchService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub search: Arc<FlightSearchService>,
    pub predictor: Arc<PricePredictor>,
    pub desk: Arc<BookingDesk>,
}
