pub mod insights;
pub mod prediction;
pub mod scoring;
pub mod service;
pub mod session;
pub mod sort;

pub use prediction::{OutcomePicker, PricePrediction, PricePredictor, PriceTrend};
pub use scoring::{score, ScoreWeights};
pub use service::{FlightSearchService, SearchConfig, SearchError};
pub use session::SearchSession;
pub use sort::resort;
