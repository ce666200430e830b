use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripType {
    OneWay,
    RoundTrip,
}

/// The traveler's search query. Purely a descriptor: the mock catalog is
/// not filtered by it, but every well-formed value must be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub from_city: String,
    pub to_city: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    /// At least 1.
    pub passengers: u32,
    pub trip_type: TripType,
}

/// Ordering key for re-sorting an already-fetched result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Price,
    Duration,
    Score,
}
