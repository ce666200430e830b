use serde::{Deserialize, Serialize};

/// One end of a flight: scheduled local time plus location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// Local wall-clock time, "HH:MM" 24h.
    pub time: String,
    pub airport: String,
    pub city: String,
}

/// A single flight result presented to the traveler.
///
/// `score` is derived by the ranking heuristic at search time. Values
/// carried by a catalog are placeholders and get overwritten on every
/// search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOffer {
    /// Unique within a result set.
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure: Leg,
    pub arrival: Leg,
    /// Formatted elapsed time, e.g. "5h 15m".
    pub duration: String,
    /// Positive, currency-agnostic.
    pub price: u32,
    pub stops: u32,
    pub score: u8,
    pub aircraft: Option<String>,
    pub amenities: Option<Vec<String>>,
}

impl FlightOffer {
    /// Departure hour parsed from the "HH:MM" display time.
    ///
    /// Returns `None` when the time string does not start with a number;
    /// scoring treats that as outside every preferred band.
    pub fn departure_hour(&self) -> Option<u32> {
        self.departure.time.split(':').next()?.parse().ok()
    }

    /// Number of amenity labels, 0 when absent.
    pub fn amenity_count(&self) -> usize {
        self.amenities.as_ref().map_or(0, |a| a.len())
    }
}
