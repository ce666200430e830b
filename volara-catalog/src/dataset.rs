use async_trait::async_trait;
use volara_core::offer::{FlightOffer, Leg};

use crate::source::{CatalogError, CatalogSource};

/// Fixed in-memory flight inventory.
///
/// The scores in the dataset are display placeholders only; the search
/// service recomputes every score from the ranking heuristic.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    offers: Vec<FlightOffer>,
}

impl StaticCatalog {
    pub fn new(offers: Vec<FlightOffer>) -> Self {
        Self { offers }
    }

    pub fn offers(&self) -> &[FlightOffer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(default_offers())
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> Result<Vec<FlightOffer>, CatalogError> {
        Ok(self.offers.clone())
    }
}

fn leg(time: &str, airport: &str, city: &str) -> Leg {
    Leg {
        time: time.to_string(),
        airport: airport.to_string(),
        city: city.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn offer(
    id: &str,
    airline: &str,
    flight_number: &str,
    departure: Leg,
    arrival: Leg,
    duration: &str,
    price: u32,
    stops: u32,
    score: u8,
    aircraft: &str,
    amenities: &[&str],
) -> FlightOffer {
    FlightOffer {
        id: id.to_string(),
        airline: airline.to_string(),
        flight_number: flight_number.to_string(),
        departure,
        arrival,
        duration: duration.to_string(),
        price,
        stops,
        score,
        aircraft: Some(aircraft.to_string()),
        amenities: Some(amenities.iter().map(|a| a.to_string()).collect()),
    }
}

/// The demo inventory: five JFK-LAX departures.
pub fn default_offers() -> Vec<FlightOffer> {
    vec![
        offer(
            "1",
            "SkyLine Airways",
            "SL 1234",
            leg("08:30", "JFK", "New York"),
            leg("11:45", "LAX", "Los Angeles"),
            "5h 15m",
            299,
            0,
            95,
            "Boeing 737-800",
            &["WiFi", "Entertainment", "Power Outlets"],
        ),
        offer(
            "2",
            "Global Wings",
            "GW 5678",
            leg("14:20", "JFK", "New York"),
            leg("17:55", "LAX", "Los Angeles"),
            "5h 35m",
            249,
            0,
            88,
            "Airbus A320",
            &["WiFi", "Snacks"],
        ),
        offer(
            "3",
            "Budget Air",
            "BA 9012",
            leg("06:15", "JFK", "New York"),
            leg("12:30", "LAX", "Los Angeles"),
            "8h 15m",
            179,
            1,
            72,
            "Boeing 737-700",
            &["Basic Service"],
        ),
        offer(
            "4",
            "Premium Jets",
            "PJ 3456",
            leg("19:45", "JFK", "New York"),
            leg("23:10", "LAX", "Los Angeles"),
            "5h 25m",
            399,
            0,
            91,
            "Boeing 787-9",
            &["WiFi", "Premium Entertainment", "Power Outlets", "Premium Meals"],
        ),
        offer(
            "5",
            "Express Air",
            "EA 7890",
            leg("12:00", "JFK", "New York"),
            leg("15:30", "LAX", "Los Angeles"),
            "5h 30m",
            329,
            0,
            85,
            "Airbus A321",
            &["WiFi", "Entertainment"],
        ),
    ]
}
