use serde::{Deserialize, Serialize};
use volara_core::offer::FlightOffer;

/// Weights applied to the four ranking sub-scores.
///
/// The defaults are the canonical heuristic; config can override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub price: f64,
    pub directness: f64,
    pub time_of_day: f64,
    pub amenity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            price: 0.4,
            directness: 0.3,
            time_of_day: 0.2,
            amenity: 0.1,
        }
    }
}

/// Price competitiveness: linear decay, a 1000 fare floors at 0.
/// Truncated to an integer before weighting (299 -> 70.1 -> 70).
fn price_subscore(price: u32) -> u32 {
    (100.0 - price as f64 / 10.0).max(0.0) as u32
}

/// Direct flights get a flat bonus; any connection forfeits it.
fn directness_subscore(stops: u32) -> u32 {
    if stops == 0 {
        20
    } else {
        0
    }
}

/// Morning departures (06-10) score highest, afternoons (14-18) get a
/// smaller bump. An unparseable time counts as neither band.
fn time_of_day_subscore(offer: &FlightOffer) -> u32 {
    match offer.departure_hour() {
        Some(hour) if (6..=10).contains(&hour) => 10,
        Some(hour) if (14..=18).contains(&hour) => 5,
        _ => 0,
    }
}

fn amenity_subscore(offer: &FlightOffer) -> u32 {
    offer.amenity_count() as u32 * 2
}

/// Computes the ranking score for an offer.
///
/// Weighted sum of the four sub-scores, rounded, clamped to at most 100.
/// The lower bound is naturally 0 since every sub-score is non-negative.
pub fn score(offer: &FlightOffer, weights: &ScoreWeights) -> u8 {
    let total = price_subscore(offer.price) as f64 * weights.price
        + directness_subscore(offer.stops) as f64 * weights.directness
        + time_of_day_subscore(offer) as f64 * weights.time_of_day
        + amenity_subscore(offer) as f64 * weights.amenity;

    total.round().min(100.0) as u8
}
