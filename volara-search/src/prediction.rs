use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

/// Cosmetic fare-trend flavor text. Not a model: one of three fixed
/// outcomes chosen uniformly at random.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePrediction {
    pub trend: PriceTrend,
    /// 0-100.
    pub confidence: u8,
    pub recommendation: String,
}

/// Selects one of `outcomes` indices. Injectable so tests can pin the
/// choice.
pub trait OutcomePicker: Send + Sync {
    fn pick(&self, outcomes: usize) -> usize;
}

/// Production picker backed by the thread-local RNG.
pub struct RandomPicker;

impl OutcomePicker for RandomPicker {
    fn pick(&self, outcomes: usize) -> usize {
        rand::thread_rng().gen_range(0..outcomes)
    }
}

pub struct PricePredictor {
    picker: Box<dyn OutcomePicker>,
}

impl PricePredictor {
    pub fn new() -> Self {
        Self::with_picker(Box::new(RandomPicker))
    }

    pub fn with_picker(picker: Box<dyn OutcomePicker>) -> Self {
        Self { picker }
    }

    /// Fare-trend flavor for an offer.
    pub fn predict(&self, offer_id: &str) -> PricePrediction {
        let mut outcomes = outcome_pool();
        let chosen = self.picker.pick(outcomes.len()) % outcomes.len();
        let prediction = outcomes.swap_remove(chosen);

        tracing::debug!(offer_id, trend = ?prediction.trend, "price prediction served");
        prediction
    }
}

impl Default for PricePredictor {
    fn default() -> Self {
        Self::new()
    }
}

fn outcome_pool() -> Vec<PricePrediction> {
    vec![
        PricePrediction {
            trend: PriceTrend::Down,
            confidence: 85,
            recommendation: "Wait 2-3 days for better prices".to_string(),
        },
        PricePrediction {
            trend: PriceTrend::Up,
            confidence: 92,
            recommendation: "Book now - prices likely to increase".to_string(),
        },
        PricePrediction {
            trend: PriceTrend::Stable,
            confidence: 78,
            recommendation: "Prices are stable - book when ready".to_string(),
        },
    ]
}
