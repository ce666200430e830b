use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use volara_core::offer::FlightOffer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub passport_number: Option<String>,
}

/// Extras selected on the booking screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOns {
    pub baggage: bool,
    pub meal: Option<String>,
    pub insurance: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// A confirmed mock booking. Lives only for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    pub id: Uuid,
    /// "FL" plus six base-36 characters, the traveler-facing handle.
    pub reference: String,
    pub offer: FlightOffer,
    pub passenger: PassengerInfo,
    pub seat: Option<String>,
    pub add_ons: AddOns,
    pub total_price: u32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
