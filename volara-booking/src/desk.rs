use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;
use volara_core::offer::FlightOffer;

use crate::models::{AddOns, BookingDetails, BookingStatus, PassengerInfo};

/// Flat add-on fees from the booking screen.
pub const BAGGAGE_FEE: u32 = 25;
pub const SEAT_SELECTION_FEE: u32 = 15;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Missing required passenger information: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Total charge for an offer with the selected extras.
///
/// The mock charges the base fare once regardless of passenger count,
/// plus flat fees for checked baggage and seat selection.
pub fn quote(offer: &FlightOffer, seat: Option<&str>, add_ons: &AddOns) -> u32 {
    let mut total = offer.price;
    if add_ons.baggage {
        total += BAGGAGE_FEE;
    }
    if seat.is_some() {
        total += SEAT_SELECTION_FEE;
    }
    total
}

/// "FL" plus six random base-36 characters, uppercase.
pub fn booking_reference<R: Rng>(rng: &mut R) -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let suffix: String = (0..6)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("FL{suffix}")
}

/// Confirms mock bookings and keeps them for the life of the process.
///
/// There is no payment step and no durable storage; confirmation means a
/// reference was issued and the record is retrievable by it.
pub struct BookingDesk {
    ledger: Mutex<HashMap<String, BookingDetails>>,
}

impl BookingDesk {
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(HashMap::new()),
        }
    }

    /// Validates passenger details, prices the extras, and records a
    /// confirmed booking.
    pub fn confirm(
        &self,
        offer: FlightOffer,
        passenger: PassengerInfo,
        seat: Option<String>,
        add_ons: AddOns,
    ) -> Result<BookingDetails, BookingError> {
        let mut missing = Vec::new();
        if passenger.first_name.trim().is_empty() {
            missing.push("first_name");
        }
        if passenger.last_name.trim().is_empty() {
            missing.push("last_name");
        }
        if passenger.email.trim().is_empty() {
            missing.push("email");
        }
        if !missing.is_empty() {
            return Err(BookingError::MissingFields(missing));
        }

        let total_price = quote(&offer, seat.as_deref(), &add_ons);
        let reference = booking_reference(&mut rand::thread_rng());

        let details = BookingDetails {
            id: Uuid::new_v4(),
            reference: reference.clone(),
            offer,
            passenger,
            seat,
            add_ons,
            total_price,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        tracing::info!(reference = %details.reference, total = total_price, "booking confirmed");

        self.ledger
            .lock()
            .expect("booking ledger poisoned")
            .insert(reference, details.clone());

        Ok(details)
    }

    /// Looks up a booking by its traveler-facing reference.
    pub fn get(&self, reference: &str) -> Option<BookingDetails> {
        self.ledger
            .lock()
            .expect("booking ledger poisoned")
            .get(reference)
            .cloned()
    }

    pub fn confirmed_count(&self) -> usize {
        self.ledger.lock().expect("booking ledger poisoned").len()
    }
}

impl Default for BookingDesk {
    fn default() -> Self {
        Self::new()
    }
}
