pub mod desk;
pub mod models;

pub use desk::{booking_reference, quote, BookingDesk, BookingError};
pub use models::{AddOns, BookingDetails, BookingStatus, PassengerInfo};
