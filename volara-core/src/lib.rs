pub mod criteria;
pub mod duration;
pub mod offer;

pub use criteria::{SearchCriteria, SortKey, TripType};
pub use offer::{FlightOffer, Leg};
