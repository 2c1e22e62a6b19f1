//! Booking records read from the store and the queries that select them.

mod package;
mod ticket;
mod trip;

pub use package::{AttractionRecord, TourRecord};
pub use ticket::{AttractionTicket, TourTicket, TripTicket};
pub use trip::{RoundTripQuery, TripQuery, TripRecord};
