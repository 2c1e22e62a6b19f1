//! Transtar Domain - core types for the booking assistant fulfillment service.
//!
//! Everything here is pure: no I/O, no async. The engine crate adapts these
//! types to the store and to the webhook wire format.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    AttractionRecord, AttractionTicket, RoundTripQuery, TourRecord, TourTicket, TripQuery,
    TripRecord, TripTicket,
};
pub use error::DomainError;
pub use value_objects::{
    format_locale_timestamp, resolve_location, Card, CardKind, CountryName, JourneyDate,
    PassengerName, Reply, TicketId, FALLBACK_LINES, FALLBACK_TITLE, LOCATION_ALIASES,
    MISSING_VALUE, REPHRASE_TEXT, TICKET_DETAILS_TITLE,
};
