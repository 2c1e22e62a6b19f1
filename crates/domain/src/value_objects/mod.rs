//! Value objects - Immutable objects defined by their attributes

mod journey_date;
mod location;
mod names;
mod reply;

pub use journey_date::{format_locale_timestamp, JourneyDate};
pub use location::{resolve_location, LOCATION_ALIASES};
pub use names::{CountryName, PassengerName, TicketId, MISSING_VALUE};
pub use reply::{
    Card, CardKind, Reply, FALLBACK_LINES, FALLBACK_TITLE, REPHRASE_TEXT, TICKET_DETAILS_TITLE,
};
