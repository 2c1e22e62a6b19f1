//! Booked tickets, one record type per ticket kind.
//!
//! Numeric and status columns are kept as the text the store renders;
//! they are only ever displayed, never computed on.

use serde::{Deserialize, Serialize};

use crate::value_objects::PassengerName;

/// A trip ticket joined with passenger and location names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripTicket {
    pub passenger: PassengerName,
    pub seat_numbers: Option<String>,
    pub paid_amount: Option<String>,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
}

/// A tour ticket with seat counts per fare class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourTicket {
    pub passenger: PassengerName,
    pub paid_amount: Option<String>,
    pub adult_seats: Option<String>,
    pub child_seats: Option<String>,
    pub special_seats: Option<String>,
    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,
    pub status: Option<String>,
}

/// An attraction ticket joined with the attraction's price schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttractionTicket {
    pub passenger: PassengerName,
    pub attraction_name: Option<String>,
    pub adult_price: Option<String>,
    pub child_price: Option<String>,
    pub misc_price: Option<String>,
    pub adult_seats: Option<String>,
    pub child_seats: Option<String>,
    pub misc_seats: Option<String>,
    pub paid_amount: Option<String>,
    pub status: Option<String>,
}
