//! Scheduled trips between two locations.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::value_objects::{resolve_location, JourneyDate};

/// One-way trip lookup with alias-resolved location names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripQuery {
    pub pickup_location: String,
    pub drop_location: String,
    pub date: JourneyDate,
}

impl TripQuery {
    /// Build a query, substituting known location aliases.
    pub fn new(pickup_location: &str, drop_location: &str, date: JourneyDate) -> Self {
        Self {
            pickup_location: resolve_location(pickup_location.trim()).to_string(),
            drop_location: resolve_location(drop_location.trim()).to_string(),
            date,
        }
    }

    /// Lowercased pickup name, compared against `LOWER(locations.name)`.
    pub fn pickup_key(&self) -> String {
        self.pickup_location.to_lowercase()
    }

    pub fn drop_key(&self) -> String {
        self.drop_location.to_lowercase()
    }

    /// The same route travelled back on another date.
    pub fn reversed(&self, date: JourneyDate) -> Self {
        Self {
            pickup_location: self.drop_location.clone(),
            drop_location: self.pickup_location.clone(),
            date,
        }
    }
}

/// Round trip: an outbound leg plus the reverse leg on the return date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTripQuery {
    pub outbound: TripQuery,
    pub return_date: JourneyDate,
}

impl RoundTripQuery {
    pub fn new(outbound: TripQuery, return_date: JourneyDate) -> Self {
        Self {
            outbound,
            return_date,
        }
    }

    pub fn return_leg(&self) -> TripQuery {
        self.outbound.reversed(self.return_date)
    }
}

/// An active trip row joined with its pickup and drop location names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub pickup_location: String,
    pub drop_location: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
}
