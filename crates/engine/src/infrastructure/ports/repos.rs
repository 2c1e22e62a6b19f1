//! Repository port traits for the booking store.
//!
//! Every lookup is a standalone read. "Active" filters (not deleted, status
//! flag set, not in the past) are the adapter's responsibility; `today` is
//! passed in so the cut-off date comes from the injected clock.

use async_trait::async_trait;
use chrono::NaiveDate;
use transtar_domain::{
    AttractionRecord, AttractionTicket, CountryName, TicketId, TourRecord, TourTicket, TripQuery,
    TripRecord, TripTicket,
};

use super::error::RepoError;

// =============================================================================
// Trips
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepo: Send + Sync {
    /// Active trips on the query's date between the two named locations.
    ///
    /// Location names are compared case-insensitively.
    async fn find_trips(
        &self,
        query: &TripQuery,
        today: NaiveDate,
    ) -> Result<Vec<TripRecord>, RepoError>;
}

// =============================================================================
// Packages
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepo: Send + Sync {
    async fn find_tours(
        &self,
        country: &CountryName,
        today: NaiveDate,
    ) -> Result<Vec<TourRecord>, RepoError>;

    async fn find_attractions(
        &self,
        country: &CountryName,
        today: NaiveDate,
    ) -> Result<Vec<AttractionRecord>, RepoError>;
}

// =============================================================================
// Tickets
// =============================================================================

/// Ticket lookups by booking id. Callers use the first row only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepo: Send + Sync {
    async fn find_trip_tickets(&self, booking_id: &TicketId)
        -> Result<Vec<TripTicket>, RepoError>;

    async fn find_tour_tickets(&self, booking_id: &TicketId)
        -> Result<Vec<TourTicket>, RepoError>;

    async fn find_attraction_tickets(
        &self,
        booking_id: &TicketId,
    ) -> Result<Vec<AttractionTicket>, RepoError>;
}
