//! One-way trip lookup.

use std::sync::Arc;

use async_trait::async_trait;
use transtar_domain::{format_locale_timestamp, Card, Reply, TripRecord, MISSING_VALUE};
use transtar_shared::QueryResult;

use super::{params, ActionHandler, HandlerError};
use crate::infrastructure::ports::{ClockPort, TripRepo};

/// Lists scheduled trips for one pickup/drop pair on one date.
pub struct OneWayTrips {
    trips: Arc<dyn TripRepo>,
    clock: Arc<dyn ClockPort>,
}

impl OneWayTrips {
    pub fn new(trips: Arc<dyn TripRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { trips, clock }
    }
}

#[async_trait]
impl ActionHandler for OneWayTrips {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let request = match params::one_way_trip(query.context_parameters()) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "One-way trip request incomplete");
                return Ok(Reply::rephrase());
            }
        };

        let today = self.clock.now().date_naive();
        let records = self.trips.find_trips(&request.query, today).await?;

        if records.is_empty() {
            return Ok(Reply::plain_text(format!(
                "Sorry, No trips available from {} to {} on {}.",
                request.pickup_as_typed, request.drop_as_typed, request.date_as_typed
            )));
        }

        tracing::debug!(count = records.len(), "One-way trips found");
        Ok(Reply::rich(records.iter().map(trip_card).collect()))
    }
}

fn trip_card(trip: &TripRecord) -> Card {
    let end = trip
        .end_date
        .map(format_locale_timestamp)
        .unwrap_or_else(|| MISSING_VALUE.to_string());

    Card::description(format!("{} - {}", trip.pickup_location, trip.drop_location)).with_line(
        format!(
            "Start Date: {} - End Date: {}",
            format_locale_timestamp(trip.start_date),
            end
        ),
    )
}
