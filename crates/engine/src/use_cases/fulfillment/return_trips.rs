//! Round trip availability: both legs must have a scheduled trip.

use std::sync::Arc;

use async_trait::async_trait;
use transtar_domain::{Card, Reply};
use transtar_shared::QueryResult;

use super::{params, ActionHandler, HandlerError};
use crate::infrastructure::ports::{ClockPort, TripRepo};

pub struct ReturnTrips {
    trips: Arc<dyn TripRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ReturnTrips {
    pub fn new(trips: Arc<dyn TripRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { trips, clock }
    }
}

#[async_trait]
impl ActionHandler for ReturnTrips {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let request = match params::round_trip(query.context_parameters()) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Round trip request incomplete");
                return Ok(Reply::rephrase());
            }
        };

        let today = self.clock.now().date_naive();
        let outbound = &request.query.outbound;
        let return_leg = request.query.return_leg();

        let (going, coming_back) = tokio::try_join!(
            self.trips.find_trips(outbound, today),
            self.trips.find_trips(&return_leg, today),
        )?;

        tracing::debug!(
            outbound = going.len(),
            inbound = coming_back.len(),
            "Round trip legs looked up"
        );

        if going.is_empty() || coming_back.is_empty() {
            return Ok(Reply::plain_text(format!(
                "Sorry, there are no return trips available from {} to {}.",
                request.pickup_as_typed, request.drop_as_typed
            )));
        }

        let card = Card::description(format!(
            "{} - {}",
            outbound.pickup_location, outbound.drop_location
        ))
        .with_line(format!(
            "Journey Date: {} - Return Date: {}",
            outbound.date.to_display(),
            request.query.return_date.to_display()
        ));

        Ok(Reply::rich(vec![card]))
    }
}
