//! Ticket tracking by booking id.
//!
//! Each tracker reads the first matching row and renders it as a single
//! details card. Absent columns render as `N/A`.

use std::sync::Arc;

use async_trait::async_trait;
use transtar_domain::{
    AttractionTicket, Card, Reply, TicketId, TourTicket, TripTicket, MISSING_VALUE,
    TICKET_DETAILS_TITLE,
};
use transtar_shared::QueryResult;

use super::{params, ActionHandler, HandlerError};
use crate::infrastructure::ports::TicketRepo;

fn field(label: &str, value: &Option<String>) -> String {
    format!("{label}: {}", value.as_deref().unwrap_or(MISSING_VALUE))
}

fn not_found(id: &TicketId) -> Reply {
    Reply::plain_text(format!("Sorry, there are no tickets found for {id}."))
}

fn requested_id(query: &QueryResult, kind: &str) -> Option<TicketId> {
    match params::ticket_id(query) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::debug!(error = %e, kind, "Ticket lookup without an id");
            None
        }
    }
}

fn details(lines: Vec<String>) -> Reply {
    Reply::rich(vec![Card::description(TICKET_DETAILS_TITLE).with_lines(lines)])
}

pub struct TrackTripTicket {
    tickets: Arc<dyn TicketRepo>,
}

impl TrackTripTicket {
    pub fn new(tickets: Arc<dyn TicketRepo>) -> Self {
        Self { tickets }
    }
}

#[async_trait]
impl ActionHandler for TrackTripTicket {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let Some(id) = requested_id(query, "trip") else {
            return Ok(Reply::rephrase());
        };

        let rows = self.tickets.find_trip_tickets(&id).await?;
        let Some(ticket) = rows.into_iter().next() else {
            return Ok(not_found(&id));
        };

        Ok(details(trip_lines(&ticket)))
    }
}

fn trip_lines(ticket: &TripTicket) -> Vec<String> {
    vec![
        format!("Passenger Name: {}", ticket.passenger),
        field("Seats", &ticket.seat_numbers),
        field("Paid Amount", &ticket.paid_amount),
        field("Pickup Location", &ticket.pickup_location),
        field("Drop Location", &ticket.drop_location),
    ]
}

pub struct TrackTourTicket {
    tickets: Arc<dyn TicketRepo>,
}

impl TrackTourTicket {
    pub fn new(tickets: Arc<dyn TicketRepo>) -> Self {
        Self { tickets }
    }
}

#[async_trait]
impl ActionHandler for TrackTourTicket {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let Some(id) = requested_id(query, "tour") else {
            return Ok(Reply::rephrase());
        };

        let rows = self.tickets.find_tour_tickets(&id).await?;
        let Some(ticket) = rows.into_iter().next() else {
            return Ok(not_found(&id));
        };

        Ok(details(tour_lines(&ticket)))
    }
}

fn tour_lines(ticket: &TourTicket) -> Vec<String> {
    vec![
        format!("Passenger Name: {}", ticket.passenger),
        field("Paid Amount", &ticket.paid_amount),
        field("Adult Seats", &ticket.adult_seats),
        field("Child Seats", &ticket.child_seats),
        field("Special Seats", &ticket.special_seats),
        field("Pickup Location", &ticket.pickup_location),
        field("Drop Location", &ticket.drop_location),
        field("Ticket Status", &ticket.status),
    ]
}

pub struct TrackAttractionTicket {
    tickets: Arc<dyn TicketRepo>,
}

impl TrackAttractionTicket {
    pub fn new(tickets: Arc<dyn TicketRepo>) -> Self {
        Self { tickets }
    }
}

#[async_trait]
impl ActionHandler for TrackAttractionTicket {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let Some(id) = requested_id(query, "attraction") else {
            return Ok(Reply::rephrase());
        };

        let rows = self.tickets.find_attraction_tickets(&id).await?;
        let Some(ticket) = rows.into_iter().next() else {
            return Ok(not_found(&id));
        };

        Ok(details(attraction_lines(&ticket)))
    }
}

fn attraction_lines(ticket: &AttractionTicket) -> Vec<String> {
    vec![
        field("Attraction Name", &ticket.attraction_name),
        field("Adult Price", &ticket.adult_price),
        field("Child Price", &ticket.child_price),
        field("Misc Price", &ticket.misc_price),
        format!("Passenger Name: {}", ticket.passenger),
        field("Adult Seats", &ticket.adult_seats),
        field("Child Seats", &ticket.child_seats),
        field("Misc Seats", &ticket.misc_seats),
        field("Paid Amount", &ticket.paid_amount),
        field("Ticket Status", &ticket.status),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockTicketRepo, RepoError};
    use crate::use_cases::fulfillment::test_support::{context_query, top_level_query};
    use mockall::predicate;
    use serde_json::json;
    use transtar_domain::{CardKind, PassengerName};

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[tokio::test]
    async fn trip_ticket_uses_first_row_only() {
        let mut repo = MockTicketRepo::new();
        repo.expect_find_trip_tickets()
            .with(predicate::eq(TicketId::new("TT-1001").unwrap()))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    TripTicket {
                        passenger: PassengerName::new(some("Aisha"), some("Rahman")),
                        seat_numbers: some("12A,12B"),
                        paid_amount: some("80.00"),
                        pickup_location: some("Kuala Lumpur"),
                        drop_location: some("Singapore"),
                    },
                    TripTicket {
                        passenger: PassengerName::new(some("Second"), some("Row")),
                        ..TripTicket::default()
                    },
                ])
            });

        let handler = TrackTripTicket::new(Arc::new(repo));
        let query = top_level_query("track.tripticket-custom", json!({ "ticket_id": "TT-1001" }));
        let reply = handler.handle(&query).await.unwrap();

        let cards = reply.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, CardKind::Description);
        assert_eq!(cards[0].title, TICKET_DETAILS_TITLE);
        assert_eq!(
            cards[0].text,
            vec![
                "Passenger Name: Aisha Rahman",
                "Seats: 12A,12B",
                "Paid Amount: 80.00",
                "Pickup Location: Kuala Lumpur",
                "Drop Location: Singapore",
            ]
        );
    }

    #[tokio::test]
    async fn unknown_ticket_is_reported() {
        let mut repo = MockTicketRepo::new();
        repo.expect_find_tour_tickets().returning(|_| Ok(vec![]));

        let handler = TrackTourTicket::new(Arc::new(repo));
        let query = top_level_query("track.tourticket-custom", json!({ "ticket_id": "NOPE-7" }));
        let reply = handler.handle(&query).await.unwrap();

        assert_eq!(reply.text(), Some("Sorry, there are no tickets found for NOPE-7."));
    }

    #[tokio::test]
    async fn tour_ticket_renders_nulls_as_placeholder() {
        let mut repo = MockTicketRepo::new();
        repo.expect_find_tour_tickets().returning(|_| {
            Ok(vec![TourTicket {
                paid_amount: some("1200.00"),
                adult_seats: some("2"),
                child_seats: some("1"),
                status: some("1"),
                ..TourTicket::default()
            }])
        });

        let handler = TrackTourTicket::new(Arc::new(repo));
        let query = context_query("track.tourticket-custom", json!({ "ticket_id": "TR-55" }));
        let reply = handler.handle(&query).await.unwrap();

        assert_eq!(
            reply.cards()[0].text,
            vec![
                "Passenger Name: N/A",
                "Paid Amount: 1200.00",
                "Adult Seats: 2",
                "Child Seats: 1",
                "Special Seats: N/A",
                "Pickup Location: N/A",
                "Drop Location: N/A",
                "Ticket Status: 1",
            ]
        );
    }

    #[tokio::test]
    async fn attraction_ticket_lists_prices_before_passenger() {
        let mut repo = MockTicketRepo::new();
        repo.expect_find_attraction_tickets().returning(|_| {
            Ok(vec![AttractionTicket {
                passenger: PassengerName::new(some("Wei"), None),
                attraction_name: some("Night Safari"),
                adult_price: some("55.00"),
                child_price: some("38.00"),
                misc_price: some("0.00"),
                adult_seats: some("2"),
                child_seats: some("0"),
                misc_seats: some("0"),
                paid_amount: some("110.00"),
                status: some("2"),
            }])
        });

        let handler = TrackAttractionTicket::new(Arc::new(repo));
        let query = top_level_query("track.attractionticket-custom", json!({ "ticket_id": "AT-9" }));
        let reply = handler.handle(&query).await.unwrap();

        let text = &reply.cards()[0].text;
        assert_eq!(text.len(), 10);
        assert_eq!(text[0], "Attraction Name: Night Safari");
        assert_eq!(text[4], "Passenger Name: Wei");
        assert_eq!(text[9], "Ticket Status: 2");
    }

    #[tokio::test]
    async fn missing_ticket_id_asks_to_rephrase() {
        let mut repo = MockTicketRepo::new();
        repo.expect_find_attraction_tickets().never();

        let handler = TrackAttractionTicket::new(Arc::new(repo));
        let query = top_level_query("track.attractionticket-custom", json!({ "ticket_id": "  " }));

        assert_eq!(handler.handle(&query).await.unwrap(), Reply::rephrase());
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let mut repo = MockTicketRepo::new();
        repo.expect_find_trip_tickets()
            .returning(|_| Err(RepoError::database("find_trip_tickets", "lost connection")));

        let handler = TrackTripTicket::new(Arc::new(repo));
        let query = top_level_query("track.tripticket-custom", json!({ "ticket_id": "TT-1" }));

        assert!(matches!(
            handler.handle(&query).await,
            Err(HandlerError::Repo(_))
        ));
    }
}
