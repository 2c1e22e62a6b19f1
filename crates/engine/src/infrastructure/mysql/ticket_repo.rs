//! Ticket repository implementation for MySQL.
//!
//! Amounts, seat counts and statuses are cast to text in SQL; they are only
//! ever displayed.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use transtar_domain::{AttractionTicket, TicketId, TourTicket, TripTicket};

use super::helpers::{opt_text, passenger};
use crate::infrastructure::ports::{RepoError, TicketRepo};

const FIND_TRIP_TICKETS: &str = r#"
    SELECT CAST(tickets.paidamount AS CHAR) AS paid_amount,
           CAST(tickets.seatnumber AS CHAR) AS seat_numbers,
           user_details.first_name,
           user_details.last_name,
           pickup_location.name AS pickup_name,
           drop_location.name AS drop_name
    FROM tickets
    LEFT JOIN users ON users.id = tickets.passanger_id
    LEFT JOIN user_details ON user_details.user_id = users.id
    LEFT JOIN locations AS pickup_location ON pickup_location.id = tickets.pick_location_id
    LEFT JOIN locations AS drop_location ON drop_location.id = tickets.drop_location_id
    WHERE tickets.booking_id = ?
      AND tickets.deleted_at IS NULL
"#;

const FIND_TOUR_TICKETS: &str = r#"
    SELECT CAST(tourtickets.paid_amount AS CHAR) AS paid_amount,
           CAST(tourtickets.adult_seats AS CHAR) AS adult_seats,
           CAST(tourtickets.child_seats AS CHAR) AS child_seats,
           CAST(tourtickets.special_seats AS CHAR) AS special_seats,
           CAST(tourtickets.status AS CHAR) AS status,
           user_details.first_name,
           user_details.last_name,
           pickup_location.name AS pickup_name,
           drop_location.name AS drop_name
    FROM tourtickets
    LEFT JOIN users ON users.id = tourtickets.passanger_id
    LEFT JOIN user_details ON user_details.user_id = users.id
    LEFT JOIN locations AS pickup_location ON pickup_location.id = tourtickets.pick_location_id
    LEFT JOIN locations AS drop_location ON drop_location.id = tourtickets.drop_location_id
    WHERE tourtickets.booking_id = ?
      AND tourtickets.deleted_at IS NULL
"#;

const FIND_ATTRACTION_TICKETS: &str = r#"
    SELECT CAST(attractiontickets.paidamount AS CHAR) AS paid_amount,
           CAST(attractiontickets.adult AS CHAR) AS adult_seats,
           CAST(attractiontickets.child AS CHAR) AS child_seats,
           CAST(attractiontickets.misc AS CHAR) AS misc_seats,
           CAST(attractiontickets.status AS CHAR) AS status,
           user_details.first_name,
           user_details.last_name,
           attractions.attraction_name,
           CAST(attractions.adult_price AS CHAR) AS adult_price,
           CAST(attractions.child_price AS CHAR) AS child_price,
           CAST(attractions.misc_price AS CHAR) AS misc_price
    FROM attractiontickets
    LEFT JOIN users ON users.id = attractiontickets.passanger_id
    LEFT JOIN user_details ON user_details.user_id = users.id
    LEFT JOIN attractions ON attractions.id = attractiontickets.attraction_id
    WHERE attractiontickets.booking_id = ?
      AND attractiontickets.deleted_at IS NULL
"#;

pub struct MySqlTicketRepo {
    pool: MySqlPool,
}

impl MySqlTicketRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch(
        &self,
        sql: &'static str,
        booking_id: &TicketId,
        operation: &'static str,
    ) -> Result<Vec<MySqlRow>, RepoError> {
        let rows = sqlx::query(sql)
            .bind(booking_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        tracing::debug!(booking_id = %booking_id, rows = rows.len(), operation, "Ticket lookup finished");
        Ok(rows)
    }

    fn row_to_trip_ticket(row: &MySqlRow) -> Result<TripTicket, RepoError> {
        const OP: &str = "find_trip_tickets";
        Ok(TripTicket {
            passenger: passenger(row, OP)?,
            seat_numbers: opt_text(row, "seat_numbers", OP)?,
            paid_amount: opt_text(row, "paid_amount", OP)?,
            pickup_location: opt_text(row, "pickup_name", OP)?,
            drop_location: opt_text(row, "drop_name", OP)?,
        })
    }

    fn row_to_tour_ticket(row: &MySqlRow) -> Result<TourTicket, RepoError> {
        const OP: &str = "find_tour_tickets";
        Ok(TourTicket {
            passenger: passenger(row, OP)?,
            paid_amount: opt_text(row, "paid_amount", OP)?,
            adult_seats: opt_text(row, "adult_seats", OP)?,
            child_seats: opt_text(row, "child_seats", OP)?,
            special_seats: opt_text(row, "special_seats", OP)?,
            pickup_location: opt_text(row, "pickup_name", OP)?,
            drop_location: opt_text(row, "drop_name", OP)?,
            status: opt_text(row, "status", OP)?,
        })
    }

    fn row_to_attraction_ticket(row: &MySqlRow) -> Result<AttractionTicket, RepoError> {
        const OP: &str = "find_attraction_tickets";
        Ok(AttractionTicket {
            passenger: passenger(row, OP)?,
            attraction_name: opt_text(row, "attraction_name", OP)?,
            adult_price: opt_text(row, "adult_price", OP)?,
            child_price: opt_text(row, "child_price", OP)?,
            misc_price: opt_text(row, "misc_price", OP)?,
            adult_seats: opt_text(row, "adult_seats", OP)?,
            child_seats: opt_text(row, "child_seats", OP)?,
            misc_seats: opt_text(row, "misc_seats", OP)?,
            paid_amount: opt_text(row, "paid_amount", OP)?,
            status: opt_text(row, "status", OP)?,
        })
    }
}

#[async_trait]
impl TicketRepo for MySqlTicketRepo {
    async fn find_trip_tickets(
        &self,
        booking_id: &TicketId,
    ) -> Result<Vec<TripTicket>, RepoError> {
        self.fetch(FIND_TRIP_TICKETS, booking_id, "find_trip_tickets")
            .await?
            .iter()
            .map(Self::row_to_trip_ticket)
            .collect()
    }

    async fn find_tour_tickets(
        &self,
        booking_id: &TicketId,
    ) -> Result<Vec<TourTicket>, RepoError> {
        self.fetch(FIND_TOUR_TICKETS, booking_id, "find_tour_tickets")
            .await?
            .iter()
            .map(Self::row_to_tour_ticket)
            .collect()
    }

    async fn find_attraction_tickets(
        &self,
        booking_id: &TicketId,
    ) -> Result<Vec<AttractionTicket>, RepoError> {
        self.fetch(FIND_ATTRACTION_TICKETS, booking_id, "find_attraction_tickets")
            .await?
            .iter()
            .map(Self::row_to_attraction_ticket)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_queries_bind_only_the_booking_id() {
        for sql in [FIND_TRIP_TICKETS, FIND_TOUR_TICKETS, FIND_ATTRACTION_TICKETS] {
            assert_eq!(sql.matches('?').count(), 1);
            assert!(sql.contains("booking_id = ?"));
        }
    }
}
