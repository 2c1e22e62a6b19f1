//! Trip repository implementation for MySQL.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use transtar_domain::{TripQuery, TripRecord};

use super::helpers::required;
use crate::infrastructure::ports::{RepoError, TripRepo};

const FIND_TRIPS: &str = r#"
    SELECT trips.startdate AS start_date,
           trips.enddate AS end_date,
           pick_location.name AS pickup_location,
           drop_location.name AS drop_location
    FROM trips
    LEFT JOIN locations AS pick_location ON pick_location.id = trips.pick_location_id
    LEFT JOIN locations AS drop_location ON drop_location.id = trips.drop_location_id
    WHERE trips.status = '1'
      AND trips.deleted_at IS NULL
      AND trips.startdate >= ?
      AND LOWER(pick_location.name) = ?
      AND LOWER(drop_location.name) = ?
      AND DATE(trips.startdate) = ?
    ORDER BY trips.startdate
"#;

pub struct MySqlTripRepo {
    pool: MySqlPool,
}

impl MySqlTripRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_trip(row: &MySqlRow) -> Result<TripRecord, RepoError> {
        const OP: &str = "find_trips";
        Ok(TripRecord {
            pickup_location: required::<String>(row, "pickup_location", OP)?,
            drop_location: required::<String>(row, "drop_location", OP)?,
            start_date: required::<NaiveDateTime>(row, "start_date", OP)?,
            end_date: required::<Option<NaiveDateTime>>(row, "end_date", OP)?,
        })
    }
}

#[async_trait]
impl TripRepo for MySqlTripRepo {
    async fn find_trips(
        &self,
        query: &TripQuery,
        today: NaiveDate,
    ) -> Result<Vec<TripRecord>, RepoError> {
        let rows = sqlx::query(FIND_TRIPS)
            .bind(today)
            .bind(query.pickup_key())
            .bind(query.drop_key())
            .bind(query.date.date())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("find_trips", e))?;

        tracing::debug!(
            pickup = %query.pickup_location,
            drop = %query.drop_location,
            date = %query.date,
            rows = rows.len(),
            "Trip lookup finished"
        );

        rows.iter().map(Self::row_to_trip).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_query_binds_every_input() {
        // today, pickup, drop, journey date
        assert_eq!(FIND_TRIPS.matches('?').count(), 4);
        assert!(FIND_TRIPS.contains("deleted_at IS NULL"));
    }
}
