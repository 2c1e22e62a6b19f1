//! Tour and attraction package repository implementation for MySQL.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use transtar_domain::{AttractionRecord, CountryName, TourRecord};

use super::helpers::{opt_text, required};
use crate::infrastructure::ports::{PackageRepo, RepoError};

const FIND_TOURS: &str = r#"
    SELECT tour.tour_name,
           DATE(tour.start_date) AS start_date,
           DATE(tour.end_date) AS end_date,
           tour.thumbnail
    FROM tour
    LEFT JOIN country ON country.id = tour.country_id
    WHERE tour.status = 'active'
      AND tour.start_date >= ?
      AND tour.deleted_at IS NULL
      AND LOWER(country.name) = ?
    ORDER BY tour.start_date
"#;

const FIND_ATTRACTIONS: &str = r#"
    SELECT attractions.attraction_name,
           DATE(attractions.start_date) AS start_date,
           attractions.thumbnail
    FROM attractions
    LEFT JOIN country ON country.id = attractions.country_id
    WHERE attractions.status = 'active'
      AND attractions.start_date >= ?
      AND attractions.deleted_at IS NULL
      AND LOWER(country.name) = ?
    ORDER BY attractions.start_date
"#;

pub struct MySqlPackageRepo {
    pool: MySqlPool,
}

impl MySqlPackageRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_tour(row: &MySqlRow) -> Result<TourRecord, RepoError> {
        const OP: &str = "find_tours";
        Ok(TourRecord {
            tour_name: required::<String>(row, "tour_name", OP)?,
            start_date: required::<NaiveDate>(row, "start_date", OP)?,
            end_date: required::<Option<NaiveDate>>(row, "end_date", OP)?,
            thumbnail: opt_text(row, "thumbnail", OP)?,
        })
    }

    fn row_to_attraction(row: &MySqlRow) -> Result<AttractionRecord, RepoError> {
        const OP: &str = "find_attractions";
        Ok(AttractionRecord {
            attraction_name: required::<String>(row, "attraction_name", OP)?,
            start_date: required::<NaiveDate>(row, "start_date", OP)?,
            thumbnail: opt_text(row, "thumbnail", OP)?,
        })
    }
}

#[async_trait]
impl PackageRepo for MySqlPackageRepo {
    async fn find_tours(
        &self,
        country: &CountryName,
        today: NaiveDate,
    ) -> Result<Vec<TourRecord>, RepoError> {
        let rows = sqlx::query(FIND_TOURS)
            .bind(today)
            .bind(country.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("find_tours", e))?;

        tracing::debug!(country = %country, rows = rows.len(), "Tour lookup finished");
        rows.iter().map(Self::row_to_tour).collect()
    }

    async fn find_attractions(
        &self,
        country: &CountryName,
        today: NaiveDate,
    ) -> Result<Vec<AttractionRecord>, RepoError> {
        let rows = sqlx::query(FIND_ATTRACTIONS)
            .bind(today)
            .bind(country.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("find_attractions", e))?;

        tracing::debug!(country = %country, rows = rows.len(), "Attraction lookup finished");
        rows.iter().map(Self::row_to_attraction).collect()
    }
}
