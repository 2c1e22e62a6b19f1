//! Tour and attraction package search by country.

use std::sync::Arc;

use async_trait::async_trait;
use transtar_domain::{AttractionRecord, Card, Reply, TourRecord, MISSING_VALUE};
use transtar_shared::QueryResult;

use super::{params, ActionHandler, HandlerError};
use crate::infrastructure::ports::{ClockPort, PackageRepo};

/// Upcoming tours for a country, one info card each.
pub struct TourPackages {
    packages: Arc<dyn PackageRepo>,
    clock: Arc<dyn ClockPort>,
    link: String,
}

impl TourPackages {
    pub fn new(
        packages: Arc<dyn PackageRepo>,
        clock: Arc<dyn ClockPort>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            packages,
            clock,
            link: link.into(),
        }
    }

    fn card(&self, tour: &TourRecord) -> Card {
        let end = tour
            .end_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string());

        Card::info(tour.tour_name.as_str())
            .with_subtitle(format!("{} - {}", tour.start_date.format("%Y-%m-%d"), end))
            .with_image(tour.thumbnail.clone())
            .with_action_link(self.link.as_str())
    }
}

#[async_trait]
impl ActionHandler for TourPackages {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let country = match params::country(query.context_parameters()) {
            Ok(country) => country,
            Err(e) => {
                tracing::debug!(error = %e, "Tour search without a country");
                return Ok(Reply::rephrase());
            }
        };

        let today = self.clock.now().date_naive();
        let tours = self.packages.find_tours(&country, today).await?;

        if tours.is_empty() {
            return Ok(Reply::plain_text(format!(
                "Sorry, there are no tours available for {country}."
            )));
        }

        tracing::debug!(country = %country, count = tours.len(), "Tours found");
        Ok(Reply::rich(tours.iter().map(|t| self.card(t)).collect()))
    }
}

/// Upcoming attraction packages for a country.
pub struct AttractionPackages {
    packages: Arc<dyn PackageRepo>,
    clock: Arc<dyn ClockPort>,
    link: String,
}

impl AttractionPackages {
    pub fn new(
        packages: Arc<dyn PackageRepo>,
        clock: Arc<dyn ClockPort>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            packages,
            clock,
            link: link.into(),
        }
    }

    fn card(&self, attraction: &AttractionRecord) -> Card {
        Card::info(attraction.attraction_name.as_str())
            .with_subtitle(attraction.start_date.format("%Y-%m-%d").to_string())
            .with_image(attraction.thumbnail.clone())
            .with_action_link(self.link.as_str())
    }
}

#[async_trait]
impl ActionHandler for AttractionPackages {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let country = match params::country(query.context_parameters()) {
            Ok(country) => country,
            Err(e) => {
                tracing::debug!(error = %e, "Attraction search without a country");
                return Ok(Reply::rephrase());
            }
        };

        let today = self.clock.now().date_naive();
        let attractions = self.packages.find_attractions(&country, today).await?;

        if attractions.is_empty() {
            return Ok(Reply::plain_text(format!(
                "Sorry, there are no attraction packages available for {country}."
            )));
        }

        tracing::debug!(country = %country, count = attractions.len(), "Attractions found");
        Ok(Reply::rich(attractions.iter().map(|a| self.card(a)).collect()))
    }
}
