//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::EngineConfig,
    mysql::MySqlRepositories,
    ports::{ClockPort, LlmPort, PackageRepo, TicketRepo, TripRepo},
};
use crate::use_cases::fulfillment::{
    actions, ActionTable, AttractionPackages, CannedFallback, Dispatcher, OneWayTrips,
    ReturnTrips, TourPackages, TrackAttractionTicket, TrackTourTicket, TrackTripTicket,
    UnknownIntent,
};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub dispatcher: Dispatcher,
}

impl App {
    /// Wire every assistant action to its handler.
    pub fn new(
        trips: Arc<dyn TripRepo>,
        packages: Arc<dyn PackageRepo>,
        tickets: Arc<dyn TicketRepo>,
        llm: Option<Arc<dyn LlmPort>>,
        clock: Arc<dyn ClockPort>,
        config: &EngineConfig,
    ) -> Self {
        let links = &config.links;

        let table = ActionTable::new()
            .with(
                actions::ONE_WAY_TRIPS,
                Arc::new(OneWayTrips::new(trips.clone(), clock.clone())),
            )
            .with(
                actions::RETURN_TRIPS,
                Arc::new(ReturnTrips::new(trips, clock.clone())),
            )
            .with(
                actions::SEARCH_TOURS,
                Arc::new(TourPackages::new(
                    packages.clone(),
                    clock.clone(),
                    links.tours_url.as_str(),
                )),
            )
            .with(
                actions::SEARCH_ATTRACTIONS,
                Arc::new(AttractionPackages::new(
                    packages,
                    clock,
                    links.attractions_url.as_str(),
                )),
            )
            .with(
                actions::TRACK_TRIP_TICKET,
                Arc::new(TrackTripTicket::new(tickets.clone())),
            )
            .with(
                actions::TRACK_TOUR_TICKET,
                Arc::new(TrackTourTicket::new(tickets.clone())),
            )
            .with(
                actions::TRACK_ATTRACTION_TICKET,
                Arc::new(TrackAttractionTicket::new(tickets)),
            )
            .with(
                actions::UNKNOWN_INPUT,
                Arc::new(UnknownIntent::new(llm, config.fallback.clone())),
            );

        tracing::debug!(actions = table.len(), "Action table built");

        Self {
            dispatcher: Dispatcher::new(table, Arc::new(CannedFallback), config.handler_timeout),
        }
    }

    /// Compose from the MySQL adapters.
    pub fn from_repositories(
        repos: MySqlRepositories,
        llm: Option<Arc<dyn LlmPort>>,
        clock: Arc<dyn ClockPort>,
        config: &EngineConfig,
    ) -> Self {
        Self::new(repos.trip, repos.package, repos.ticket, llm, clock, config)
    }
}
