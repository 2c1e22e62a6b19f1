//! Action names sent by the assistant platform.

pub const ONE_WAY_TRIPS: &str = "get.onewaytripsdata";
pub const RETURN_TRIPS: &str = "get.returntripsdata";
pub const SEARCH_TOURS: &str = "search.tours";
pub const SEARCH_ATTRACTIONS: &str = "search.attractions";
pub const TRACK_TRIP_TICKET: &str = "track.tripticket-custom";
pub const TRACK_TOUR_TICKET: &str = "track.tourticket-custom";
pub const TRACK_ATTRACTION_TICKET: &str = "track.attractionticket-custom";
pub const UNKNOWN_INPUT: &str = "input.unknown";

/// Every action with a dedicated handler.
pub const ALL: [&str; 8] = [
    ONE_WAY_TRIPS,
    RETURN_TRIPS,
    SEARCH_TOURS,
    SEARCH_ATTRACTIONS,
    TRACK_TRIP_TICKET,
    TRACK_TOUR_TICKET,
    TRACK_ATTRACTION_TICKET,
    UNKNOWN_INPUT,
];
