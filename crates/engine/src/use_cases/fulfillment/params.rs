//! Parameter extraction from the platform's parameter bags.
//!
//! Trip and package intents read the first output context (falling back to
//! top-level parameters); ticket intents read the top-level `ticket_id`.
//! A missing or unusable required value is reported as `MissingParameter`
//! and answered with the rephrase reply before any lookup.

use serde_json::Value;
use transtar_domain::{CountryName, JourneyDate, RoundTripQuery, TicketId, TripQuery};
use transtar_shared::{Parameters, QueryResult};

pub const PICKUP_LOCATION: &str = "pickup_location";
pub const DROP_LOCATION: &str = "drop_location";
pub const JOURNEY_DATE: &str = "journey_date";
pub const RETURN_JOURNEY_DATE: &str = "return_journey_date";
pub const TICKET_ID: &str = "ticket_id";

/// Parameter names that may carry the searched country, in priority order.
pub const COUNTRY_PARAMETERS: [&str; 3] = ["country_name", "tour_country", "attraction_country"];

/// A required parameter was absent, blank or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Missing or invalid parameter: {0}")]
pub struct MissingParameter(pub &'static str);

/// One-way trip request plus the traveller's own wording for replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub query: TripQuery,
    pub pickup_as_typed: String,
    pub drop_as_typed: String,
    pub date_as_typed: String,
}

/// Round trip request plus the traveller's own wording for replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripRequest {
    pub query: RoundTripQuery,
    pub pickup_as_typed: String,
    pub drop_as_typed: String,
}

fn required_text<'a>(params: &'a Parameters, name: &'static str) -> Result<&'a str, MissingParameter> {
    params.text(name).ok_or(MissingParameter(name))
}

fn required_date(params: &Parameters, name: &'static str) -> Result<JourneyDate, MissingParameter> {
    let raw = required_text(params, name)?;
    JourneyDate::parse(raw).map_err(|_| MissingParameter(name))
}

/// Pickup, drop and journey date for a one-way trip.
pub fn one_way_trip(params: &Parameters) -> Result<TripRequest, MissingParameter> {
    let pickup = required_text(params, PICKUP_LOCATION)?;
    let drop = required_text(params, DROP_LOCATION)?;
    let date = required_date(params, JOURNEY_DATE)?;

    Ok(TripRequest {
        query: TripQuery::new(pickup, drop, date),
        pickup_as_typed: params.as_typed(PICKUP_LOCATION).unwrap_or(pickup).to_string(),
        drop_as_typed: params.as_typed(DROP_LOCATION).unwrap_or(drop).to_string(),
        date_as_typed: params
            .as_typed(JOURNEY_DATE)
            .map(str::to_string)
            .unwrap_or_else(|| date.to_iso()),
    })
}

/// Pickup, drop, outbound and return dates for a round trip.
pub fn round_trip(params: &Parameters) -> Result<RoundTripRequest, MissingParameter> {
    let pickup = required_text(params, PICKUP_LOCATION)?;
    let drop = required_text(params, DROP_LOCATION)?;
    let date = required_date(params, JOURNEY_DATE)?;
    let return_date = required_date(params, RETURN_JOURNEY_DATE)?;

    Ok(RoundTripRequest {
        query: RoundTripQuery::new(TripQuery::new(pickup, drop, date), return_date),
        pickup_as_typed: params.as_typed(PICKUP_LOCATION).unwrap_or(pickup).to_string(),
        drop_as_typed: params.as_typed(DROP_LOCATION).unwrap_or(drop).to_string(),
    })
}

/// Country to search, given as a plain string or as `{ "country": ... }`.
pub fn country(params: &Parameters) -> Result<CountryName, MissingParameter> {
    COUNTRY_PARAMETERS
        .iter()
        .filter_map(|name| params.get(name))
        .find_map(|value| match value {
            Value::String(s) => CountryName::new(s.as_str()).ok(),
            Value::Object(obj) => obj
                .get("country")
                .and_then(Value::as_str)
                .and_then(|s| CountryName::new(s).ok()),
            _ => None,
        })
        .ok_or(MissingParameter(COUNTRY_PARAMETERS[0]))
}

/// Booking id from the top-level parameters, then the output context.
pub fn ticket_id(query: &QueryResult) -> Result<TicketId, MissingParameter> {
    query
        .parameters
        .text(TICKET_ID)
        .or_else(|| query.context_parameters().text(TICKET_ID))
        .and_then(|id| TicketId::new(id).ok())
        .ok_or(MissingParameter(TICKET_ID))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Parameters {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn one_way_trip_resolves_alias_and_keeps_typed_text() {
        let request = one_way_trip(&params(json!({
            "pickup_location": "Federal Territory of Kuala Lumpur",
            "pickup_location.original": "KL",
            "drop_location": "Singapore",
            "drop_location.original": "singapore",
            "journey_date": "2025-03-01T12:00:00+08:00",
            "journey_date.original": "1st March"
        })))
        .unwrap();

        assert_eq!(request.query.pickup_location, "Kuala Lumpur");
        assert_eq!(request.query.drop_location, "Singapore");
        assert_eq!(request.query.date.to_iso(), "2025-03-01");
        assert_eq!(request.pickup_as_typed, "KL");
        assert_eq!(request.drop_as_typed, "singapore");
        assert_eq!(request.date_as_typed, "1st March");
    }

    #[test]
    fn typed_text_falls_back_to_raw_value() {
        let request = one_way_trip(&params(json!({
            "pickup_location": "Federal Territory of Kuala Lumpur",
            "drop_location": "Singapore",
            "journey_date": "2025-03-01T00:00:00"
        })))
        .unwrap();

        assert_eq!(request.pickup_as_typed, "Federal Territory of Kuala Lumpur");
        assert_eq!(request.date_as_typed, "2025-03-01T00:00:00");
    }

    #[test]
    fn one_way_trip_reports_first_missing_field() {
        let missing_pickup = one_way_trip(&params(json!({
            "drop_location": "Singapore",
            "journey_date": "2025-03-01"
        })));
        assert_eq!(missing_pickup, Err(MissingParameter(PICKUP_LOCATION)));

        let blank_drop = one_way_trip(&params(json!({
            "pickup_location": "Malacca",
            "drop_location": " ",
            "journey_date": "2025-03-01"
        })));
        assert_eq!(blank_drop, Err(MissingParameter(DROP_LOCATION)));

        let bad_date = one_way_trip(&params(json!({
            "pickup_location": "Malacca",
            "drop_location": "Singapore",
            "journey_date": "next week"
        })));
        assert_eq!(bad_date, Err(MissingParameter(JOURNEY_DATE)));
    }

    #[test]
    fn round_trip_requires_return_date() {
        let result = round_trip(&params(json!({
            "pickup_location": "Malacca",
            "drop_location": "Singapore",
            "journey_date": "2025-03-01"
        })));
        assert_eq!(result, Err(MissingParameter(RETURN_JOURNEY_DATE)));
    }

    #[test]
    fn round_trip_builds_both_legs() {
        let request = round_trip(&params(json!({
            "pickup_location": "Malacca",
            "drop_location": "Singapore",
            "journey_date": "2025-03-01T00:00:00",
            "return_journey_date": "2025-03-04T00:00:00"
        })))
        .unwrap();

        let back = request.query.return_leg();
        assert_eq!(back.pickup_location, "Singapore");
        assert_eq!(back.date.to_iso(), "2025-03-04");
    }

    #[test]
    fn country_accepts_string_and_object_forms() {
        let from_string = country(&params(json!({ "country_name": "Japan" }))).unwrap();
        let from_object =
            country(&params(json!({ "country_name": { "country": "Japan", "name": "Japan" } })))
                .unwrap();

        assert_eq!(from_string.as_str(), "japan");
        assert_eq!(from_object, from_string);
    }

    #[test]
    fn country_falls_back_to_intent_specific_names() {
        let tour = country(&params(json!({ "tour_country": "Thailand" }))).unwrap();
        let attraction = country(&params(json!({ "country_name": "", "attraction_country": "Vietnam" })))
            .unwrap();

        assert_eq!(tour.as_str(), "thailand");
        assert_eq!(attraction.as_str(), "vietnam");
    }

    #[test]
    fn country_missing_or_unusable() {
        assert!(country(&params(json!({}))).is_err());
        assert!(country(&params(json!({ "country_name": { "name": "Japan" } }))).is_err());
        assert!(country(&params(json!({ "country_name": 42 }))).is_err());
    }

    #[test]
    fn ticket_id_prefers_top_level() {
        let query: QueryResult = serde_json::from_value(json!({
            "parameters": { "ticket_id": "TOP-1" },
            "outputContexts": [{ "parameters": { "ticket_id": "CTX-1" } }]
        }))
        .unwrap();
        assert_eq!(ticket_id(&query).unwrap().as_str(), "TOP-1");

        let from_context: QueryResult = serde_json::from_value(json!({
            "parameters": {},
            "outputContexts": [{ "parameters": { "ticket_id": "CTX-1" } }]
        }))
        .unwrap();
        assert_eq!(ticket_id(&from_context).unwrap().as_str(), "CTX-1");

        let missing: QueryResult = serde_json::from_value(json!({ "parameters": {} })).unwrap();
        assert_eq!(ticket_id(&missing), Err(MissingParameter(TICKET_ID)));
    }
}
