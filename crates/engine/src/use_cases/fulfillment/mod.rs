//! Webhook fulfillment: one handler per assistant action, plus the
//! dispatcher that routes to them.
//!
//! Every handler returns exactly one `Reply`. Missing parameters and empty
//! lookups are ordinary replies; only store or completion failures surface
//! as `HandlerError`, which the dispatcher turns into the canned fallback.

use async_trait::async_trait;
use std::time::Duration;
use transtar_domain::Reply;
use transtar_shared::QueryResult;

use crate::infrastructure::ports::{LlmError, RepoError};

pub mod actions;
mod dispatcher;
mod fallback;
mod packages;
pub mod params;
mod return_trips;
mod tickets;
mod trips;

pub use dispatcher::{ActionTable, Dispatcher};
pub use fallback::{CannedFallback, UnknownIntent};
pub use packages::{AttractionPackages, TourPackages};
pub use return_trips::ReturnTrips;
pub use tickets::{TrackAttractionTicket, TrackTourTicket, TrackTripTicket};
pub use trips::OneWayTrips;

/// A handler for one assistant action.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError>;
}

/// Errors that end a request with the fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Completion error: {0}")]
    Llm(#[from] LlmError),
    #[error("Handler did not finish within {0:?}")]
    Timeout(Duration),
    #[error("Handler panicked: {0}")]
    Panicked(String),
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::{json, Value};
    use transtar_shared::QueryResult;

    /// Query whose parameters sit in the first output context.
    pub fn context_query(action: &str, parameters: Value) -> QueryResult {
        serde_json::from_value(json!({
            "action": action,
            "parameters": {},
            "outputContexts": [{ "name": "ctx", "parameters": parameters }]
        }))
        .unwrap()
    }

    /// Query whose parameters sit at the top level.
    pub fn top_level_query(action: &str, parameters: Value) -> QueryResult {
        serde_json::from_value(json!({ "action": action, "parameters": parameters })).unwrap()
    }

    pub fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    pub fn timestamp(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
    }
}
