//! Inbound webhook request types.
//!
//! Mirrors the subset of the assistant platform's webhook request that the
//! fulfillment handlers read. Unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Suffix the platform appends to a parameter name for the raw user text.
const ORIGINAL_SUFFIX: &str = ".original";

/// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level webhook request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_result: QueryResult,
}

/// The classified intent and its extracted parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Dispatch key, e.g. `get.onewaytripsdata`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// The traveller's raw utterance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Parameters,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_contexts: Vec<OutputContext>,
}

impl QueryResult {
    /// Action name, trimmed; `None` when absent or blank.
    pub fn action_name(&self) -> Option<&str> {
        self.action
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    /// Parameters carried across turns by the first output context.
    ///
    /// Falls back to the top-level parameters when the request has no
    /// output contexts.
    pub fn context_parameters(&self) -> &Parameters {
        self.output_contexts
            .first()
            .map(|ctx| &ctx.parameters)
            .unwrap_or(&self.parameters)
    }
}

/// A conversation context with slot-filled parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan_count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Parameters,
}

/// Parameter bag keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Non-blank string value of a parameter, trimmed.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The raw user text behind a parameter (`<name>.original`).
    pub fn original(&self, name: &str) -> Option<&str> {
        self.text(&format!("{name}{ORIGINAL_SUFFIX}"))
    }

    /// Raw user text when present, otherwise the normalized value.
    pub fn as_typed(&self, name: &str) -> Option<&str> {
        self.original(name).or_else(|| self.text(name))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> WebhookRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn parses_platform_request() {
        let req = request(json!({
            "responseId": "r-1",
            "session": "projects/p/agent/sessions/s",
            "queryResult": {
                "action": "get.onewaytripsdata",
                "queryText": "trips to singapore",
                "parameters": {},
                "outputContexts": [{
                    "name": "projects/p/agent/sessions/s/contexts/trip",
                    "lifespanCount": 2,
                    "parameters": {
                        "pickup_location": "Malacca",
                        "pickup_location.original": "malacca"
                    }
                }],
                "intentDetectionConfidence": 1.0
            }
        }));

        assert_eq!(req.response_id.as_deref(), Some("r-1"));
        assert_eq!(req.query_result.action_name(), Some("get.onewaytripsdata"));
        let params = req.query_result.context_parameters();
        assert_eq!(params.text("pickup_location"), Some("Malacca"));
        assert_eq!(params.original("pickup_location"), Some("malacca"));
    }

    #[test]
    fn empty_body_defaults_every_field() {
        let req = request(json!({}));
        assert_eq!(req.query_result.action_name(), None);
        assert!(req.query_result.context_parameters().is_empty());
    }

    #[test]
    fn null_containers_read_as_empty() {
        let req = request(json!({
            "queryResult": {
                "action": "get.onewaytripsdata",
                "parameters": null,
                "outputContexts": null
            }
        }));
        assert_eq!(req.query_result.action_name(), Some("get.onewaytripsdata"));
        assert!(req.query_result.output_contexts.is_empty());
        assert!(req.query_result.context_parameters().is_empty());

        let req = request(json!({
            "queryResult": { "outputContexts": [{ "name": "ctx", "parameters": null }] }
        }));
        assert_eq!(req.query_result.output_contexts.len(), 1);
        assert!(req.query_result.context_parameters().is_empty());

        let req = request(json!({ "queryResult": null }));
        assert_eq!(req.query_result.action_name(), None);
    }

    #[test]
    fn blank_action_is_treated_as_absent() {
        let req = request(json!({ "queryResult": { "action": "  " } }));
        assert_eq!(req.query_result.action_name(), None);
    }

    #[test]
    fn context_parameters_fall_back_to_top_level() {
        let req = request(json!({
            "queryResult": { "parameters": { "ticket_id": "TKT-1" } }
        }));
        assert_eq!(
            req.query_result.context_parameters().text("ticket_id"),
            Some("TKT-1")
        );
    }

    #[test]
    fn text_ignores_blank_and_non_string_values() {
        let params: Parameters = serde_json::from_value(json!({
            "blank": "   ",
            "number": 3,
            "object": { "country": "Japan" },
            "drop_location": "Singapore"
        }))
        .unwrap();

        assert_eq!(params.text("blank"), None);
        assert_eq!(params.text("number"), None);
        assert_eq!(params.text("object"), None);
        assert_eq!(params.text("missing"), None);
        assert_eq!(params.as_typed("drop_location"), Some("Singapore"));
    }
}
