//! HTTP routes.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::Instrument;
use transtar_shared::{WebhookRequest, WebhookResponse};

use crate::app::App;
use crate::infrastructure::correlation::CorrelationId;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/dialogflow", post(fulfill))
}

async fn health() -> &'static str {
    "OK"
}

/// Webhook fulfillment.
///
/// Always answers 200: handler failures, timeouts and unknown actions all
/// resolve to a reply body inside the dispatcher.
async fn fulfill(
    State(app): State<Arc<App>>,
    Json(request): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
    let correlation_id = CorrelationId::new();
    let query = request.query_result;
    let span = correlation_id.request_span(
        query.action_name().unwrap_or("-"),
        request.response_id.as_deref(),
    );

    let reply = async {
        tracing::debug!("Webhook request received");
        app.dispatcher.dispatch(&query).await
    }
    .instrument(span)
    .await;

    Json(WebhookResponse::from(reply))
}
