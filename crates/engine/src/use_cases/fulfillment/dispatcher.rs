//! Routes a webhook query to the handler registered for its action.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;
use transtar_domain::Reply;
use transtar_shared::QueryResult;

use super::{ActionHandler, HandlerError};

/// Immutable action name to handler mapping, built once at startup.
#[derive(Clone, Default)]
pub struct ActionTable {
    handlers: HashMap<&'static str, Arc<dyn ActionHandler>>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `action`, replacing any previous entry.
    pub fn with(mut self, action: &'static str, handler: Arc<dyn ActionHandler>) -> Self {
        self.handlers.insert(action, handler);
        self
    }

    pub fn get(&self, action: &str) -> Option<&Arc<dyn ActionHandler>> {
        self.handlers.get(action)
    }

    pub fn contains(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Runs exactly one handler per query under a deadline.
///
/// The handler runs as its own task. If the deadline passes first the task
/// is left to finish in the background and its result is discarded.
pub struct Dispatcher {
    table: ActionTable,
    default_handler: Arc<dyn ActionHandler>,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(
        table: ActionTable,
        default_handler: Arc<dyn ActionHandler>,
        timeout: Duration,
    ) -> Self {
        Self {
            table,
            default_handler,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether `action` has its own handler rather than the default.
    pub fn handles(&self, action: &str) -> bool {
        self.table.contains(action)
    }

    fn handler_for(&self, query: &QueryResult) -> Arc<dyn ActionHandler> {
        match query.action_name().and_then(|action| self.table.get(action)) {
            Some(handler) => {
                tracing::debug!("Routing to registered handler");
                Arc::clone(handler)
            }
            None => {
                tracing::warn!(action = ?query.action_name(), "No handler registered, using default");
                Arc::clone(&self.default_handler)
            }
        }
    }

    /// Run the selected handler, surfacing failures, timeouts and panics.
    pub async fn run(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let handler = self.handler_for(query);
        let query = query.clone();

        let task = tokio::spawn(
            async move { handler.handle(&query).await }.instrument(tracing::Span::current()),
        );

        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(HandlerError::Panicked(join_error.to_string())),
            Err(_) => Err(HandlerError::Timeout(self.timeout)),
        }
    }

    /// Run the selected handler; any failure becomes the canned fallback.
    pub async fn dispatch(&self, query: &QueryResult) -> Reply {
        match self.run(query).await {
            Ok(reply) => reply,
            Err(HandlerError::Timeout(limit)) => {
                tracing::warn!(timeout_ms = limit.as_millis() as u64, "Handler timed out");
                Reply::fallback()
            }
            Err(e) => {
                tracing::error!(error = %e, "Handler failed");
                Reply::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::RepoError;
    use crate::use_cases::fulfillment::test_support::top_level_query;
    use crate::use_cases::fulfillment::MockActionHandler;
    use async_trait::async_trait;
    use serde_json::json;

    const LIMIT: Duration = Duration::from_secs(10);

    fn answering(text: &'static str) -> Arc<MockActionHandler> {
        let mut handler = MockActionHandler::new();
        handler
            .expect_handle()
            .times(1)
            .returning(move |_| Ok(Reply::plain_text(text)));
        Arc::new(handler)
    }

    fn unused() -> Arc<MockActionHandler> {
        let mut handler = MockActionHandler::new();
        handler.expect_handle().never();
        Arc::new(handler)
    }

    struct Sleeper(Duration);

    #[async_trait]
    impl ActionHandler for Sleeper {
        async fn handle(&self, _query: &QueryResult) -> Result<Reply, HandlerError> {
            tokio::time::sleep(self.0).await;
            Ok(Reply::plain_text("too late"))
        }
    }

    struct Panicker;

    #[async_trait]
    impl ActionHandler for Panicker {
        async fn handle(&self, _query: &QueryResult) -> Result<Reply, HandlerError> {
            panic!("row mapping bug");
        }
    }

    #[tokio::test]
    async fn routes_to_registered_handler() {
        let table = ActionTable::new()
            .with("search.tours", answering("tours"))
            .with("search.attractions", unused());
        let dispatcher = Dispatcher::new(table, unused(), LIMIT);

        let reply = dispatcher
            .dispatch(&top_level_query("search.tours", json!({})))
            .await;

        assert_eq!(reply.text(), Some("tours"));
    }

    #[tokio::test]
    async fn unknown_action_runs_default_handler() {
        let table = ActionTable::new().with("search.tours", unused());
        let dispatcher = Dispatcher::new(table, answering("default"), LIMIT);

        let reply = dispatcher
            .dispatch(&top_level_query("weather.today", json!({})))
            .await;

        assert_eq!(reply.text(), Some("default"));
    }

    #[tokio::test]
    async fn missing_action_runs_default_handler() {
        let dispatcher = Dispatcher::new(ActionTable::new(), answering("default"), LIMIT);
        let query: QueryResult = serde_json::from_value(json!({ "queryText": "hi" })).unwrap();

        assert_eq!(dispatcher.dispatch(&query).await.text(), Some("default"));
    }

    #[tokio::test]
    async fn slow_handler_times_out_with_fallback() {
        let limit = Duration::from_millis(50);
        let table = ActionTable::new().with("search.tours", Arc::new(Sleeper(Duration::from_secs(5))));
        let dispatcher = Dispatcher::new(table, unused(), limit);
        let query = top_level_query("search.tours", json!({}));

        assert!(matches!(
            dispatcher.run(&query).await,
            Err(HandlerError::Timeout(d)) if d == limit
        ));
        assert!(dispatcher.dispatch(&query).await.is_fallback());
    }

    #[tokio::test]
    async fn handler_error_becomes_fallback() {
        let mut failing = MockActionHandler::new();
        failing
            .expect_handle()
            .returning(|_| Err(RepoError::database("find_tours", "down").into()));
        let table = ActionTable::new().with("search.tours", Arc::new(failing));
        let dispatcher = Dispatcher::new(table, unused(), LIMIT);

        let reply = dispatcher
            .dispatch(&top_level_query("search.tours", json!({})))
            .await;

        assert!(reply.is_fallback());
    }

    #[tokio::test]
    async fn panicking_handler_becomes_fallback() {
        let table = ActionTable::new().with("track.tripticket-custom", Arc::new(Panicker));
        let dispatcher = Dispatcher::new(table, unused(), LIMIT);
        let query = top_level_query("track.tripticket-custom", json!({}));

        assert!(matches!(
            dispatcher.run(&query).await,
            Err(HandlerError::Panicked(_))
        ));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let table = ActionTable::new()
            .with("search.tours", unused())
            .with("search.tours", unused());

        assert_eq!(table.len(), 1);
        assert!(table.contains("search.tours"));
        assert!(!table.contains("search.attractions"));
    }
}
