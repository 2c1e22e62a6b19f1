//! Replies for actions nobody handles.

use std::sync::Arc;

use async_trait::async_trait;
use transtar_domain::Reply;
use transtar_shared::QueryResult;

use super::{ActionHandler, HandlerError};
use crate::infrastructure::config::FallbackSettings;
use crate::infrastructure::ports::{LlmPort, LlmRequest};

/// Always answers with the canned contact card.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedFallback;

#[async_trait]
impl ActionHandler for CannedFallback {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        tracing::debug!(action = ?query.action_name(), "Answering with canned fallback");
        Ok(Reply::fallback())
    }
}

/// `input.unknown`: lets the completion model answer the raw utterance.
///
/// Without a configured model, or when the model returns nothing, the
/// canned card is used instead. Completion failures surface as
/// `HandlerError::Llm` so the dispatcher can log and fall back.
pub struct UnknownIntent {
    llm: Option<Arc<dyn LlmPort>>,
    settings: FallbackSettings,
}

impl UnknownIntent {
    pub fn new(llm: Option<Arc<dyn LlmPort>>, settings: FallbackSettings) -> Self {
        Self { llm, settings }
    }

    fn request(&self, utterance: &str) -> LlmRequest {
        let request = LlmRequest::prompt(utterance)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(Some(self.settings.max_tokens));

        match &self.settings.system_prompt {
            Some(prompt) => request.with_system_prompt(prompt.as_str()),
            None => request,
        }
    }
}

#[async_trait]
impl ActionHandler for UnknownIntent {
    async fn handle(&self, query: &QueryResult) -> Result<Reply, HandlerError> {
        let Some(llm) = &self.llm else {
            return Ok(Reply::fallback());
        };

        let utterance = query.query_text.as_deref().map(str::trim).unwrap_or_default();
        if utterance.is_empty() {
            return Ok(Reply::fallback());
        }

        let response = llm.generate(self.request(utterance)).await?;
        let text = response.content.trim();

        if text.is_empty() {
            tracing::warn!(finish_reason = ?response.finish_reason, "Completion returned no text");
            return Ok(Reply::fallback());
        }

        Ok(Reply::plain_text(text))
    }
}
