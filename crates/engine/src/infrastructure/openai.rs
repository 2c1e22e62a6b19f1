//! OpenAI-compatible chat completion client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::config::CompletionConfig;
use crate::infrastructure::ports::{
    ChatMessage, FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse,
};

/// Client for an OpenAI-compatible `/v1/chat/completions` endpoint
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Upper bound on one completion call; the dispatcher's own timeout is
/// normally the tighter of the two.
const REQUEST_TIMEOUT_SECS: u64 = 30;

impl OpenAiClient {
    pub fn new(config: &CompletionConfig) -> Self {
        Self::with_timeout(config, REQUEST_TIMEOUT_SECS)
    }

    /// Create client with a custom request timeout.
    pub fn with_timeout(config: &CompletionConfig, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmPort for OpenAiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = OpenAIChatRequest {
            model: self.model.clone(),
            messages: build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            return Err(LlmError::RequestFailed(format!("{}: {}", status, error_text)));
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }
}

fn build_messages(request: &LlmRequest) -> Vec<OpenAIMessage> {
    let system = request
        .system_prompt
        .as_deref()
        .map(ChatMessage::system);

    system
        .iter()
        .chain(request.messages.iter())
        .map(|msg| OpenAIMessage {
            role: msg.role.as_str().to_string(),
            content: Some(msg.content.clone()),
        })
        .collect()
}

fn convert_response(response: OpenAIChatResponse) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in LLM response".to_string()))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        None => FinishReason::Stop,
        Some(_) => FinishReason::Unknown,
    };

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        finish_reason,
    })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize, Default)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn system_prompt_precedes_user_prompt() {
        let request = LlmRequest::prompt("Is there a bus to Penang?")
            .with_system_prompt("You are a travel assistant.");

        let messages = build_messages(&request);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(
            messages[1].content.as_deref(),
            Some("Is there a bus to Penang?")
        );
    }

    #[test]
    fn request_body_carries_generation_bounds() {
        let request = LlmRequest::prompt("hello")
            .with_temperature(0.1)
            .with_max_tokens(Some(50));
        let body = OpenAIChatRequest {
            model: "gpt-test".to_string(),
            messages: build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["max_tokens"], json!(50));
        assert_eq!(value["messages"][0]["role"], json!("user"));
        assert!(value["temperature"].as_f64().unwrap() > 0.09);
    }

    #[test]
    fn converts_first_choice() {
        let response: OpenAIChatResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Yes, daily." }, "finish_reason": "length" }
            ],
            "usage": { "prompt_tokens": 5, "completion_tokens": 3, "total_tokens": 8 }
        }))
        .unwrap();

        let converted = convert_response(response).unwrap();
        assert_eq!(converted.content, "Yes, daily.");
        assert_eq!(converted.finish_reason, FinishReason::Length);
    }

    #[test]
    fn empty_choices_is_invalid() {
        let response: OpenAIChatResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(
            convert_response(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = OpenAiClient::new(&CompletionConfig {
            api_key: "k".into(),
            base_url: "https://llm.internal/".into(),
            model: "m".into(),
        });
        assert_eq!(client.endpoint(), "https://llm.internal/v1/chat/completions");
    }
}
