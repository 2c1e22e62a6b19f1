//! Outbound webhook response types.
//!
//! A response is either `{ "fulfillmentText": ... }` or
//! `{ "fulfillmentMessages": [ { "payload": { "richContent": [[card, ...]] } } ] }`.

use serde::{Deserialize, Serialize};
use transtar_domain::{Card, CardKind, Reply};

/// Webhook response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebhookResponse {
    Text {
        #[serde(rename = "fulfillmentText")]
        fulfillment_text: String,
    },
    Messages {
        #[serde(rename = "fulfillmentMessages")]
        fulfillment_messages: Vec<FulfillmentMessage>,
    },
}

/// One custom-payload message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentMessage {
    pub payload: RichContentPayload,
}

/// Rich content rendered by the chat front-end, grouped into sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichContentPayload {
    pub rich_content: Vec<Vec<RichCard>>,
}

/// A rich content card in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichCard {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<RichImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichImage {
    pub src: ImageSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    pub raw_url: String,
}

impl From<Card> for RichCard {
    fn from(card: Card) -> Self {
        RichCard {
            kind: card.kind,
            title: card.title,
            subtitle: card.subtitle,
            text: (!card.text.is_empty()).then_some(card.text),
            image: card.image.map(|raw_url| RichImage {
                src: ImageSource { raw_url },
            }),
            action_link: card.action_link,
        }
    }
}

impl From<Reply> for WebhookResponse {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::PlainText { text } => WebhookResponse::Text {
                fulfillment_text: text,
            },
            Reply::RichContent { cards } => WebhookResponse::Messages {
                fulfillment_messages: vec![FulfillmentMessage {
                    payload: RichContentPayload {
                        rich_content: vec![cards.into_iter().map(RichCard::from).collect()],
                    },
                }],
            },
        }
    }
}

impl WebhookResponse {
    /// Text of a plain response.
    pub fn fulfillment_text(&self) -> Option<&str> {
        match self {
            WebhookResponse::Text { fulfillment_text } => Some(fulfillment_text),
            WebhookResponse::Messages { .. } => None,
        }
    }

    /// All cards across every message and section, in order.
    pub fn cards(&self) -> Vec<&RichCard> {
        match self {
            WebhookResponse::Text { .. } => Vec::new(),
            WebhookResponse::Messages {
                fulfillment_messages,
            } => fulfillment_messages
                .iter()
                .flat_map(|m| m.payload.rich_content.iter())
                .flatten()
                .collect(),
        }
    }
}
