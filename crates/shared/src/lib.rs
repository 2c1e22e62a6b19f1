//! Transtar Protocol - webhook types exchanged with the assistant platform
//!
//! This crate contains the wire format of the fulfillment webhook:
//! - Inbound request DTOs (`WebhookRequest`, `QueryResult`, `Parameters`)
//! - Outbound response DTOs (`WebhookResponse` and its rich content cards)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain crate
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Lenient input** - every inbound field is optional; handlers decide
//!    what is required

pub mod requests;
pub mod responses;

pub use requests::{OutputContext, Parameters, QueryResult, WebhookRequest};
pub use responses::{
    FulfillmentMessage, ImageSource, RichCard, RichContentPayload, RichImage, WebhookResponse,
};
