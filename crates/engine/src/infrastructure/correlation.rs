//! Correlation IDs for tracing one webhook request through the logs.

use std::fmt;
use uuid::Uuid;

/// Correlation ID assigned to each inbound webhook request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Generate a new correlation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short format (first 8 characters) for logging.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    /// Span wrapping everything logged while fulfilling one request.
    ///
    /// `response_id` is the platform's own id for the turn, when it sent one.
    pub fn request_span(&self, action: &str, response_id: Option<&str>) -> tracing::Span {
        tracing::info_span!(
            "fulfillment",
            correlation_id = %self.short(),
            action = %action,
            response_id = response_id.unwrap_or("-"),
        )
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        assert_ne!(CorrelationId::new(), CorrelationId::new());
    }

    #[test]
    fn short_format_is_8_hex_chars() {
        let short = CorrelationId::new().short();
        assert_eq!(short.len(), 8);
        assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn display_is_full_uuid() {
        assert_eq!(CorrelationId::new().to_string().len(), 36);
    }
}
