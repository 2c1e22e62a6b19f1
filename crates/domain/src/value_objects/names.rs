//! Validated lookup keys and display names
//!
//! These newtypes ensure that lookup keys are valid by construction:
//! - Non-empty after trimming
//! - Normalized the way the store compares them

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Placeholder rendered for a value the store left NULL.
pub const MISSING_VALUE: &str = "N/A";

// ============================================================================
// CountryName
// ============================================================================

/// A country name used to search tours and attractions (trimmed, lowercase)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryName(String);

impl CountryName {
    /// Create a new country name, lowercased for case-insensitive matching.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Country name cannot be empty"));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CountryName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CountryName> for String {
    fn from(name: CountryName) -> String {
        name.0
    }
}

// ============================================================================
// TicketId
// ============================================================================

/// A booking identifier as typed by the traveller (trimmed, case preserved)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketId(String);

impl TicketId {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the id is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Ticket id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TicketId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> String {
        id.0
    }
}

// ============================================================================
// PassengerName
// ============================================================================

/// Passenger name joined from `user_details`; either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl PassengerName {
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
        }
    }
}

impl fmt::Display for PassengerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            write!(f, "{}", MISSING_VALUE)
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}
