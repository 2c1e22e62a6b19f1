//! Calendar dates for trip lookups.
//!
//! The assistant platform sends dates as ISO timestamps
//! (`2025-03-01T12:00:00+08:00`). Only the calendar date before the `T`
//! is significant; the time and offset are discarded without conversion.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable timestamp layout used on cards (`3/1/2025, 9:30:00 AM`).
const LOCALE_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A normalized `YYYY-MM-DD` journey date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JourneyDate(NaiveDate);

impl JourneyDate {
    /// Parse a date or ISO timestamp, keeping only the calendar date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` if the text before `T` is not a
    /// valid `YYYY-MM-DD` date.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let date_part = trimmed.split('T').next().unwrap_or(trimmed);
        NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::parse(format!("Invalid journey date '{}': {}", raw, e)))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date as bound into store lookups.
    pub fn to_iso(&self) -> String {
        self.0.format(ISO_DATE_FORMAT).to_string()
    }

    /// Midnight of this date in the card timestamp layout.
    pub fn to_display(&self) -> String {
        format_locale_timestamp(self.0.and_time(NaiveTime::MIN))
    }
}

impl fmt::Display for JourneyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl TryFrom<String> for JourneyDate {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<JourneyDate> for String {
    fn from(date: JourneyDate) -> String {
        date.to_iso()
    }
}

/// Render a stored timestamp the way cards show it.
pub fn format_locale_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(LOCALE_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_and_plain_date_normalize_to_same_day() {
        let from_timestamp = JourneyDate::parse("2024-05-01T10:00:00Z").unwrap();
        let from_date = JourneyDate::parse("2024-05-01").unwrap();

        assert_eq!(from_timestamp, from_date);
        assert_eq!(from_timestamp.to_iso(), "2024-05-01");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = JourneyDate::parse("2025-03-01T00:00:00+08:00").unwrap();
        let twice = JourneyDate::parse(&once.to_iso()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn offset_does_not_shift_the_calendar_date() {
        let date = JourneyDate::parse("2025-03-01T23:30:00-05:00").unwrap();
        assert_eq!(date.to_iso(), "2025-03-01");
    }

    #[test]
    fn rejects_text_that_is_not_a_date() {
        assert!(JourneyDate::parse("tomorrow").is_err());
        assert!(JourneyDate::parse("").is_err());
        assert!(JourneyDate::parse("2025-02-30").is_err());
    }

    #[test]
    fn displays_midnight_in_card_layout() {
        let date = JourneyDate::parse("2025-03-01").unwrap();
        assert_eq!(date.to_display(), "3/1/2025, 12:00:00 AM");
    }

    #[test]
    fn formats_afternoon_timestamps() {
        let ts = NaiveDate::from_ymd_opt(2025, 12, 24)
            .unwrap()
            .and_hms_opt(15, 5, 9)
            .unwrap();
        assert_eq!(format_locale_timestamp(ts), "12/24/2025, 3:05:09 PM");
    }

    #[test]
    fn serde_uses_iso_string() {
        let date = JourneyDate::parse("2025-03-01T08:00:00").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-03-01\"");
    }
}
