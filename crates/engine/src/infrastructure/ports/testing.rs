//! Testability port for injecting time.

use chrono::{DateTime, FixedOffset};

/// Current time in the booking store's local offset.
///
/// Handlers take `now().date_naive()` as the store's "today".
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}
