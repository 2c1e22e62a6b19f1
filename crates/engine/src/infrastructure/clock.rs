//! Clock implementations.

use crate::infrastructure::ports::ClockPort;
use chrono::{DateTime, FixedOffset, Utc};

/// System clock - real time, shifted to the store's offset.
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<FixedOffset>);

#[cfg(test)]
impl FixedClock {
    /// Midnight UTC+8 on the given calendar day.
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        use chrono::TimeZone;
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        match offset.with_ymd_and_hms(year, month, day, 0, 0, 0) {
            chrono::LocalResult::Single(now) => Self(now),
            _ => panic!("invalid fixed clock date {year}-{month}-{day}"),
        }
    }
}

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
