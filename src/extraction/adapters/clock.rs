//! Reference clocks: the system clock and one pinned to a fixed wall-clock
//! instant.

use crate::extraction::ports::ReferenceClock;
use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};
use mockable::{Clock, DefaultClock};

impl ReferenceClock for DefaultClock {
    fn wall_clock(&self) -> NaiveDateTime {
        self.local().naive_local()
    }
}

/// A clock that always reports the same wall-clock instant.
///
/// Used to replay parses against a known "now" and to keep temporal tests
/// deterministic regardless of the machine timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    wall_clock: NaiveDateTime,
}

impl FixedClock {
    /// Pins the clock at `wall_clock`.
    #[must_use]
    pub const fn at(wall_clock: NaiveDateTime) -> Self {
        Self { wall_clock }
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS` into a pinned clock.
    ///
    /// # Errors
    ///
    /// Returns the [`chrono::ParseError`] when `value` is malformed.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, crate::extraction::domain::DUE_DATE_FORMAT)
            .map(Self::at)
    }
}

impl ReferenceClock for FixedClock {
    fn wall_clock(&self) -> NaiveDateTime {
        self.wall_clock
    }
}

impl Clock for FixedClock {
    /// Places the pinned wall clock in the local timezone.
    ///
    /// A reading inside a daylight-saving gap moves forward by the usual
    /// one-hour shift, so it keeps its calendar date.
    fn local(&self) -> DateTime<Local> {
        Local
            .from_local_datetime(&self.wall_clock)
            .earliest()
            .or_else(|| {
                self.wall_clock
                    .checked_add_signed(TimeDelta::hours(1))
                    .and_then(|shifted| Local.from_local_datetime(&shifted).earliest())
            })
            .unwrap_or_else(|| Local.from_utc_datetime(&self.wall_clock))
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}
