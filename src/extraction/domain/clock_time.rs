//! Wall-clock time of day extracted from text.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A validated 24-hour time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Creates a time of day, returning `None` outside `00:00..=23:59`.
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Converts a 12-hour reading into 24-hour time.
    ///
    /// `pm` adds twelve hours unless the hour is already 12; `am` maps 12
    /// to midnight. Hours above 12 pass through unchanged.
    #[must_use]
    pub const fn from_meridiem(hour: u32, minute: u32, meridiem: Meridiem) -> Option<Self> {
        let converted = match meridiem {
            Meridiem::Pm if hour < 12 => hour + 12,
            Meridiem::Am if hour == 12 => 0,
            Meridiem::Am | Meridiem::Pm => hour,
        };
        Self::new(converted, minute)
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// Returns the time with zero seconds.
    #[must_use]
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// After noon.
    Pm,
}

impl Meridiem {
    /// Parses `am`/`pm` case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            _ => None,
        }
    }
}
