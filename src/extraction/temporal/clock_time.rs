//! Explicit time-of-day extraction.

use crate::extraction::domain::{ClockTime, Meridiem};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// How an omitted meridiem is read by a time pattern.
#[derive(Debug, Clone, Copy)]
enum MeridiemRule {
    Required,
    DefaultAm,
}

struct TimePattern {
    pattern: Regex,
    meridiem: MeridiemRule,
}

static TIME_PATTERNS: LazyLock<Vec<TimePattern>> = LazyLock::new(build_patterns);

#[expect(
    clippy::expect_used,
    reason = "patterns are static literals; a compile failure is a programming error"
)]
fn build_patterns() -> Vec<TimePattern> {
    [
        (r"(?i)\b(\d{1,2}):(\d{2})\s*(am|pm)\b", MeridiemRule::Required),
        (
            r"(?i)\bat\s+(\d{1,2})(?:[:.](\d{2}))?\s*(am|pm)?\b",
            MeridiemRule::DefaultAm,
        ),
    ]
    .into_iter()
    .map(|(pattern, meridiem)| TimePattern {
        pattern: Regex::new(pattern).expect("time pattern must compile"),
        meridiem,
    })
    .collect()
}

/// Finds an explicit clock time such as `3:30 pm` or `at 9`.
///
/// The text is matched as given; patterns are case-insensitive. An omitted
/// meridiem after `at` reads as `am`, so `at 12` is midnight.
#[must_use]
pub fn extract_clock_time(text: &str) -> Option<ClockTime> {
    TIME_PATTERNS.iter().find_map(|time_pattern| {
        let captures = time_pattern.pattern.captures(text)?;
        read_clock_time(&captures, time_pattern.meridiem)
    })
}

fn read_clock_time(captures: &Captures<'_>, rule: MeridiemRule) -> Option<ClockTime> {
    let hour = captures.get(1)?.as_str().parse().ok()?;
    let minute = match captures.get(2) {
        Some(minutes) => minutes.as_str().parse().ok()?,
        None => 0,
    };
    let meridiem = match (captures.get(3), rule) {
        (Some(found), _) => Meridiem::parse(found.as_str())?,
        (None, MeridiemRule::DefaultAm) => Meridiem::Am,
        (None, MeridiemRule::Required) => return None,
    };
    ClockTime::from_meridiem(hour, minute, meridiem)
}
