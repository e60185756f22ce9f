//! Temporal expression resolution.
//!
//! Two independent passes run over the same text: [`resolve_due_date`]
//! walks an ordered chain of date phrase rules against the case-folded text,
//! and [`extract_clock_time`] looks for an explicit time of day. Callers
//! combine the two with [`apply_clock_time`]; there is no unified grammar
//! for "tomorrow at 5pm".

mod clock_time;
mod date_rules;

pub use clock_time::extract_clock_time;
pub use date_rules::TemporalPhrase;

use crate::extraction::domain::ClockTime;
use chrono::NaiveDateTime;
use date_rules::DATE_RULES;

/// A due date resolved from a recognized phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    /// The phrase class that matched.
    pub phrase: TemporalPhrase,
    /// The concrete wall-clock instant.
    pub value: NaiveDateTime,
}

/// Resolves the first recognized date phrase in `text` against `reference`.
///
/// Returns `None` when no phrase matches. A phrase that matches but names
/// an impossible date (for example `31/2/2024`) is skipped and evaluation
/// continues with the next rule.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskwright::extraction::temporal::resolve_due_date;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 10)
///     .and_then(|date| date.and_hms_opt(10, 0, 0))
///     .expect("valid reference");
/// let resolved = resolve_due_date("call mom tomorrow", reference).expect("recognized");
/// assert_eq!(resolved.value.to_string(), "2024-01-11 10:00:00");
/// ```
#[must_use]
pub fn resolve_due_date(text: &str, reference: NaiveDateTime) -> Option<ResolvedDate> {
    let folded = text.to_lowercase();
    let (phrase, value) = DATE_RULES
        .iter()
        .find_map(|rule| rule.apply(&folded, reference))?;
    tracing::debug!(?phrase, %value, "resolved date phrase");
    Some(ResolvedDate { phrase, value })
}

/// Replaces the time of day on `date` when an explicit clock time exists.
#[must_use]
pub fn apply_clock_time(date: NaiveDateTime, clock_time: Option<ClockTime>) -> NaiveDateTime {
    clock_time.map_or(date, |time| date.date().and_time(time.to_naive_time()))
}
