//! Ordered date phrase rules.
//!
//! The first rule whose pattern matches and whose resolution yields a real
//! calendar date wins. Reordering [`DATE_RULES`] changes behaviour.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::{Captures, Regex};
use std::sync::LazyLock;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Recognized class of date phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalPhrase {
    /// "today" or "now": the reference instant.
    Today,
    /// "tomorrow": one day after the reference instant.
    Tomorrow,
    /// "next <weekday>": the next occurrence strictly after the reference date.
    NextWeekday(Weekday),
    /// "in N days".
    InDays,
    /// `D/M/YYYY` at midnight.
    NumericDate,
    /// `D <month> YYYY` at midnight.
    MonthNameDate,
    /// "by end of day": 23:59:59 on the reference date.
    EndOfDay,
    /// "by evening": 18:00 on the reference date.
    Evening,
    /// "by morning": 09:00 on the reference date.
    Morning,
    /// "by afternoon": 14:00 on the reference date.
    Afternoon,
}

impl TemporalPhrase {
    /// Resolves the phrase against `reference` using the pattern captures.
    fn resolve(self, captures: &Captures<'_>, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Today => Some(reference),
            Self::Tomorrow => reference.checked_add_days(Days::new(1)),
            Self::NextWeekday(target) => next_weekday(reference, target),
            Self::InDays => {
                let days = capture_number::<u64>(captures, 1)?;
                reference.checked_add_days(Days::new(days))
            }
            Self::NumericDate => {
                let day = capture_number(captures, 1)?;
                let month = capture_number(captures, 2)?;
                let year = capture_number(captures, 3)?;
                NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(NaiveTime::MIN))
            }
            Self::MonthNameDate => {
                let day = capture_number(captures, 1)?;
                let month = month_number(captures.get(2)?.as_str())?;
                let year = capture_number(captures, 3)?;
                NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(NaiveTime::MIN))
            }
            Self::EndOfDay => reference.date().and_hms_opt(23, 59, 59),
            Self::Evening => reference.date().and_hms_opt(18, 0, 0),
            Self::Morning => reference.date().and_hms_opt(9, 0, 0),
            Self::Afternoon => reference.date().and_hms_opt(14, 0, 0),
        }
    }
}

/// A date phrase pattern paired with its resolution rule.
pub(super) struct DateRule {
    pattern: Regex,
    phrase: TemporalPhrase,
}

impl DateRule {
    /// Applies the rule to case-folded text.
    pub(super) fn apply(
        &self,
        folded_text: &str,
        reference: NaiveDateTime,
    ) -> Option<(TemporalPhrase, NaiveDateTime)> {
        let captures = self.pattern.captures(folded_text)?;
        self.phrase
            .resolve(&captures, reference)
            .map(|resolved| (self.phrase, resolved))
    }
}

/// Date rules in evaluation order.
pub(super) static DATE_RULES: LazyLock<Vec<DateRule>> = LazyLock::new(build_rules);

#[expect(
    clippy::expect_used,
    reason = "patterns are static literals; a compile failure is a programming error"
)]
fn build_rules() -> Vec<DateRule> {
    let weekday_rules = [
        (Weekday::Mon, "monday"),
        (Weekday::Tue, "tuesday"),
        (Weekday::Wed, "wednesday"),
        (Weekday::Thu, "thursday"),
        (Weekday::Fri, "friday"),
        (Weekday::Sat, "saturday"),
        (Weekday::Sun, "sunday"),
    ]
    .into_iter()
    .map(|(weekday, name)| {
        (
            format!(r"\bnext\s+{name}\b"),
            TemporalPhrase::NextWeekday(weekday),
        )
    });

    let leading = [
        (r"\b(?:today|now)\b".to_owned(), TemporalPhrase::Today),
        (r"\btomorrow\b".to_owned(), TemporalPhrase::Tomorrow),
    ];
    let trailing = [
        (r"\bin\s+(\d+)\s+days?\b".to_owned(), TemporalPhrase::InDays),
        (
            r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b".to_owned(),
            TemporalPhrase::NumericDate,
        ),
        (
            r"\b(\d{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{4})\b"
                .to_owned(),
            TemporalPhrase::MonthNameDate,
        ),
        (
            r"\bby\s+(?:the\s+)?end\s+of\s+(?:the\s+)?day\b".to_owned(),
            TemporalPhrase::EndOfDay,
        ),
        (
            r"\bby\s+(?:this\s+)?evening\b".to_owned(),
            TemporalPhrase::Evening,
        ),
        (
            r"\bby\s+(?:this\s+)?morning\b".to_owned(),
            TemporalPhrase::Morning,
        ),
        (
            r"\bby\s+(?:this\s+)?afternoon\b".to_owned(),
            TemporalPhrase::Afternoon,
        ),
    ];

    leading
        .into_iter()
        .chain(weekday_rules)
        .chain(trailing)
        .map(|(pattern, phrase)| DateRule {
            pattern: Regex::new(&pattern).expect("date rule pattern must compile"),
            phrase,
        })
        .collect()
}

fn next_weekday(reference: NaiveDateTime, target: Weekday) -> Option<NaiveDateTime> {
    (1..=7).find_map(|offset| {
        reference
            .checked_add_days(Days::new(offset))
            .filter(|candidate| candidate.weekday() == target)
    })
}

fn capture_number<T: std::str::FromStr>(captures: &Captures<'_>, group: usize) -> Option<T> {
    captures.get(group)?.as_str().parse().ok()
}

fn month_number(name: &str) -> Option<u32> {
    let index = MONTH_ABBREVIATIONS
        .iter()
        .position(|abbreviation| name.starts_with(abbreviation))?;
    u32::try_from(index + 1).ok()
}
