//! Rule-based extraction used when the completion service is unavailable.
//!
//! Everything here is deterministic keyword and pattern matching over the
//! input text; no external calls are made.

use crate::extraction::{
    domain::{TaskCandidate, TaskInput, TaskPriority, TaskStatus},
    temporal::{extract_clock_time, resolve_due_date},
};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Keyword tiers checked in order; the first tier with a hit wins.
const PRIORITY_TIERS: [(&[&str], TaskPriority); 3] = [
    (&["urgent", "critical", "asap"], TaskPriority::Urgent),
    (&["high priority", "important"], TaskPriority::High),
    (&["low priority", "not urgent"], TaskPriority::Low),
];

const STATUS_TIERS: [(&[&str], TaskStatus); 2] = [
    (&["in progress", "working on"], TaskStatus::InProgress),
    (&["done", "completed"], TaskStatus::Done),
];

static LEADING_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:create|add|make|remind\s+me\s+to|i\s+need\s+to)\s+")
});

static TASK_NOUN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:(?:a|an)\s+)?(?:new\s+)?(?:task|reminder|to-?do)\s+(?:(?:to|for)\s+)?")
});

static TRAILING_FILLER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\s+(?:please|now|quickly|urgently)[.!]*$"));

#[expect(
    clippy::expect_used,
    reason = "patterns are static literals; a compile failure is a programming error"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("title pattern must compile")
}

/// Deterministic keyword extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    /// Extracts every candidate field from validated input.
    #[must_use]
    pub fn extract(input: &TaskInput, reference: NaiveDateTime) -> TaskCandidate {
        let text = input.as_str();
        let folded = text.to_lowercase();
        TaskCandidate {
            title: Self::extract_title(text),
            description: String::new(),
            priority: Some(Self::extract_priority(&folded).as_str().to_owned()),
            status: Some(Self::extract_status(&folded).as_str().to_owned()),
            due_date: resolve_due_date(text, reference).map(|resolved| resolved.value),
            clock_time: extract_clock_time(text),
        }
    }

    /// Strips a leading command phrase and a trailing filler word, then
    /// capitalizes the first character.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskwright::extraction::heuristic::HeuristicExtractor;
    ///
    /// assert_eq!(
    ///     HeuristicExtractor::extract_title("create a task to buy milk please"),
    ///     "Buy milk"
    /// );
    /// ```
    #[must_use]
    pub fn extract_title(text: &str) -> String {
        let trimmed = text.trim();
        let without_command = match LEADING_COMMAND.find(trimmed) {
            Some(command) => {
                let rest = trimmed.get(command.end()..).unwrap_or_default();
                TASK_NOUN.replace(rest, "").into_owned()
            }
            None => trimmed.to_owned(),
        };
        let cleaned = TRAILING_FILLER.replace(&without_command, "");
        capitalize_first(cleaned.trim())
    }

    /// Scans case-folded text for priority keywords.
    #[must_use]
    pub fn extract_priority(folded_text: &str) -> TaskPriority {
        first_tier(folded_text, &PRIORITY_TIERS).unwrap_or_default()
    }

    /// Scans case-folded text for status keywords.
    #[must_use]
    pub fn extract_status(folded_text: &str) -> TaskStatus {
        first_tier(folded_text, &STATUS_TIERS).unwrap_or_default()
    }
}

fn first_tier<T: Copy>(folded_text: &str, tiers: &[(&[&str], T)]) -> Option<T> {
    tiers.iter().find_map(|(keywords, value)| {
        keywords
            .iter()
            .any(|keyword| folded_text.contains(keyword))
            .then_some(*value)
    })
}

/// Upper-cases the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}
