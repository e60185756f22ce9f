//! Final contract enforcement for task drafts.

use crate::extraction::{
    domain::{TaskCandidate, TaskDraft, TaskPriority, TaskStatus},
    heuristic::capitalize_first,
    temporal::apply_clock_time,
};
use chrono::{NaiveDateTime, Timelike};

/// Title used when neither extraction nor the original input yield text.
const UNTITLED: &str = "Untitled task";

/// Coerces extraction candidates into valid [`TaskDraft`] values.
///
/// Normalizing is idempotent: feeding a normalized draft back through
/// [`Normalizer::renormalize`] returns an equal draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    fallback_title_chars: usize,
    max_title_chars: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(50, 200)
    }
}

impl Normalizer {
    /// Creates a normalizer with explicit title bounds.
    #[must_use]
    pub const fn new(fallback_title_chars: usize, max_title_chars: usize) -> Self {
        Self {
            fallback_title_chars,
            max_title_chars,
        }
    }

    /// Builds a draft from `candidate`, falling back to `original_input` for
    /// an empty title.
    #[must_use]
    pub fn normalize(&self, candidate: TaskCandidate, original_input: &str) -> TaskDraft {
        let TaskCandidate {
            title,
            description,
            priority: priority_label,
            status: status_label,
            due_date: due_day,
            clock_time,
        } = candidate;
        let priority = priority_label
            .as_deref()
            .and_then(TaskPriority::coerce)
            .unwrap_or_default();
        let status = status_label
            .as_deref()
            .and_then(TaskStatus::coerce)
            .unwrap_or_default();
        let due_date = due_day
            .map(|date| apply_clock_time(date, clock_time))
            .and_then(to_whole_second);

        TaskDraft::from_normalized(
            self.normalize_title(&title, original_input),
            description.trim().to_owned(),
            priority,
            status,
            due_date,
        )
    }

    /// Runs an existing draft through normalization again.
    #[must_use]
    pub fn renormalize(&self, draft: &TaskDraft) -> TaskDraft {
        self.normalize(TaskCandidate::from(draft), draft.title())
    }

    fn normalize_title(&self, title: &str, original_input: &str) -> String {
        let extracted = title.trim();
        let chosen = if extracted.is_empty() {
            let fallback: String = original_input
                .trim()
                .chars()
                .take(self.fallback_title_chars)
                .collect();
            capitalize_first(fallback.trim())
        } else {
            capitalize_first(extracted)
        };

        if chosen.is_empty() {
            return UNTITLED.to_owned();
        }
        let bounded: String = chosen.chars().take(self.max_title_chars).collect();
        bounded.trim_end().to_owned()
    }
}

/// Drops sub-second precision so drafts carry whole-second wall-clock times.
fn to_whole_second(due: NaiveDateTime) -> Option<NaiveDateTime> {
    due.with_nanosecond(0)
}
