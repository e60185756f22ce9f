//! Pre-normalization extraction record.

use super::{ClockTime, TaskDraft};
use chrono::NaiveDateTime;

/// Fields produced by either extraction strategy before normalization.
///
/// Priority and status are kept as raw labels so the normalizer can coerce
/// model output and heuristic output through one path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCandidate {
    /// Extracted title, possibly empty.
    pub title: String,
    /// Extracted description, possibly empty.
    pub description: String,
    /// Raw priority label.
    pub priority: Option<String>,
    /// Raw status label.
    pub status: Option<String>,
    /// Resolved due date, before any clock time is applied.
    pub due_date: Option<NaiveDateTime>,
    /// Explicit time of day found in the input.
    pub clock_time: Option<ClockTime>,
}

impl TaskCandidate {
    /// Creates a candidate with only a title set.
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl From<&TaskDraft> for TaskCandidate {
    fn from(draft: &TaskDraft) -> Self {
        Self {
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            priority: Some(draft.priority().as_str().to_owned()),
            status: Some(draft.status().as_str().to_owned()),
            due_date: draft.due_date(),
            clock_time: None,
        }
    }
}
