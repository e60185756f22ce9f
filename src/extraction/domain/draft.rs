//! Task draft record and its enumerated fields.

use super::{ParsePriorityError, ParseStatusError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Canonical wall-clock format for due dates (timezone-naive).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Default priority.
    #[default]
    Medium,
    /// Should be handled soon.
    High,
    /// Needs attention immediately.
    Urgent,
}

impl TaskPriority {
    /// Returns the display name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    /// Maps a loosely-phrased priority onto the nearest declared value.
    ///
    /// Returns `None` when nothing sensible matches; callers fall back to
    /// [`TaskPriority::default`].
    #[must_use]
    pub fn coerce(value: &str) -> Option<Self> {
        let normalized = normalize_label(value);
        match normalized.as_str() {
            "low" | "low priority" | "minor" => Some(Self::Low),
            "medium" | "normal" | "moderate" | "default" => Some(Self::Medium),
            "high" | "high priority" | "important" => Some(Self::High),
            "urgent" | "critical" | "asap" | "highest" => Some(Self::Urgent),
            _ => None,
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task workflow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started.
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Returns the display name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Maps a loosely-phrased status onto the nearest declared value.
    #[must_use]
    pub fn coerce(value: &str) -> Option<Self> {
        let normalized = normalize_label(value);
        match normalized.as_str() {
            "to do" | "todo" | "pending" | "open" | "not started" | "new" => Some(Self::ToDo),
            "in progress" | "doing" | "started" | "ongoing" | "working" => {
                Some(Self::InProgress)
            }
            "done" | "completed" | "complete" | "finished" | "closed" => Some(Self::Done),
            _ => None,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "to do" => Ok(Self::ToDo),
            "in progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cases a label and folds `_`/`-` separators into spaces.
fn normalize_label(value: &str) -> String {
    let folded: String = value
        .trim()
        .chars()
        .map(|character| match character {
            '_' | '-' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Structured task produced by the extraction pipeline.
///
/// Values are only built by [`crate::extraction::normalizer::Normalizer`],
/// so the title is never empty and enum fields always hold declared values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    title: String,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
    #[serde(serialize_with = "serialize_due_date")]
    due_date: Option<NaiveDateTime>,
}

impl TaskDraft {
    pub(crate) const fn from_normalized(
        title: String,
        description: String,
        priority: TaskPriority,
        status: TaskStatus,
        due_date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            title,
            description,
            priority,
            status,
            due_date,
        }
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the resolved due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDateTime> {
        self.due_date
    }

    /// Returns the due date in [`DUE_DATE_FORMAT`].
    #[must_use]
    pub fn due_date_string(&self) -> Option<String> {
        self.due_date
            .map(|due| due.format(DUE_DATE_FORMAT).to_string())
    }
}

#[expect(
    clippy::ref_option,
    reason = "serde passes the field by reference to serialize_with"
)]
fn serialize_due_date<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(due) => serializer.collect_str(&due.format(DUE_DATE_FORMAT)),
        None => serializer.serialize_none(),
    }
}
