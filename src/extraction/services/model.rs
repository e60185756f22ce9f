//! Model extraction path: prompt rendering, completion call, and schema
//! validation of the response.

use crate::extraction::{
    domain::{TaskCandidate, TaskInput, TaskPriority, TaskStatus},
    ports::{CompletionClient, CompletionError, CompletionPrompt},
    temporal::{extract_clock_time, resolve_due_date},
};
use chrono::NaiveDateTime;
use minijinja::{Environment, context};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

const SYSTEM_TEMPLATE: &str = r#"You are a task parsing assistant. Extract task details from natural language.
Return ONLY a single JSON object with exactly these keys:
- "title" (string): the main task, with command and filler words such as {{ fillers | join(", ") }} removed
- "description" (string): additional details, or an empty string
- "priority" (string): one of {% for value in priorities %}"{{ value }}"{% if not loop.last %}, {% endif %}{% endfor %}
- "status" (string): one of {% for value in statuses %}"{{ value }}"{% if not loop.last %}, {% endif %}{% endfor %}
- "dueDate" (string or null): the date or time phrase exactly as the user said it, such as "tomorrow", "next Monday" or "in 3 days", or null

Rules:
1. Default priority is "{{ default_priority }}" unless the text says otherwise
2. Default status is "{{ default_status }}" unless the text says otherwise
3. Never convert dueDate into a calendar date; copy the phrase
4. If uncertain, use the default or an empty string"#;

const TITLE_FILLERS: [&str; 6] = ["create", "add", "remind me to", "i need to", "please", "now"];

static SYSTEM_PROMPT: LazyLock<String> = LazyLock::new(render_system_prompt);

#[expect(
    clippy::expect_used,
    reason = "the template is a static literal; a render failure is a programming error"
)]
fn render_system_prompt() -> String {
    let priorities = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ]
    .map(TaskPriority::as_str);
    let statuses = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done].map(TaskStatus::as_str);

    Environment::new()
        .render_str(
            SYSTEM_TEMPLATE,
            context! {
                fillers => TITLE_FILLERS,
                priorities => priorities,
                statuses => statuses,
                default_priority => TaskPriority::default().as_str(),
                default_status => TaskStatus::default().as_str(),
            },
        )
        .expect("system prompt template must render")
}

/// The model response did not match the expected object schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The response body is not JSON.
    #[error("model response is not valid JSON: {0}")]
    InvalidJson(String),

    /// The response is JSON but not an object.
    #[error("model response must be a single JSON object")]
    NotAnObject,

    /// A required key is absent.
    #[error("model response is missing field '{0}'")]
    MissingField(&'static str),

    /// A key holds a value of the wrong type.
    #[error("model response field '{field}' must be {expected}")]
    WrongType {
        /// Offending key.
        field: &'static str,
        /// Accepted JSON types.
        expected: &'static str,
    },
}

/// Coarse classification of a model path failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFailureKind {
    /// Network, timeout, or credential failure.
    ExternalService,
    /// The response was not well-formed per schema.
    Parse,
}

/// Failure branch of the model extraction path.
#[derive(Debug, Clone, Error)]
pub enum ModelExtractionError {
    /// The completion service could not be used.
    #[error(transparent)]
    ExternalService(#[from] CompletionError),
    /// The completion did not match the schema.
    #[error(transparent)]
    Parse(#[from] SchemaError),
}

impl ModelExtractionError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ModelFailureKind {
        match self {
            Self::ExternalService(_) => ModelFailureKind::ExternalService,
            Self::Parse(_) => ModelFailureKind::Parse,
        }
    }
}

/// Schema-checked fields returned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFields {
    /// Title as written by the model.
    pub title: String,
    /// Description, empty when the model returned null.
    pub description: String,
    /// Raw priority label.
    pub priority: Option<String>,
    /// Raw status label.
    pub status: Option<String>,
    /// Raw date phrase; never a computed date.
    pub due_phrase: Option<String>,
}

impl ModelFields {
    /// Converts model output into a candidate, re-resolving the date phrase
    /// locally.
    ///
    /// A missing, blank, or literal `"null"` phrase resolves against the
    /// original input instead. Clock times are read from the phrase first,
    /// then from the original input.
    #[must_use]
    pub fn into_candidate(self, input: &TaskInput, reference: NaiveDateTime) -> TaskCandidate {
        let phrase = self
            .due_phrase
            .filter(|phrase| !phrase.trim().is_empty() && !phrase.trim().eq_ignore_ascii_case("null"));
        let date_source = phrase.as_deref().unwrap_or_else(|| input.as_str());

        TaskCandidate {
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
            due_date: resolve_due_date(date_source, reference).map(|resolved| resolved.value),
            clock_time: extract_clock_time(date_source)
                .or_else(|| extract_clock_time(input.as_str())),
        }
    }
}

/// Model extraction service wrapping a [`CompletionClient`].
#[derive(Clone)]
pub struct ModelExtractor<C>
where
    C: CompletionClient,
{
    client: Arc<C>,
}

impl<C> ModelExtractor<C>
where
    C: CompletionClient,
{
    /// Creates a model extractor.
    #[must_use]
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Builds the completion prompt for `input`.
    #[must_use]
    pub fn prompt_for(input: &TaskInput) -> CompletionPrompt {
        CompletionPrompt {
            system: SYSTEM_PROMPT.clone(),
            user: format!("Parse this task: \"{}\"", input.as_str()),
        }
    }

    /// Asks the model for task fields. Makes a single attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ModelExtractionError::ExternalService`] when the completion
    /// call fails and [`ModelExtractionError::Parse`] when the response does
    /// not match the schema.
    pub async fn extract(&self, input: &TaskInput) -> Result<ModelFields, ModelExtractionError> {
        let prompt = Self::prompt_for(input);
        tracing::debug!(
            system_chars = prompt.system.len(),
            user_chars = prompt.user.len(),
            "requesting model extraction"
        );
        let raw = self.client.complete(&prompt).await?;
        parse_model_response(&raw).map_err(ModelExtractionError::from)
    }
}

/// Validates a raw completion against the five-key task schema.
///
/// Markdown code fences around the object are tolerated. `title` must be a
/// string; the other keys may be strings or null. Partial objects are
/// rejected.
///
/// # Errors
///
/// Returns [`SchemaError`] describing the first violation found.
pub fn parse_model_response(raw: &str) -> Result<ModelFields, SchemaError> {
    let body = strip_code_fence(raw);
    let value: Value =
        serde_json::from_str(body).map_err(|err| SchemaError::InvalidJson(err.to_string()))?;
    let object = value.as_object().ok_or(SchemaError::NotAnObject)?;

    let title = required_field(object, "title")?
        .as_str()
        .ok_or(SchemaError::WrongType {
            field: "title",
            expected: "a string",
        })?
        .to_owned();

    Ok(ModelFields {
        title,
        description: nullable_string(object, "description")?.unwrap_or_default(),
        priority: nullable_string(object, "priority")?,
        status: nullable_string(object, "status")?,
        due_phrase: nullable_string(object, "dueDate")?,
    })
}

fn required_field<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, SchemaError> {
    object.get(field).ok_or(SchemaError::MissingField(field))
}

fn nullable_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, SchemaError> {
    match required_field(object, field)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        _ => Err(SchemaError::WrongType {
            field,
            expected: "a string or null",
        }),
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(fenced) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let after_language = fenced.split_once('\n').map_or("", |(_, rest)| rest);
    after_language
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(after_language)
        .trim()
}
