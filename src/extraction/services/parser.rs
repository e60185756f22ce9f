//! Extraction orchestrator: validation, model path, heuristic fallback,
//! and normalization.

use super::model::{ModelExtractionError, ModelExtractor, ModelFailureKind, ModelFields};
use crate::extraction::{
    domain::{InputError, InputLimits, TaskCandidate, TaskDraft, TaskInput},
    heuristic::HeuristicExtractor,
    normalizer::Normalizer,
    ports::{CompletionClient, CompletionError, ReferenceClock},
};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Tunables for [`TaskParser`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taskwright::extraction::services::ExtractionConfig;
///
/// let config = ExtractionConfig::default().with_model_timeout(Duration::from_secs(5));
/// assert_eq!(config.limits.max_chars, 1000);
/// assert_eq!(config.model_timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Input size limits.
    pub limits: InputLimits,
    /// Upper bound on the model round trip; `None` leaves it to the client.
    pub model_timeout: Option<Duration>,
    /// Characters of the original input used when no title is extracted.
    pub fallback_title_chars: usize,
    /// Maximum title length in characters.
    pub max_title_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            limits: InputLimits::default(),
            model_timeout: None,
            fallback_title_chars: 50,
            max_title_chars: 200,
        }
    }
}

impl ExtractionConfig {
    /// Sets input limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Bounds the model round trip.
    #[must_use]
    pub const fn with_model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = Some(timeout);
        self
    }

    const fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.fallback_title_chars, self.max_title_chars)
    }
}

/// Which strategy produced a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ExtractionSource {
    /// The completion service answered with a well-formed object.
    Model,
    /// The rule-based extractor ran after the model path failed.
    Heuristic {
        /// Why the model path was abandoned.
        reason: ModelFailureKind,
    },
}

/// A draft together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// The normalized draft.
    pub draft: TaskDraft,
    /// The producing strategy.
    pub source: ExtractionSource,
}

/// Diagnostic echo of a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticParse {
    /// The text as supplied by the caller.
    pub input: String,
    /// The normalized draft.
    pub parsed_task: TaskDraft,
    /// The producing strategy.
    pub source: ExtractionSource,
}

/// Text-to-task extraction service.
///
/// Stateless across calls: the only inputs are the text and the reference
/// instant read from the injected clock at the start of each call.
#[derive(Clone)]
pub struct TaskParser<M, C>
where
    M: CompletionClient,
    C: ReferenceClock,
{
    model: ModelExtractor<M>,
    clock: Arc<C>,
    config: ExtractionConfig,
}

impl<M, C> TaskParser<M, C>
where
    M: CompletionClient,
    C: ReferenceClock,
{
    /// Creates a parser with default configuration.
    #[must_use]
    pub fn new(client: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            model: ModelExtractor::new(client),
            clock,
            config: ExtractionConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Parses free-form text into a task draft.
    ///
    /// Model failures of any kind degrade to the heuristic extractor; the
    /// draft is always structurally valid.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] only when the text is too short or too long.
    pub async fn parse(&self, text: &str) -> Result<TaskDraft, InputError> {
        self.parse_with_report(text).await.map(|report| report.draft)
    }

    /// Parses text and reports which strategy produced the draft.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] only when the text is too short or too long.
    pub async fn parse_with_report(&self, text: &str) -> Result<ParseReport, InputError> {
        let input = TaskInput::validate(text, self.config.limits)?;
        let reference = self.reference_instant();

        let (candidate, source) = match self.attempt_model(&input).await {
            Ok(fields) => (fields.into_candidate(&input, reference), ExtractionSource::Model),
            Err(err) => {
                tracing::warn!(
                    kind = ?err.kind(),
                    reason = %err,
                    "model extraction failed; using heuristic extractor"
                );
                (
                    Self::heuristic_candidate(&input, reference),
                    ExtractionSource::Heuristic { reason: err.kind() },
                )
            }
        };

        let draft = self.config.normalizer().normalize(candidate, input.as_str());
        tracing::info!(
            source = ?source,
            priority = %draft.priority(),
            status = %draft.status(),
            has_due_date = draft.due_date().is_some(),
            "task draft extracted"
        );
        Ok(ParseReport { draft, source })
    }

    /// Diagnostic pass-through to the same pipeline, echoing the input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] only when the text is too short or too long.
    pub async fn test(&self, text: &str) -> Result<DiagnosticParse, InputError> {
        let report = self.parse_with_report(text).await?;
        Ok(DiagnosticParse {
            input: text.to_owned(),
            parsed_task: report.draft,
            source: report.source,
        })
    }

    /// Runs only the heuristic path on already validated input.
    #[must_use]
    pub fn parse_heuristic(&self, input: &TaskInput) -> TaskDraft {
        let candidate = Self::heuristic_candidate(input, self.reference_instant());
        self.config.normalizer().normalize(candidate, input.as_str())
    }

    fn reference_instant(&self) -> NaiveDateTime {
        self.clock.wall_clock()
    }

    fn heuristic_candidate(input: &TaskInput, reference: NaiveDateTime) -> TaskCandidate {
        HeuristicExtractor::extract(input, reference)
    }

    async fn attempt_model(
        &self,
        input: &TaskInput,
    ) -> Result<ModelFields, ModelExtractionError> {
        let attempt = self.model.extract(input);
        match self.config.model_timeout {
            Some(limit) => tokio::time::timeout(limit, attempt)
                .await
                .unwrap_or_else(|_elapsed| Err(CompletionError::Timeout.into())),
            None => attempt.await,
        }
    }
}
