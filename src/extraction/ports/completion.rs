//! Completion service port used by the model extraction path.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for completion calls.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// A single completion request: system instruction plus user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPrompt {
    /// Instruction describing the output schema and extraction rules.
    pub system: String,
    /// The user message carrying the task text.
    pub user: String,
}

/// Remote text-completion capability.
///
/// Implementations perform exactly one request per call and do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` and returns the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError`] when credentials are missing, the request
    /// fails in transit, or the service answers with an error or no content.
    async fn complete(&self, prompt: &CompletionPrompt) -> CompletionResult<String>;
}

/// Failures reaching or using the completion service.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// No API credentials are configured.
    #[error("completion service credentials are not configured")]
    MissingCredentials,

    /// The request did not complete within the allowed time.
    #[error("completion request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("completion service returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// The service answered without any completion content.
    #[error("completion service returned no content")]
    EmptyResponse,

    /// Connection, TLS, or decoding failure.
    #[error("completion transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl CompletionError {
    /// Wraps a transport-level error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` for authentication failures (missing or rejected keys).
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials | Self::Http {
                status: 401 | 403,
                ..
            }
        )
    }
}
