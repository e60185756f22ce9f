//! Shared world state for task parsing BDD scenarios.

use async_trait::async_trait;
use rstest::fixture;
use taskwright::extraction::{
    adapters::FixedClock,
    domain::InputError,
    ports::{CompletionClient, CompletionError, CompletionPrompt, CompletionResult},
    services::ParseReport,
};

/// Completion client that replays a fixed answer or fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCompletionClient {
    response: Option<String>,
}

impl ScriptedCompletionClient {
    /// A client whose every call fails with missing credentials.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { response: None }
    }

    /// A client that always answers with `response`.
    #[must_use]
    pub fn answering(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(&self, _prompt: &CompletionPrompt) -> CompletionResult<String> {
        self.response
            .clone()
            .ok_or(CompletionError::MissingCredentials)
    }
}

/// Scenario world for task parsing behaviour tests.
#[derive(Default)]
pub struct ParsingWorld {
    /// Completion client configured by a given step.
    pub client: Option<ScriptedCompletionClient>,
    /// Pinned reference instant.
    pub clock: Option<FixedClock>,
    /// Outcome of the most recent parse.
    pub last_result: Option<Result<ParseReport, InputError>>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ParsingWorld {
    ParsingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
