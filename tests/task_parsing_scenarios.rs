//! Behaviour tests for natural-language task parsing.

mod task_parsing_steps;

use rstest_bdd_macros::scenario;
use task_parsing_steps::world::{ParsingWorld, world};

#[scenario(
    path = "tests/features/task_parsing.feature",
    name = "Fall back to rule-based extraction when the completion service is unavailable"
)]
#[tokio::test(flavor = "multi_thread")]
async fn fallback_when_service_unavailable(world: ParsingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_parsing.feature",
    name = "Use completion service fields and resolve the date phrase locally"
)]
#[tokio::test(flavor = "multi_thread")]
async fn model_fields_with_local_date(world: ParsingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_parsing.feature",
    name = "Discard a malformed completion and fall back"
)]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_completion_falls_back(world: ParsingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_parsing.feature",
    name = "Reject input that is too short"
)]
#[tokio::test(flavor = "multi_thread")]
async fn short_input_rejected(world: ParsingWorld) {
    let _ = world;
}
