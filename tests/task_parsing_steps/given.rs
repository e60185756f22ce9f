//! Given steps for task parsing BDD scenarios.

use super::world::{ParsingWorld, ScriptedCompletionClient};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskwright::extraction::adapters::FixedClock;

#[given("the completion service is unavailable")]
fn completion_service_unavailable(world: &mut ParsingWorld) {
    world.client = Some(ScriptedCompletionClient::unavailable());
}

#[given(
    r#"the completion service answers with title "{title}", priority "{priority}" and date phrase "{phrase}""#
)]
fn completion_service_answers(
    world: &mut ParsingWorld,
    title: String,
    priority: String,
    phrase: String,
) {
    let response = serde_json::json!({
        "title": title,
        "description": "",
        "priority": priority,
        "status": "To Do",
        "dueDate": phrase,
    });
    world.client = Some(ScriptedCompletionClient::answering(response.to_string()));
}

#[given("the completion service answers with malformed output")]
fn completion_service_malformed(world: &mut ParsingWorld) {
    world.client = Some(ScriptedCompletionClient::answering(
        "Sure! I created that task for you.",
    ));
}

#[given(r#"the reference instant is "{instant}""#)]
fn reference_instant(world: &mut ParsingWorld, instant: String) -> Result<(), eyre::Report> {
    world.clock = Some(FixedClock::parse(&instant).wrap_err("parse reference instant")?);
    Ok(())
}
