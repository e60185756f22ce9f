//! When steps for task parsing BDD scenarios.

use super::world::{ParsingWorld, run_async};
use rstest_bdd_macros::when;
use std::sync::Arc;
use taskwright::extraction::services::TaskParser;

#[when(r#"the text "{text}" is parsed"#)]
fn parse_text(world: &mut ParsingWorld, text: String) -> Result<(), eyre::Report> {
    let client = world
        .client
        .clone()
        .ok_or_else(|| eyre::eyre!("missing completion client in scenario world"))?;
    let clock = world
        .clock
        .ok_or_else(|| eyre::eyre!("missing reference instant in scenario world"))?;

    let parser = TaskParser::new(Arc::new(client), Arc::new(clock));
    world.last_result = Some(run_async(parser.parse_with_report(&text)));
    Ok(())
}
