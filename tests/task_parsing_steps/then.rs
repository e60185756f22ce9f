//! Then steps for task parsing BDD scenarios.

use super::world::ParsingWorld;
use rstest_bdd_macros::then;
use taskwright::extraction::{
    domain::{InputError, TaskDraft},
    services::{ExtractionSource, ParseReport},
};

fn last_report(world: &ParsingWorld) -> Result<&ParseReport, eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing parse result in scenario world"))?;
    result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected parse failure: {err}"))
}

fn last_draft(world: &ParsingWorld) -> Result<&TaskDraft, eyre::Report> {
    last_report(world).map(|report| &report.draft)
}

#[then(r#"the draft has title "{title}""#)]
fn draft_has_title(world: &ParsingWorld, title: String) -> Result<(), eyre::Report> {
    let draft = last_draft(world)?;
    if draft.title() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            draft.title()
        ));
    }
    Ok(())
}

#[then(r#"the draft has priority "{priority}" and status "{status}""#)]
fn draft_has_priority_and_status(
    world: &ParsingWorld,
    priority: String,
    status: String,
) -> Result<(), eyre::Report> {
    let draft = last_draft(world)?;
    if draft.priority().as_str() != priority || draft.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected {priority}/{status}, found {}/{}",
            draft.priority(),
            draft.status()
        ));
    }
    Ok(())
}

#[then(r#"the draft is due "{due}""#)]
fn draft_is_due(world: &ParsingWorld, due: String) -> Result<(), eyre::Report> {
    let draft = last_draft(world)?;
    if draft.due_date_string().as_deref() != Some(due.as_str()) {
        return Err(eyre::eyre!(
            "expected due date {due}, found {:?}",
            draft.due_date_string()
        ));
    }
    Ok(())
}

#[then("the draft has no due date")]
fn draft_has_no_due_date(world: &ParsingWorld) -> Result<(), eyre::Report> {
    let draft = last_draft(world)?;
    if let Some(due) = draft.due_date_string() {
        return Err(eyre::eyre!("expected no due date, found {due}"));
    }
    Ok(())
}

#[then("the draft came from the rule-based extractor")]
fn draft_from_heuristics(world: &ParsingWorld) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if !matches!(report.source, ExtractionSource::Heuristic { .. }) {
        return Err(eyre::eyre!(
            "expected rule-based extraction, got {:?}",
            report.source
        ));
    }
    Ok(())
}

#[then("the draft came from the completion service")]
fn draft_from_model(world: &ParsingWorld) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if report.source != ExtractionSource::Model {
        return Err(eyre::eyre!(
            "expected completion service extraction, got {:?}",
            report.source
        ));
    }
    Ok(())
}

#[then("parsing fails because the input is too short")]
fn parsing_fails_too_short(world: &ParsingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing parse result in scenario world"))?;
    if !matches!(result, Err(InputError::TooShort { .. })) {
        return Err(eyre::eyre!("expected too-short input error, got {result:?}"));
    }
    Ok(())
}
