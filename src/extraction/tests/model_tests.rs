//! Tests for the model extraction path.

use std::sync::Arc;

use super::fixtures::{at, wednesday};
use crate::extraction::{
    domain::{ClockTime, InputLimits, TaskInput},
    ports::completion::{CompletionError, MockCompletionClient},
    services::{
        ModelExtractionError, ModelExtractor, ModelFailureKind, SchemaError, parse_model_response,
    },
};
use chrono::NaiveDateTime;
use rstest::rstest;

const COMPLETE_RESPONSE: &str = r#"{
    "title": "Review the PR",
    "description": "Before the release branch is cut",
    "priority": "Urgent",
    "status": "To Do",
    "dueDate": "tomorrow evening"
}"#;

fn input(text: &str) -> TaskInput {
    TaskInput::validate(text, InputLimits::default()).expect("valid input")
}

#[rstest]
fn complete_response_is_accepted() {
    let fields = parse_model_response(COMPLETE_RESPONSE).expect("schema-valid response");
    assert_eq!(fields.title, "Review the PR");
    assert_eq!(fields.description, "Before the release branch is cut");
    assert_eq!(fields.priority.as_deref(), Some("Urgent"));
    assert_eq!(fields.status.as_deref(), Some("To Do"));
    assert_eq!(fields.due_phrase.as_deref(), Some("tomorrow evening"));
}

#[rstest]
fn fenced_response_is_unwrapped() {
    let fenced = format!("```json\n{COMPLETE_RESPONSE}\n```");
    assert!(parse_model_response(&fenced).is_ok());
}

#[rstest]
fn null_fields_are_accepted() {
    let fields = parse_model_response(
        r#"{"title":"Buy milk","description":null,"priority":null,"status":null,"dueDate":null}"#,
    )
    .expect("schema-valid response");
    assert_eq!(fields.description, "");
    assert!(fields.priority.is_none());
    assert!(fields.due_phrase.is_none());
}

#[rstest]
#[case(
    r#"{"title":"Buy milk","description":"","priority":"Low","status":"To Do"}"#,
    SchemaError::MissingField("dueDate")
)]
#[case(
    r#"{"description":"","priority":"Low","status":"To Do","dueDate":null}"#,
    SchemaError::MissingField("title")
)]
#[case(
    r#"{"title":7,"description":"","priority":"Low","status":"To Do","dueDate":null}"#,
    SchemaError::WrongType { field: "title", expected: "a string" }
)]
#[case(
    r#"{"title":"Buy milk","description":"","priority":3,"status":"To Do","dueDate":null}"#,
    SchemaError::WrongType { field: "priority", expected: "a string or null" }
)]
#[case(r#"[{"title":"Buy milk"}]"#, SchemaError::NotAnObject)]
fn malformed_responses_are_rejected(#[case] raw: &str, #[case] expected: SchemaError) {
    assert_eq!(parse_model_response(raw), Err(expected));
}

#[rstest]
fn prose_response_is_invalid_json() {
    assert!(matches!(
        parse_model_response("Sure! Here is your task: buy milk"),
        Err(SchemaError::InvalidJson(_))
    ));
}

#[rstest]
fn date_phrase_is_resolved_locally(wednesday: NaiveDateTime) {
    let fields = parse_model_response(COMPLETE_RESPONSE).expect("schema-valid response");
    let candidate = fields.into_candidate(&input("review the PR tomorrow evening"), wednesday);
    assert_eq!(candidate.due_date, Some(at(2024, 1, 11, 10, 0, 0)));
}

#[rstest]
#[case(r#"null"#)]
#[case(r#""null""#)]
#[case(r#""""#)]
fn absent_phrase_resolves_original_text(wednesday: NaiveDateTime, #[case] due: &str) {
    let raw = format!(
        r#"{{"title":"Call mom","description":"","priority":"Medium","status":"To Do","dueDate":{due}}}"#
    );
    let fields = parse_model_response(&raw).expect("schema-valid response");
    let candidate = fields.into_candidate(&input("call mom in 3 days at 5pm"), wednesday);

    assert_eq!(candidate.due_date, Some(at(2024, 1, 13, 10, 0, 0)));
    assert_eq!(candidate.clock_time, ClockTime::new(17, 0));
}

#[rstest]
fn iso_date_from_model_is_not_trusted(wednesday: NaiveDateTime) {
    let fields = parse_model_response(
        r#"{"title":"Call mom","description":"","priority":"Medium","status":"To Do","dueDate":"2024-01-11T10:00:00"}"#,
    )
    .expect("schema-valid response");
    let candidate = fields.into_candidate(&input("call mom tomorrow"), wednesday);
    assert_eq!(candidate.due_date, None);
}

#[rstest]
fn prompt_enumerates_schema() {
    let prompt = ModelExtractor::<MockCompletionClient>::prompt_for(&input("buy milk"));
    for expected in [
        "\"Low\", \"Medium\", \"High\", \"Urgent\"",
        "\"To Do\", \"In Progress\", \"Done\"",
        "\"dueDate\"",
        "Default priority is \"Medium\"",
        "Default status is \"To Do\"",
    ] {
        assert!(
            prompt.system.contains(expected),
            "system prompt should contain {expected}"
        );
    }
    assert_eq!(prompt.user, "Parse this task: \"buy milk\"");
}

#[rstest]
#[tokio::test]
async fn completion_failure_is_external_service_error() {
    let mut client = MockCompletionClient::new();
    client
        .expect_complete()
        .times(1)
        .returning(|_| Err(CompletionError::Http {
            status: 401,
            body: "invalid api key".to_owned(),
        }));
    let extractor = ModelExtractor::new(Arc::new(client));

    let err = extractor
        .extract(&input("buy milk"))
        .await
        .expect_err("completion should fail");
    assert_eq!(err.kind(), ModelFailureKind::ExternalService);
    assert!(matches!(
        err,
        ModelExtractionError::ExternalService(ref inner) if inner.is_auth()
    ));
}

#[rstest]
#[tokio::test]
async fn schema_failure_is_parse_error() {
    let mut client = MockCompletionClient::new();
    client
        .expect_complete()
        .returning(|_| Ok(r#"{"title":"Buy milk"}"#.to_owned()));
    let extractor = ModelExtractor::new(Arc::new(client));

    let err = extractor
        .extract(&input("buy milk"))
        .await
        .expect_err("schema check should fail");
    assert_eq!(err.kind(), ModelFailureKind::Parse);
}
