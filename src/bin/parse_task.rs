//! Parses one task from the command line and prints the diagnostic result.
//!
//! Usage:
//!
//! ```text
//! parse_task [--now YYYY-MM-DDTHH:MM:SS] <text>...
//! ```
//!
//! Remaining arguments are joined with single spaces to form the task text.
//! The completion service is configured from `OPENAI_API_KEY`,
//! `OPENAI_BASE_URL`, and `OPENAI_MODEL`; without a key the rule-based
//! extractor is used. `--now` pins the reference instant so relative dates
//! are reproducible. Output is the diagnostic JSON on stdout; logs go to
//! stderr and honour `RUST_LOG`.

use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use taskwright::extraction::{
    adapters::{FixedClock, OpenAiCompletionClient},
    domain::InputError,
    ports::ReferenceClock,
    services::{DiagnosticParse, TaskParser},
};
use thiserror::Error;
use tokio::runtime::Builder;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running the command.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("invalid --now value: {0}")]
    InvalidNow(#[source] chrono::ParseError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Parsed command-line arguments.
#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    now: Option<FixedClock>,
    text: String,
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let args = parse_args(std::env::args().skip(1))?;
    let runtime = build_runtime()?;
    let client = Arc::new(OpenAiCompletionClient::from_env());
    if !client.has_credentials() {
        tracing::warn!("OPENAI_API_KEY is not set; using rule-based extraction only");
    }

    let diagnostic = match args.now {
        Some(clock) => runtime.block_on(run(client, Arc::new(clock), &args.text)),
        None => runtime.block_on(run(client, Arc::new(DefaultClock), &args.text)),
    }?;
    write_output(&mut io::stdout().lock(), &diagnostic)?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn build_runtime() -> Result<tokio::runtime::Runtime, CliError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)
}

async fn run<C>(
    client: Arc<OpenAiCompletionClient>,
    clock: Arc<C>,
    text: &str,
) -> Result<DiagnosticParse, CliError>
where
    C: ReferenceClock,
{
    let parser = TaskParser::new(client, clock);
    parser.test(text).await.map_err(CliError::from)
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs, CliError> {
    let mut now = None;
    let mut words = Vec::new();
    let mut remaining = args;
    while let Some(arg) = remaining.next() {
        if arg == "--now" {
            let value = remaining
                .next()
                .ok_or_else(|| CliError::InvalidArgs("--now requires a value".to_owned()))?;
            now = Some(FixedClock::parse(&value).map_err(CliError::InvalidNow)?);
        } else if let Some(value) = arg.strip_prefix("--now=") {
            now = Some(FixedClock::parse(value).map_err(CliError::InvalidNow)?);
        } else {
            words.push(arg);
        }
    }

    if words.is_empty() {
        return Err(CliError::InvalidArgs(
            "usage: parse_task [--now YYYY-MM-DDTHH:MM:SS] <text>...".to_owned(),
        ));
    }
    Ok(CliArgs {
        now,
        text: words.join(" "),
    })
}

fn write_output(writer: &mut impl Write, diagnostic: &DiagnosticParse) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, diagnostic).map_err(CliError::Encode)?;
    writeln!(writer).map_err(CliError::Write)
}
