//! Adapter implementations for extraction ports.

pub mod clock;
pub mod openai;

pub use clock::FixedClock;
pub use openai::{OpenAiCompletionClient, OpenAiConfig};
