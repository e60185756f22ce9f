//! Port contracts for task extraction.
//!
//! Ports define infrastructure-agnostic interfaces used by extraction
//! services.

pub mod clock;
pub mod completion;

pub use clock::ReferenceClock;
pub use completion::{CompletionClient, CompletionError, CompletionPrompt, CompletionResult};
