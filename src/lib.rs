//! Taskwright: natural-language task capture.
//!
//! This crate turns free-form text, typed or transcribed from speech, into a
//! structured task draft with a title, description, priority, status, and an
//! optional due date.
//!
//! # Architecture
//!
//! Taskwright follows hexagonal architecture principles:
//!
//! - **Domain**: Pure extraction types and rules with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the completion service and the
//!   reference clock
//! - **Adapters**: Concrete implementations of ports (`OpenAI` client,
//!   pinned clock)
//!
//! # Modules
//!
//! - [`extraction`]: Validation, model and heuristic extraction, temporal
//!   resolution, and normalization

pub mod extraction;
