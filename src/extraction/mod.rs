//! Text-to-task extraction.
//!
//! Turns free-form text into a [`domain::TaskDraft`]. A completion service
//! is tried first; any failure there falls back to deterministic keyword
//! rules. Both paths resolve dates through [`temporal`] and finish in the
//! [`normalizer`]. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod heuristic;
pub mod normalizer;
pub mod ports;
pub mod services;
pub mod temporal;

#[cfg(test)]
mod tests;
