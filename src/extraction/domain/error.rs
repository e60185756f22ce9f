//! Error types for task input validation and enum parsing.

use thiserror::Error;

/// Errors returned when raw input is rejected before extraction.
///
/// These are the only failures that leave [`crate::extraction::services::TaskParser`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputError {
    /// The trimmed input is shorter than the configured minimum.
    #[error("task input is too short or empty: {actual} characters, minimum is {min}")]
    TooShort {
        /// Trimmed length in characters.
        actual: usize,
        /// Configured minimum.
        min: usize,
    },

    /// The input exceeds the configured maximum.
    #[error("task input is too long: {actual} characters, maximum is {max}")]
    TooLong {
        /// Raw length in characters.
        actual: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Error returned while strictly parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while strictly parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);
