//! Validated raw task input.

use super::InputError;
use serde::{Deserialize, Serialize};

/// Size limits applied to raw task input.
///
/// # Examples
///
/// ```
/// use taskwright::extraction::domain::InputLimits;
///
/// let limits = InputLimits::default();
/// assert_eq!(limits.min_chars, 3);
/// assert_eq!(limits.max_chars, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Minimum length of the trimmed input, in characters.
    pub min_chars: usize,
    /// Maximum length of the raw input, in characters.
    pub max_chars: usize,
}

impl InputLimits {
    /// Creates limits with explicit bounds.
    #[must_use]
    pub const fn new(min_chars: usize, max_chars: usize) -> Self {
        Self {
            min_chars,
            max_chars,
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self::new(3, 1000)
    }
}

/// Trimmed input text that passed size validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput(String);

impl TaskInput {
    /// Validates raw text against `limits` and returns the trimmed text.
    ///
    /// The minimum is checked against the trimmed text and the maximum
    /// against the raw text, so surrounding whitespace counts towards the
    /// upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooShort`] or [`InputError::TooLong`].
    pub fn validate(raw: &str, limits: InputLimits) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        let trimmed_len = trimmed.chars().count();
        if trimmed_len < limits.min_chars {
            return Err(InputError::TooShort {
                actual: trimmed_len,
                min: limits.min_chars,
            });
        }

        let raw_len = raw.chars().count();
        if raw_len > limits.max_chars {
            return Err(InputError::TooLong {
                actual: raw_len,
                max: limits.max_chars,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the validated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
