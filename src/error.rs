//! Error types for Collatz sequence generation.

use thiserror::Error;

/// Result type alias for sequence operations.
pub type CollatzResult<T> = Result<T, CollatzError>;

/// Errors that can occur while generating or checking a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollatzError {
    /// Start value is zero or negative and the generator rejects those.
    #[error("Start value must be positive, got {0}")]
    NonPositiveStart(i64),

    /// The 3n+1 step does not fit in an i64.
    #[error("Overflow at step {step}: 3 * {value} + 1 exceeds i64::MAX")]
    Overflow { value: i64, step: usize },

    /// The sequence grew past the configured length cap.
    #[error("Sequence starting at {start} exceeds the maximum length of {max_len}")]
    LengthExceeded { start: i64, max_len: usize },

    /// A slice does not follow the Collatz rule.
    #[error("Invalid sequence at index {index}: {reason}")]
    InvalidSequence { index: usize, reason: String },

    /// Generator configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl CollatzError {
    /// Creates an Overflow error.
    pub fn overflow(value: i64, step: usize) -> Self {
        Self::Overflow { value, step }
    }

    /// Creates a LengthExceeded error.
    pub fn length_exceeded(start: i64, max_len: usize) -> Self {
        Self::LengthExceeded { start, max_len }
    }

    /// Creates an InvalidSequence error.
    pub fn invalid_sequence(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSequence {
            index,
            reason: reason.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for CollatzError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
