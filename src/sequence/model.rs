//! Data models for Collatz sequence generation.
//!
//! These types derive serde so the generator config can be loaded from JSON
//! and a generated sequence can be handed to JSON consumers as a plain array.

use serde::{Deserialize, Serialize};

use crate::error::{CollatzError, CollatzResult};

// =============================================================================
// SEQUENCE
// =============================================================================

/// An owned Collatz sequence, in visitation order.
///
/// Values produced by the generator are never empty and end at the first
/// value that is `<= 1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CollatzSequence {
    values: Vec<i64>,
}

impl CollatzSequence {
    pub(crate) fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Returns the starting value.
    ///
    /// Generated sequences always hold at least one value; a deserialized
    /// empty sequence reports 0.
    pub fn start(&self) -> i64 {
        self.values.first().copied().unwrap_or(0)
    }

    /// Returns the number of values, including the start and the final 1.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of steps taken to reach the end.
    pub fn stopping_time(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Largest value visited.
    pub fn peak(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Borrows the values in visitation order.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Iterates the values in visitation order.
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }

    /// Unwraps into the underlying vector.
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }

    /// Converts to a JSON array of integers.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.values.iter().map(|&v| v.into()).collect())
    }
}

impl IntoIterator for CollatzSequence {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a CollatzSequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl PartialEq<[i64]> for CollatzSequence {
    fn eq(&self, other: &[i64]) -> bool {
        self.values == other
    }
}

impl<const N: usize> PartialEq<[i64; N]> for CollatzSequence {
    fn eq(&self, other: &[i64; N]) -> bool {
        self.values == other
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// What to do with a start value of zero or less.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NonPositivePolicy {
    /// Fail with `CollatzError::NonPositiveStart`.
    #[default]
    Reject,
    /// Apply the `<= 1` stop rule: the sequence is just `[n]`.
    Terminate,
}

/// Generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Handling of start values `<= 0`.
    pub non_positive: NonPositivePolicy,

    /// Upper bound on the number of values in a sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
}

impl GeneratorConfig {
    /// Creates the default config: reject non-positive starts, no length cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CollatzResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a length cap of 0.
    pub fn validate(&self) -> CollatzResult<()> {
        if self.max_len == Some(0) {
            return Err(CollatzError::config("max_len must be at least 1"));
        }
        Ok(())
    }

    pub fn with_policy(mut self, policy: NonPositivePolicy) -> Self {
        self.non_positive = policy;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}
