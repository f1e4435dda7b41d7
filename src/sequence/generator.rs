//! Core SequenceGenerator implementation.
//!
//! Sequences are built by a loop over a locally owned buffer, so stack usage
//! does not depend on the start value. Arithmetic is checked: a 3n+1 step
//! that would leave the i64 range fails with `CollatzError::Overflow`.

use tracing::{debug, trace};

use super::model::{CollatzSequence, GeneratorConfig, NonPositivePolicy};
use crate::error::{CollatzError, CollatzResult};

/// Generates Collatz sequences under a [`GeneratorConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceGenerator {
    config: GeneratorConfig,
}

impl SequenceGenerator {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Creates a generator with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator from an existing config.
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn with_policy(mut self, policy: NonPositivePolicy) -> Self {
        self.config.non_positive = policy;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.config.max_len = Some(max_len);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fails if a sequence already holding `len` values may not grow.
    fn check_len(&self, start: i64, len: usize) -> CollatzResult<()> {
        match self.config.max_len {
            Some(max_len) if len >= max_len => Err(CollatzError::length_exceeded(start, max_len)),
            _ => Ok(()),
        }
    }

    // =========================================================================
    // GENERATION
    // =========================================================================

    /// Generates the sequence from `n` down to 1.
    ///
    /// The loop stops at the first value `<= 1`. Start values `<= 0` are
    /// handled by the configured [`NonPositivePolicy`]. A config with
    /// `max_len == Some(0)` fails with `CollatzError::Config` for every start.
    pub fn generate(&self, n: i64) -> CollatzResult<CollatzSequence> {
        trace!(start = n, "generating collatz sequence");
        self.config.validate()?;

        if n <= 0 && self.config.non_positive == NonPositivePolicy::Reject {
            return Err(CollatzError::NonPositiveStart(n));
        }

        let mut values = Vec::new();
        let mut current = n;
        loop {
            self.check_len(n, values.len())?;
            values.push(current);

            if current <= 1 {
                break;
            }
            current = next(current)
                .ok_or_else(|| CollatzError::overflow(current, values.len()))?;
        }

        let seq = CollatzSequence::from_values(values);
        debug!(
            start = n,
            len = seq.len(),
            peak = seq.peak(),
            "collatz sequence generated"
        );
        Ok(seq)
    }
}

/// Generates the sequence for `n` with the default config.
///
/// # Example
///
/// ```rust
/// let seq = collatz::generate(6).unwrap();
/// assert_eq!(seq.as_slice(), &[6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
pub fn generate(n: i64) -> CollatzResult<CollatzSequence> {
    SequenceGenerator::new().generate(n)
}

/// Checks that `values` is a well-formed sequence from its first element.
///
/// Every value but the last must be greater than 1 and step to its successor
/// by the Collatz rule; the last value must be `<= 1`.
pub fn verify(values: &[i64]) -> CollatzResult<()> {
    let Some((&last, body)) = values.split_last() else {
        return Err(CollatzError::invalid_sequence(0, "sequence is empty"));
    };

    for (index, pair) in values.windows(2).enumerate() {
        let (value, successor) = (pair[0], pair[1]);
        if value <= 1 {
            return Err(CollatzError::invalid_sequence(
                index,
                format!("{} ends the sequence but more values follow", value),
            ));
        }
        match next(value) {
            Some(expected) if expected == successor => {}
            Some(expected) => {
                return Err(CollatzError::invalid_sequence(
                    index + 1,
                    format!("expected {} after {}, found {}", expected, value, successor),
                ));
            }
            None => return Err(CollatzError::overflow(value, index + 1)),
        }
    }

    if last > 1 {
        return Err(CollatzError::invalid_sequence(
            body.len(),
            format!("sequence ends at {} instead of 1", last),
        ));
    }
    Ok(())
}

/// One Collatz step. `None` if 3n+1 overflows.
fn next(value: i64) -> Option<i64> {
    if value % 2 == 0 {
        Some(value / 2)
    } else {
        value.checked_mul(3)?.checked_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(n: i64, seq: &CollatzSequence) {
        assert_eq!(seq.start(), n);
        assert_eq!(*seq.as_slice().last().unwrap(), 1);
        for pair in seq.as_slice().windows(2) {
            let expected = if pair[0] % 2 == 0 { pair[0] / 2 } else { 3 * pair[0] + 1 };
            assert_eq!(pair[1], expected, "bad step after {} in sequence for {}", pair[0], n);
        }
    }

    #[test]
    fn test_generate_one() {
        assert_eq!(generate(1).unwrap(), [1]);
    }

    #[test]
    fn test_generate_two() {
        assert_eq!(generate(2).unwrap(), [2, 1]);
    }

    #[test]
    fn test_generate_six() {
        assert_eq!(generate(6).unwrap(), [6, 3, 10, 5, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn test_generate_twenty_seven() {
        let seq = generate(27).unwrap();
        assert_eq!(seq.len(), 112);
        assert_eq!(seq.stopping_time(), 111);
        assert_eq!(&seq.as_slice()[..6], &[27, 82, 41, 124, 62, 31]);
        assert_eq!(seq.peak(), 9232);
        assert_well_formed(27, &seq);
    }

    #[test]
    fn test_first_and_last_for_small_inputs() {
        for n in 1..=2000 {
            let seq = generate(n).unwrap();
            assert_well_formed(n, &seq);
            verify(seq.as_slice()).unwrap();
        }
    }

    #[test]
    fn test_generate_is_repeatable() {
        let generator = SequenceGenerator::new();
        for n in [1, 7, 27, 97, 871] {
            assert_eq!(generator.generate(n).unwrap(), generator.generate(n).unwrap());
        }
    }

    #[test]
    fn test_long_sequence_is_stack_safe() {
        // 63728127 takes 949 steps and peaks near 9.66e11.
        let seq = generate(63_728_127).unwrap();
        assert_eq!(seq.stopping_time(), 949);
        assert_well_formed(63_728_127, &seq);
    }

    #[test]
    fn test_non_positive_rejected_by_default() {
        assert_eq!(generate(0), Err(CollatzError::NonPositiveStart(0)));
        assert_eq!(generate(-5), Err(CollatzError::NonPositiveStart(-5)));
        assert_eq!(generate(i64::MIN), Err(CollatzError::NonPositiveStart(i64::MIN)));
    }

    #[test]
    fn test_non_positive_terminates_when_configured() {
        let generator = SequenceGenerator::new().with_policy(NonPositivePolicy::Terminate);
        assert_eq!(generator.generate(0).unwrap(), [0]);
        assert_eq!(generator.generate(-7).unwrap(), [-7]);
        assert_eq!(generator.generate(6).unwrap(), generate(6).unwrap());
    }

    #[test]
    fn test_overflow_is_reported() {
        // Largest odd value whose 3n+1 still fits, and the first that does not.
        let fits: i64 = 3_074_457_345_618_258_601;
        assert_eq!(next(fits), Some(i64::MAX - 3));
        assert_eq!(next(fits + 2), None);

        let err = generate(i64::MAX).unwrap_err();
        assert_eq!(err, CollatzError::overflow(i64::MAX, 1));
    }

    #[test]
    fn test_max_len_enforced() {
        let exact = SequenceGenerator::new().with_max_len(9);
        assert_eq!(exact.generate(6).unwrap().len(), 9);

        let short = SequenceGenerator::new().with_max_len(8);
        assert_eq!(short.generate(6), Err(CollatzError::length_exceeded(6, 8)));

        assert_eq!(short.generate(1).unwrap(), [1]);
    }

    #[test]
    fn test_zero_max_len_rejected_by_builder() {
        let generator = SequenceGenerator::new().with_max_len(0);
        for n in [1, 6, 27] {
            assert!(matches!(generator.generate(n), Err(CollatzError::Config(_))));
        }

        let lenient = generator.with_policy(NonPositivePolicy::Terminate);
        assert!(matches!(lenient.generate(0), Err(CollatzError::Config(_))));
        assert!(matches!(lenient.generate(-3), Err(CollatzError::Config(_))));
    }

    #[test]
    fn test_terminate_respects_max_len() {
        let generator = SequenceGenerator::new()
            .with_policy(NonPositivePolicy::Terminate)
            .with_max_len(1);
        assert_eq!(generator.generate(0).unwrap(), [0]);
        assert_eq!(generator.generate(-4).unwrap(), [-4]);
        assert_eq!(generator.generate(1).unwrap(), [1]);
        assert_eq!(generator.generate(2), Err(CollatzError::length_exceeded(2, 1)));
    }

    #[test]
    fn test_from_config() {
        let config = GeneratorConfig::from_json(r#"{"non_positive": "terminate"}"#).unwrap();
        let generator = SequenceGenerator::from_config(config.clone());
        assert_eq!(generator.config(), &config);
        assert_eq!(generator.generate(-1).unwrap(), [-1]);
    }

    #[test]
    fn test_verify_accepts_valid() {
        verify(&[1]).unwrap();
        verify(&[0]).unwrap();
        verify(&[6, 3, 10, 5, 16, 8, 4, 2, 1]).unwrap();
    }

    #[test]
    fn test_verify_rejects_invalid() {
        assert_eq!(
            verify(&[]),
            Err(CollatzError::invalid_sequence(0, "sequence is empty"))
        );
        assert!(matches!(
            verify(&[6, 3, 11, 1]),
            Err(CollatzError::InvalidSequence { index: 2, .. })
        ));
        assert!(matches!(
            verify(&[4, 2]),
            Err(CollatzError::InvalidSequence { index: 1, .. })
        ));
        assert!(matches!(
            verify(&[2, 1, 4]),
            Err(CollatzError::InvalidSequence { index: 1, .. })
        ));
    }
}
