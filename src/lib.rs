//! Collatz - sequence generator for the 3n+1 problem.
//!
//! Starting from `n`, the generator repeatedly applies `n / 2` (even) or
//! `3n + 1` (odd) and returns every visited value, ending at 1:
//!
//! - **Iterative**: no recursion, so long sequences cannot exhaust the stack
//! - **Checked arithmetic**: values are `i64` and overflow is reported as an error
//! - **Explicit policy for `n <= 0`**: rejected by default, or returned as `[n]`
//!
//! # Example
//!
//! ```rust
//! use collatz::{generate, NonPositivePolicy, SequenceGenerator};
//!
//! let seq = generate(27).unwrap();
//! assert_eq!(seq.len(), 112);
//! assert_eq!(seq.peak(), 9232);
//!
//! // Carry the `<= 1` stop rule through to non-positive starts
//! let lenient = SequenceGenerator::new().with_policy(NonPositivePolicy::Terminate);
//! assert_eq!(lenient.generate(0).unwrap().as_slice(), &[0]);
//! ```

pub mod error;

// Sequence module
pub mod sequence;

// Re-exports for convenience
pub use error::{CollatzError, CollatzResult};
pub use sequence::{
    generate, verify, CollatzSequence, GeneratorConfig, NonPositivePolicy, SequenceGenerator,
};

#[cfg(feature = "wasm")]
pub use sequence::JsSequenceGenerator;
