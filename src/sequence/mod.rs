//! Collatz sequence module.
//!
//! Provides the iterative sequence generator, its config and result types.

pub mod model;
pub mod generator;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use model::{CollatzSequence, GeneratorConfig, NonPositivePolicy};
pub use generator::{generate, verify, SequenceGenerator};

#[cfg(feature = "wasm")]
pub use wasm::JsSequenceGenerator;
