//! WASM bindings for sequence module.
//!
//! JavaScript numbers are doubles, so start values must be integers within
//! `Number.MAX_SAFE_INTEGER`. Sequences are returned as plain arrays; a value
//! past the safe range fails serialization instead of losing precision.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use crate::error::CollatzError;
use super::generator::SequenceGenerator;
use super::model::NonPositivePolicy;

/// Largest integer a JavaScript number represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new())
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<CollatzError> for JsValue {
    fn from(err: CollatzError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: CollatzError| JsValue::from(e))
    };
}

/// Converts a JS number to a start value. `None` for NaN, infinities,
/// fractions and magnitudes past `MAX_SAFE_INTEGER`.
fn safe_start(n: f64) -> Option<i64> {
    if n.fract() != 0.0 || n.abs() > MAX_SAFE_INTEGER {
        return None;
    }
    Some(n as i64)
}

fn to_start(n: f64) -> Result<i64, JsValue> {
    safe_start(n).ok_or_else(|| {
        JsValue::from_str(&format!("Start value must be a safe integer, got {}", n))
    })
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around SequenceGenerator.
#[wasm_bindgen]
pub struct JsSequenceGenerator {
    inner: SequenceGenerator,
}

#[wasm_bindgen]
impl JsSequenceGenerator {
    /// Creates a generator that rejects non-positive starts.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const gen = new JsSequenceGenerator();
    /// gen.generate(6); // [6, 3, 10, 5, 16, 8, 4, 2, 1]
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSequenceGenerator {
        JsSequenceGenerator {
            inner: SequenceGenerator::new(),
        }
    }

    /// Caps the number of values in a generated sequence. A cap of 0 makes
    /// every `generate` call throw.
    #[wasm_bindgen(js_name = withMaxLen)]
    pub fn with_max_len(self, max_len: usize) -> JsSequenceGenerator {
        JsSequenceGenerator {
            inner: self.inner.with_max_len(max_len),
        }
    }

    /// Returns `[n]` for non-positive starts instead of throwing.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const gen = new JsSequenceGenerator().lenient();
    /// gen.generate(0); // [0]
    /// ```
    pub fn lenient(self) -> JsSequenceGenerator {
        JsSequenceGenerator {
            inner: self.inner.with_policy(NonPositivePolicy::Terminate),
        }
    }

    /// Generates the sequence for `n` as an array of numbers.
    pub fn generate(&self, n: f64) -> Result<JsValue, JsValue> {
        let seq = js_result!(self.inner.generate(to_start(n)?))?;
        Ok(to_js_value(&seq)?)
    }
}

impl Default for JsSequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the sequence for `n` with the default config.
///
/// # Example (JavaScript)
/// ```js
/// collatz(27).length; // 112
/// ```
#[wasm_bindgen]
pub fn collatz(n: f64) -> Result<JsValue, JsValue> {
    JsSequenceGenerator::new().generate(n)
}
