//! Error types for the evaluator and the input adapters.

use thiserror::Error;

/// Errors raised while evaluating an input pair.
///
/// Results are computed in 64-bit signed integers; any value outside
/// `i64::MIN..=i64::MAX` is reported instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("{operation} of {a} and {b} overflows a 64-bit integer")]
    Overflow {
        operation: &'static str,
        a: i64,
        b: i64,
    },
}

/// Errors raised while coercing user-supplied text into a whole number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} is required")]
    Empty { field: &'static str },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} is outside the supported range: {value}")]
    OutOfRange { field: &'static str, value: String },
}
