//! Form input coercion.

use crate::error::InputError;
use serde::Deserialize;

/// Raw query parameters submitted by the form.
///
/// Values stay as text so that fractional or malformed input can be
/// reported back to the user instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateParams {
    pub a: Option<String>,
    pub b: Option<String>,
}

impl EvaluateParams {
    /// Coerce both values into whole numbers.
    pub fn parse(&self) -> Result<(i64, i64), InputError> {
        let a = parse_whole_number("Number A", self.a.as_deref())?;
        let b = parse_whole_number("Number B", self.b.as_deref())?;
        Ok((a, b))
    }
}

/// Parse user input as a whole number.
///
/// Integer literals are taken as-is. Finite decimal input is truncated
/// toward zero, so `7.9` becomes `7` and `-2.5` becomes `-2`.
pub fn parse_whole_number(field: &'static str, raw: Option<&str>) -> Result<i64, InputError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(InputError::Empty { field });
    }

    if let Ok(n) = value.parse::<i64>() {
        return Ok(n);
    }

    // Plain decimals are truncated on the text so values near the i64
    // limits never round through f64.
    if let Some(n) = truncate_decimal(value) {
        return Ok(n);
    }

    let not_a_number = || InputError::NotANumber {
        field,
        value: value.to_string(),
    };

    let float = value.parse::<f64>().map_err(|_| not_a_number())?;
    if !float.is_finite() {
        return Err(not_a_number());
    }

    // i64::MIN is exactly representable; 2^63 is the first value past i64::MAX
    let truncated = float.trunc();
    if truncated < i64::MIN as f64 || truncated >= 9_223_372_036_854_775_808.0 {
        return Err(InputError::OutOfRange {
            field,
            value: value.to_string(),
        });
    }

    Ok(truncated as i64)
}

/// Whole part of a plain `[+-]digits.digits` literal, if it fits in `i64`.
fn truncate_decimal(value: &str) -> Option<i64> {
    let (whole, fraction) = value.split_once('.')?;
    if !fraction.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let digits = whole.trim_start_matches(['+', '-']);
    if digits.is_empty() && fraction.is_empty() {
        return None;
    }
    if digits.is_empty() {
        return (whole.len() <= 1).then_some(0);
    }
    whole.parse::<i64>().ok()
}
