use super::error::EvalError;
use super::format::{format_number, round_significant, RESULT_PRECISION};
use super::parser::evaluate_tokens;
use super::percent::resolve_percent;
use super::tokens::{format_tokens, has_operator, normalize_glyphs, tokenize};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use tracing::debug;

/// Text a display shows after a failed commit.
pub const ERROR_MARKER: &str = "Error";

/// Outcome of a committed evaluation.
///
/// Serializes as `{"value": "2670"}` or `{"error": true}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalResult {
    Value(String),
    Error,
}

impl EvalResult {
    pub fn is_error(&self) -> bool {
        matches!(self, EvalResult::Error)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            EvalResult::Value(v) => Some(v),
            EvalResult::Error => None,
        }
    }
}

impl fmt::Display for EvalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalResult::Value(v) => write!(f, "{}", v),
            EvalResult::Error => write!(f, "{}", ERROR_MARKER),
        }
    }
}

impl Serialize for EvalResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            EvalResult::Value(v) => map.serialize_entry("value", v)?,
            EvalResult::Error => map.serialize_entry("error", &true)?,
        }
        map.end()
    }
}

/// Run the whole pipeline and keep the failure reason.
///
/// glyphs -> tokens -> percent resolution -> recursive descent -> 12 digits
pub fn evaluate_detailed(input: &str) -> Result<f64, EvalError> {
    let normalized = normalize_glyphs(input);
    let tokens = tokenize(&normalized)?;
    let resolved = resolve_percent(&tokens)?;
    debug!(input = %normalized, resolved = %format_tokens(&resolved), "evaluating");

    let value = round_significant(evaluate_tokens(&resolved)?, RESULT_PRECISION);
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

/// Evaluate a display string. Never fails: errors collapse into
/// [`EvalResult::Error`].
pub fn evaluate(input: &str) -> EvalResult {
    match evaluate_detailed(input) {
        Ok(value) => EvalResult::Value(format_number(value)),
        Err(e) => {
            debug!(input, error = %e, "expression rejected");
            EvalResult::Error
        }
    }
}

/// Best-effort result of a partially typed expression.
///
/// Returns an empty string when there is nothing new to show: empty input,
/// `0`, `Error`, no operator, a failed evaluation, or a result identical to
/// the input.
pub fn preview(display: &str) -> String {
    if display.is_empty() || display == "0" || display == ERROR_MARKER {
        return String::new();
    }
    if !has_operator(&normalize_glyphs(display)) {
        return String::new();
    }

    match evaluate_detailed(display) {
        Ok(value) => {
            let shown = format_number(value);
            if shown == display {
                String::new()
            } else {
                shown
            }
        }
        Err(_) => String::new(),
    }
}
