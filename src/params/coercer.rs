//! Type coercion of raw parameter strings.
//!
//! # Responsibilities
//! - Pass text through untouched (no trimming, no escaping)
//! - Parse integers as base-10 `i32` with an optional sign
//! - Apply the endpoint's integer policy on failure
//!
//! # Design Decisions
//! - `Strict` is used where the value is bound to a required typed parameter;
//!   it ignores whitespace and treats an empty value as missing
//! - `Fallback(n)` replaces both unparsable and absent values with `n`
//! - Fallback values differ per endpoint (0 and 10) and are kept as declared

use serde::Serialize;
use std::fmt;

use crate::params::ParamError;

/// What to do with an integer that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerPolicy {
    /// Fail the request with `TypeMismatch`.
    Strict,
    /// Substitute the given value and continue.
    Fallback(i32),
}

/// Target type of a coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Text,
    Integer(IntegerPolicy),
}

/// A coerced parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Text(String),
    Integer(i32),
    Null,
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Text(s) => f.write_str(s),
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::Null => f.write_str("null"),
        }
    }
}

/// Outcome of a coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coerced {
    pub value: TypedValue,
    /// Set when an integer fallback replaced the raw value.
    pub fell_back: bool,
}

impl Coerced {
    fn exact(value: TypedValue) -> Self {
        Self { value, fell_back: false }
    }
}

/// Remove every whitespace character, as typed binding of required numbers does.
fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Coerce `raw` (already extracted) into `target`.
pub fn coerce(name: &'static str, raw: Option<&str>, target: Target) -> Result<Coerced, ParamError> {
    match target {
        Target::Text => Ok(Coerced::exact(
            raw.map_or(TypedValue::Null, |s| TypedValue::Text(s.to_owned())),
        )),
        Target::Integer(IntegerPolicy::Strict) => match raw {
            None | Some("") => Err(ParamError::MissingParameter { name }),
            Some(value) => strip_whitespace(value)
                .parse::<i32>()
                .map(|n| Coerced::exact(TypedValue::Integer(n)))
                .map_err(|_| ParamError::TypeMismatch {
                    name,
                    value: value.to_owned(),
                }),
        },
        Target::Integer(IntegerPolicy::Fallback(fallback)) => match raw.map(str::parse::<i32>) {
            Some(Ok(n)) => Ok(Coerced::exact(TypedValue::Integer(n))),
            _ => {
                tracing::warn!(
                    parameter = name,
                    raw = ?raw,
                    fallback,
                    "Integer coercion failed, using fallback"
                );
                crate::observability::metrics::record_coercion_fallback(name);
                Ok(Coerced {
                    value: TypedValue::Integer(fallback),
                    fell_back: true,
                })
            }
        },
    }
}
