//! Request parameter resolution.
//!
//! # Data Flow
//! ```text
//! query string
//!     → query.rs (decode into QueryParams, first occurrence wins)
//!     → extractor.rs (presence / required / default policy)
//!     → coercer.rs (raw string → TypedValue, strict or best-effort)
//!     → ResolvedParameter (request-local)
//!     → shaper (template model or serialized body)
//! ```
//!
//! # Design Decisions
//! - ParameterSpec values are declared once per endpoint as constants
//! - Resolution is a single synchronous pass with no retained state
//! - Missing required parameters fail before any payload is built
//! - Integer fallback is not an error: it is logged and counted

pub mod coercer;
pub mod error;
pub mod extractor;
pub mod query;
pub mod spec;

pub use coercer::{coerce, Coerced, IntegerPolicy, Target, TypedValue};
pub use error::ParamError;
pub use extractor::{extract, Extracted};
pub use query::QueryParams;
pub use spec::ParameterSpec;

use serde::Serialize;

/// A parameter after extraction and coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParameter {
    pub name: &'static str,
    /// Value as it arrived on the wire, if it arrived at all.
    pub raw_value: Option<String>,
    pub typed_value: TypedValue,
    /// True when the declared default or an integer fallback was substituted.
    pub used_default: bool,
}

impl ResolvedParameter {
    /// Text content, or `None` for integers and nulls.
    pub fn as_text(&self) -> Option<&str> {
        match &self.typed_value {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self.typed_value {
            TypedValue::Integer(n) => Some(n),
            _ => None,
        }
    }
}

/// Resolve one parameter: extract it from the query, then coerce it to `target`.
pub fn resolve(
    params: &QueryParams,
    spec: &ParameterSpec,
    target: Target,
) -> Result<ResolvedParameter, ParamError> {
    let extracted = extract(params, spec).inspect_err(|e| {
        crate::observability::metrics::record_resolution_failure(e.kind());
    })?;

    let coerced = coerce(spec.name, extracted.value.as_deref(), target).inspect_err(|e| {
        crate::observability::metrics::record_resolution_failure(e.kind());
    })?;

    Ok(ResolvedParameter {
        name: spec.name,
        raw_value: extracted.raw,
        typed_value: coerced.value,
        used_default: extracted.defaulted || coerced.fell_back,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTO: ParameterSpec = ParameterSpec::with_default("texto", "Sin parámetros...");
    const NUMERO: ParameterSpec = ParameterSpec::required("numero");
    const SALUDO: ParameterSpec = ParameterSpec::optional("saludo");

    #[test]
    fn test_optional_absent_yields_declared_default() {
        let params = QueryParams::parse("");
        let resolved = resolve(&params, &TEXTO, Target::Text).unwrap();
        assert_eq!(resolved.as_text(), Some("Sin parámetros..."));
        assert!(resolved.used_default);
        assert_eq!(resolved.raw_value, None);
    }

    #[test]
    fn test_supplied_value_wins_over_default() {
        let params = QueryParams::parse("texto=Hola%20que%20tal");
        let resolved = resolve(&params, &TEXTO, Target::Text).unwrap();
        assert_eq!(resolved.as_text(), Some("Hola que tal"));
        assert!(!resolved.used_default);
    }

    #[test]
    fn test_required_absent_fails() {
        let params = QueryParams::parse("saludo=hi");
        let err = resolve(&params, &NUMERO, Target::Integer(IntegerPolicy::Strict)).unwrap_err();
        assert_eq!(err, ParamError::MissingParameter { name: "numero" });
    }

    #[test]
    fn test_required_integer_mismatch_fails() {
        let params = QueryParams::parse("numero=abc");
        let err = resolve(&params, &NUMERO, Target::Integer(IntegerPolicy::Strict)).unwrap_err();
        assert!(matches!(err, ParamError::TypeMismatch { name: "numero", .. }));
    }

    #[test]
    fn test_fallback_integer_marks_default() {
        let params = QueryParams::parse("numero=xyz");
        let spec = ParameterSpec::optional("numero");
        let resolved = resolve(&params, &spec, Target::Integer(IntegerPolicy::Fallback(0))).unwrap();
        assert_eq!(resolved.as_integer(), Some(0));
        assert_eq!(resolved.raw_value.as_deref(), Some("xyz"));
        assert!(resolved.used_default);
    }

    #[test]
    fn test_empty_value_resolves_to_default() {
        let params = QueryParams::parse("texto=");
        let resolved = resolve(&params, &TEXTO, Target::Text).unwrap();
        assert_eq!(resolved.as_text(), Some("Sin parámetros..."));
        assert_eq!(resolved.raw_value.as_deref(), Some(""));
        assert!(resolved.used_default);
    }

    #[test]
    fn test_optional_without_default_is_null() {
        let params = QueryParams::parse("");
        let resolved = resolve(&params, &SALUDO, Target::Text).unwrap();
        assert_eq!(resolved.typed_value, TypedValue::Null);
        assert!(!resolved.used_default);
    }
}
