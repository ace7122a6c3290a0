//! Parameter presence resolution.
//!
//! # Responsibilities
//! - Return the raw value when the parameter is present
//! - Fail with `MissingParameter` when a required parameter is absent
//! - Substitute the declared default (or nothing) for optional parameters
//!
//! An empty value is replaced by the declared default when one exists.
//! Without a default it stays present as `""`. No other content checks happen here.

use crate::params::{ParamError, ParameterSpec, QueryParams};

/// Result of presence resolution for one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Value as it arrived on the wire, if it arrived at all.
    pub raw: Option<String>,
    /// Value handed to coercion: the raw value or the declared default.
    pub value: Option<String>,
    /// Set when the declared default replaced an absent or empty value.
    pub defaulted: bool,
}

/// Resolve presence of `spec` in `params`.
pub fn extract(params: &QueryParams, spec: &ParameterSpec) -> Result<Extracted, ParamError> {
    let raw = params.get(spec.name);

    match (raw, spec.default_value) {
        (Some(value), Some(default)) if value.is_empty() => Ok(Extracted {
            raw: Some(String::new()),
            value: Some(default.to_owned()),
            defaulted: true,
        }),
        (Some(value), _) => Ok(Extracted {
            raw: Some(value.to_owned()),
            value: Some(value.to_owned()),
            defaulted: false,
        }),
        (None, _) if spec.required => {
            tracing::debug!(parameter = spec.name, "Required parameter missing");
            Err(ParamError::MissingParameter { name: spec.name })
        }
        (None, default) => Ok(Extracted {
            raw: None,
            value: default.map(str::to_owned),
            defaulted: default.is_some(),
        }),
    }
}
