//! Parameter resolution errors.

use thiserror::Error;

/// Failure to resolve a request parameter.
///
/// Integer fallback is deliberately absent here: it is a policy, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Required request parameter '{name}' is not present")]
    MissingParameter { name: &'static str },

    #[error("Request parameter '{name}' has value '{value}' which is not a valid integer")]
    TypeMismatch { name: &'static str, value: String },
}

impl ParamError {
    /// Stable label used in metrics and error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamError::MissingParameter { .. } => "missing_parameter",
            ParamError::TypeMismatch { .. } => "type_mismatch",
        }
    }
}
