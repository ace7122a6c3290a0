//! Parameter declarations.

/// Declared contract for one request parameter.
///
/// Specs are immutable and are normally declared as `const` items next to the
/// handler that uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub required: bool,
    pub default_value: Option<&'static str>,
}

impl ParameterSpec {
    /// A parameter that must be present on the request.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            default_value: None,
        }
    }

    /// An optional parameter with no default; absent resolves to null.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            default_value: None,
        }
    }

    /// An optional parameter that falls back to `default` when absent.
    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            required: false,
            default_value: Some(default),
        }
    }
}
