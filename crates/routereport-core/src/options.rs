//! Report configuration.
//!
//! Options arrive once at initialization, typically as loose JSON from
//! the host's plugin configuration. Schema validation here is the single
//! fail-fast path in the whole system: everything downstream is a total
//! function over its inputs.

use serde::{Deserialize, Serialize};

/// The three independent report toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Add the auth column and compute the effective strategy.
    pub show_auth: bool,
    /// Add the scope column and compute the effective scope.
    pub show_scope: bool,
    /// Print the report to the output sink when the server starts.
    pub show_start: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_auth: false,
            show_scope: false,
            show_start: true,
        }
    }
}

impl RenderOptions {
    /// Validate a loose configuration value against the options schema.
    ///
    /// Unknown fields and wrong types are rejected; absent fields take
    /// their defaults.
    pub fn from_value(value: serde_json::Value) -> Result<Self, OptionsError> {
        serde_json::from_value(value).map_err(OptionsError)
    }
}

/// Configuration rejected by schema validation.
#[derive(Debug)]
pub struct OptionsError(serde_json::Error);

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid report options: {}", self.0)
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
