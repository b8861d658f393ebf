//! Engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::responsive::DEFAULT_DEBOUNCE;
use crate::style::stylesheet::DEFAULT_INDENT;

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Settings for the provider and resize watcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Resize debounce window in milliseconds.
    pub debounce_ms: u64,
    /// Spaces before each declaration in generated stylesheets.
    pub indent: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            indent: DEFAULT_INDENT,
        }
    }
}

impl EngineConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML. Missing fields keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(input)?)
    }

    /// Set the debounce window (builder).
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce_ms = window.as_millis() as u64;
        self
    }

    /// Set the declaration indent (builder).
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.debounce(), Duration::from_millis(32));
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn builders() {
        let config = EngineConfig::new()
            .with_debounce(Duration::from_millis(50))
            .with_indent(2);
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str("indent = 2").unwrap();
        assert_eq!(config, EngineConfig::new().with_indent(2));

        let config = EngineConfig::from_toml_str("debounceMs = 16").unwrap();
        assert_eq!(config.debounce(), Duration::from_millis(16));
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = EngineConfig::from_toml_str("indent = \"wide\"").unwrap_err();
        assert!(matches!(err, StyleError::Config(_)));
    }
}
