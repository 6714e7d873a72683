//! Collector configuration.
//!
//! Loaded from TOML, typically a `[request_metrics]`-style table embedded
//! in the host application's own config file:
//!
//! ```toml
//! enabled = true
//! namespace = "aws.request."
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::telemetry::NAMESPACE;
use crate::{MetricsError, Result};

/// Collector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    /// Global switch, combined with the per-request flag (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Prefix for every metric name (default: "aws.request.").
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            namespace: default_namespace(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_namespace() -> String {
    NAMESPACE.to_string()
}

impl CollectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch collection on or off for every request.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the metric name prefix.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(MetricsError::Config("namespace must not be empty".into()));
        }
        if self.namespace.chars().any(char::is_whitespace) {
            return Err(MetricsError::Config(format!(
                "namespace must not contain whitespace: {:?}",
                self.namespace
            )));
        }
        Ok(())
    }
}
