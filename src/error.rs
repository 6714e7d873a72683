//! Error types for the request metric collector.
//!
//! The collector itself never surfaces these: tag transforms that fail are
//! resolved to the `"UNKNOWN"` sentinel. Only configuration loading hands
//! them back to the caller.

/// Request metrics error types
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    // Tag transform errors
    #[error("invalid endpoint uri '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },

    #[error("endpoint uri has no host: {0}")]
    MissingHost(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl MetricsError {
    /// Whether this error came from extracting a tag value.
    ///
    /// These are swallowed by the collector and replaced with the sentinel.
    pub fn is_tag_transform(&self) -> bool {
        matches!(
            self,
            MetricsError::InvalidEndpoint { .. } | MetricsError::MissingHost(_)
        )
    }
}

/// Result type alias for request metrics operations
pub type Result<T> = std::result::Result<T, MetricsError>;
