//! Error types for the morale-core crate.
//!
//! Morale operations themselves are total: unknown identifiers are ignored
//! and integer arithmetic saturates. The only fallible edge is loading
//! configuration.

/// Errors that can occur when loading a [`MoraleConfig`](crate::config::MoraleConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read morale config: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse morale config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}
