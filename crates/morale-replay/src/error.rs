//! Error types for the replay tool.
//!
//! Uses `thiserror` for typed errors covering script loading, engine
//! configuration, and report serialization.

/// Errors that can occur while replaying a script.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// No script path was given on the command line.
    #[error("usage: morale-replay <script.yaml>")]
    Usage,

    /// The script file could not be read.
    #[error("failed to read script {path}: {source}")]
    Io {
        /// Script path as given.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The script is not valid YAML or does not match the event schema.
    #[error("failed to parse script: {0}")]
    Script(String),

    /// The engine configuration referenced by the script failed to load.
    #[error("config error: {0}")]
    Config(#[from] morale_core::ConfigError),

    /// The report could not be serialized.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<serde_yml::Error> for ReplayError {
    fn from(err: serde_yml::Error) -> Self {
        Self::Script(err.to_string())
    }
}
