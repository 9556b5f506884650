//! Replay scripts.
//!
//! A script is a YAML document holding an optional engine configuration and
//! the ordered list of [`MoraleEvent`]s to feed a fresh engine:
//!
//! ```yaml
//! config_file: tuning.yaml   # optional, relative to the script
//! events:
//!   - event: mutation_gain
//!     trait_id: STYLISH
//!   - event: decay
//!     minutes: 10
//! ```
//!
//! An inline `config:` mapping may be given instead of `config_file`.

use std::path::{Path, PathBuf};

use morale_core::{MoraleConfig, MoraleEngine};
use morale_types::{MoraleEntry, MoraleEvent};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ReplayError;

/// A recorded sequence of morale events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayScript {
    /// Inline engine configuration.
    #[serde(default)]
    pub config: Option<MoraleConfig>,
    /// Path to a YAML engine configuration, relative to the script.
    #[serde(default)]
    pub config_file: Option<PathBuf>,
    /// Events in the order they happened.
    #[serde(default)]
    pub events: Vec<MoraleEvent>,
}

impl ReplayScript {
    /// Load a script from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ReplayError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse a script from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ReplayError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Resolve the engine configuration. `base` is the directory the script
    /// was loaded from.
    pub fn resolve_config(&self, base: &Path) -> Result<MoraleConfig, ReplayError> {
        match (&self.config, &self.config_file) {
            (Some(inline), file) => {
                if file.is_some() {
                    warn!("script has both config and config_file; using the inline config");
                }
                Ok(inline.clone())
            }
            (None, Some(file)) => {
                let path = base.join(file);
                info!(path = %path.display(), "loading morale config");
                Ok(MoraleConfig::from_file(&path)?)
            }
            (None, None) => Ok(MoraleConfig::default()),
        }
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Mood level after each event, in script order.
    pub levels: Vec<i32>,
    /// Final mood level.
    pub level: i32,
    /// Final per-type contributions.
    pub breakdown: Vec<MoraleEntry>,
}

/// Feed every event of `events` to a fresh engine built from `config`.
pub fn replay(config: MoraleConfig, events: &[MoraleEvent]) -> ReplayReport {
    let mut engine = MoraleEngine::new(config);
    let mut levels = Vec::with_capacity(events.len());

    for (step, event) in events.iter().enumerate() {
        engine.apply(event);
        let level = engine.get_level();
        debug!(step, ?event, level, "event applied");
        levels.push(level);
    }

    ReplayReport {
        levels,
        level: engine.get_level(),
        breakdown: engine.breakdown(),
    }
}
