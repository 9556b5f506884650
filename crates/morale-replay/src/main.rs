//! Morale replay entry point.
//!
//! Reads a YAML script of recorded morale events, feeds it to a fresh
//! [`MoraleEngine`](morale_core::MoraleEngine), and prints the resulting
//! mood as JSON on stdout:
//!
//! ```text
//! script.yaml --> MoraleEngine::apply (per event) --> { levels, level, breakdown }
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`; `RUST_LOG=debug` shows the
//! level after every event.

mod error;
mod script;

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ReplayError;
use crate::script::{ReplayScript, replay};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if no script is given, the script or its configuration
/// fails to load, or the report cannot be serialized.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(ReplayError::Usage)?;

    info!(script = %path.display(), "morale-replay starting");

    let script = ReplayScript::from_file(&path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let config = script.resolve_config(base)?;

    let report = replay(config, &script.events);
    info!(
        events = script.events.len(),
        level = report.level,
        "replay complete"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
