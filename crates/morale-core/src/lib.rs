//! Per-character morale engine.
//!
//! The engine aggregates many independent mood modifiers into one signed
//! mood level and reacts to character-state changes (traits, worn items,
//! pain, effects) by creating, refreshing, or retiring modifiers. It is pure
//! logic: single-threaded, synchronous, and deterministic. Time only moves
//! when the caller invokes [`MoraleEngine::decay`].
//!
//! # Modules
//!
//! - [`config`] -- Tunable constants and YAML loading ([`MoraleConfig`])
//! - [`decaying`] -- Duration-limited bonuses ([`DecayingBonusStore`])
//! - [`engine`] -- The facade ([`MoraleEngine`])
//! - [`error`] -- Error types ([`ConfigError`])
//! - [`persistent`] -- Indefinite bonuses ([`PersistentBonusTable`])
//! - [`rules`] -- Derived bonuses from traits, equipment, and pain
//! - [`squelch`] -- Pharmacological dampening ([`PharmacologicalSquelch`])
//! - [`thermal`] -- Cold and heat discomfort ([`ThermalComfortTracker`])

pub mod config;
pub mod decaying;
pub mod engine;
pub mod error;
pub mod persistent;
pub mod rules;
pub mod squelch;
pub mod thermal;

// Re-export primary types at crate root for convenience.
pub use config::{MoraleConfig, Ratio, Temper};
pub use decaying::{DecayingBonus, DecayingBonusStore};
pub use engine::MoraleEngine;
pub use error::ConfigError;
pub use persistent::PersistentBonusTable;
pub use squelch::PharmacologicalSquelch;
pub use thermal::ThermalComfortTracker;
