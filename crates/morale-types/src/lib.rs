//! Shared type definitions for the morale engine.
//!
//! This crate holds every type that crosses the engine boundary: the
//! identifiers owned by collaborating subsystems, modifier and anatomy enums,
//! item coverage metadata, decaying-bonus parameters, UI breakdown entries,
//! and the replayable event log. UI-facing types flow to `TypeScript` via
//! `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- String-keyed identifiers (traits, effects, stats, item types)
//! - [`enums`] -- Modifier types, body parts, thermal categories, trait flags
//! - [`structs`] -- Item profiles, bonus parameters, breakdown entries
//! - [`events`] -- Inbound events for deterministic replay

pub mod enums;
pub mod events;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{BodyPart, BonusSource, Fanciness, MoraleType, Side, ThermalCategory, TraitFlag};
pub use events::MoraleEvent;
pub use ids::{EffectId, ItemTypeId, StatId, TraitId};
pub use structs::{
    BonusSpec, DEFAULT_GRACE_MINUTES, DEFAULT_LIFETIME_MINUTES, ItemProfile, MoraleEntry,
};
