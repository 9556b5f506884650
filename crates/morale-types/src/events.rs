//! Inbound morale events.
//!
//! Every state change the engine reacts to can be expressed as a
//! [`MoraleEvent`]. Because the engine is deterministic, a recorded sequence
//! of events replays to the same mood level.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BodyPart, MoraleType};
use crate::ids::{EffectId, StatId, TraitId};
use crate::structs::{BonusSpec, ItemProfile};

/// A single call against the engine's public contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "event", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum MoraleEvent {
    /// Add or merge a decaying bonus.
    Add {
        /// Modifier type.
        kind: MoraleType,
        /// Contribution parameters.
        bonus: BonusSpec,
    },
    /// Remove the decaying and persistent entries of a type.
    Remove {
        /// Modifier type.
        kind: MoraleType,
    },
    /// Drop every decaying and persistent entry.
    Clear,
    /// Advance time.
    Decay {
        /// Elapsed minutes.
        minutes: u32,
    },
    /// Overwrite a persistent bonus.
    SetPermanent {
        /// Modifier type.
        kind: MoraleType,
        /// New value.
        value: i32,
    },
    /// The character gained a trait.
    MutationGain {
        /// Trait gained.
        trait_id: TraitId,
    },
    /// The character lost a trait.
    MutationLoss {
        /// Trait lost.
        trait_id: TraitId,
    },
    /// The character put an item on.
    ItemWear {
        /// Item worn.
        item: ItemProfile,
    },
    /// The character took an item off.
    ItemTakeoff {
        /// Item removed.
        item: ItemProfile,
    },
    /// A named stat changed.
    StatChange {
        /// Stat identifier.
        stat: StatId,
        /// New value.
        value: i32,
    },
    /// An effect's intensity changed, optionally on one body part.
    EffectIntChange {
        /// Effect identifier.
        effect: EffectId,
        /// New intensity; 0 means the effect ended.
        intensity: u32,
        /// Body part the effect applies to, if any.
        #[serde(default)]
        region: Option<BodyPart>,
    },
}
