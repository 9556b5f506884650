//! Core structs exchanged between the morale engine and its collaborators.
//!
//! - [`ItemProfile`] -- the read-only slice of item-catalog metadata the
//!   engine consumes on wear/takeoff.
//! - [`BonusSpec`] -- parameters of a decaying bonus contribution.
//! - [`MoraleEntry`] -- one line of the per-type breakdown shown by UIs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BodyPart, BonusSource, Fanciness, MoraleType, Side};
use crate::ids::ItemTypeId;

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// Coverage and appearance metadata of a worn item.
///
/// `covers` lists every region the item type can cover. A sided item (a leg
/// pouch strapped to one thigh) restricts paired regions to `side`, which is
/// how partial coverage is expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ItemProfile {
    /// Item type in the external catalog.
    pub id: ItemTypeId,
    /// Regions the item type covers.
    #[serde(default)]
    pub covers: BTreeSet<BodyPart>,
    /// Side the item is worn on, for single-sided items.
    #[serde(default)]
    pub side: Option<Side>,
    /// Appearance grade.
    #[serde(default)]
    pub fanciness: Fanciness,
}

impl ItemProfile {
    /// A plain item covering nothing.
    pub const fn new(id: ItemTypeId) -> Self {
        Self {
            id,
            covers: BTreeSet::new(),
            side: None,
            fanciness: Fanciness::Plain,
        }
    }

    /// Add covered regions.
    #[must_use]
    pub fn covering(mut self, parts: impl IntoIterator<Item = BodyPart>) -> Self {
        self.covers.extend(parts);
        self
    }

    /// Restrict paired regions to one side.
    #[must_use]
    pub fn on_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the appearance grade.
    #[must_use]
    pub fn with_fanciness(mut self, fanciness: Fanciness) -> Self {
        self.fanciness = fanciness;
        self
    }

    /// Regions actually covered once the side restriction is applied.
    pub fn covered_parts(&self) -> impl Iterator<Item = BodyPart> + '_ {
        self.covers.iter().copied().filter(|part| match (self.side, part.side()) {
            (Some(worn), Some(part_side)) => worn == part_side,
            _ => true,
        })
    }

    /// Whether the item covers no region at all (jewellery, watches).
    pub fn is_accessory(&self) -> bool {
        self.covered_parts().next().is_none()
    }
}

// ---------------------------------------------------------------------------
// Decaying bonus parameters
// ---------------------------------------------------------------------------

/// Default total lifetime of a decaying bonus, in minutes.
pub const DEFAULT_LIFETIME_MINUTES: u32 = 60;

/// Default grace period before a decaying bonus starts to fade, in minutes.
pub const DEFAULT_GRACE_MINUTES: u32 = 30;

/// Parameters of one decaying bonus contribution.
///
/// When `ceiling` is omitted, the contribution's own amount is its ceiling,
/// so repeating the same capped contribution never exceeds a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BonusSpec {
    /// Signed magnitude to add.
    pub amount: i32,
    /// Signed magnitude a capped merge may not exceed.
    #[serde(default)]
    pub ceiling: Option<i32>,
    /// Total lifetime in minutes.
    #[serde(default = "default_lifetime")]
    pub lifetime: u32,
    /// Minutes at full strength before linear decay begins.
    #[serde(default = "default_grace")]
    pub grace: u32,
    /// Whether a merge with a live entry is clamped at the ceiling.
    #[serde(default = "default_capped")]
    pub capped: bool,
}

const fn default_lifetime() -> u32 {
    DEFAULT_LIFETIME_MINUTES
}

const fn default_grace() -> u32 {
    DEFAULT_GRACE_MINUTES
}

const fn default_capped() -> bool {
    true
}

impl BonusSpec {
    /// A capped contribution with default timing.
    pub const fn new(amount: i32) -> Self {
        Self {
            amount,
            ceiling: None,
            lifetime: DEFAULT_LIFETIME_MINUTES,
            grace: DEFAULT_GRACE_MINUTES,
            capped: true,
        }
    }

    /// Set the merge ceiling.
    #[must_use]
    pub const fn ceiling(mut self, ceiling: i32) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Set lifetime and grace period, in minutes.
    #[must_use]
    pub const fn timing(mut self, lifetime: u32, grace: u32) -> Self {
        self.lifetime = lifetime;
        self.grace = grace;
        self
    }

    /// Choose capped or uncapped merging.
    #[must_use]
    pub const fn capped(mut self, capped: bool) -> Self {
        self.capped = capped;
        self
    }

    /// The effective ceiling.
    pub fn ceiling_value(&self) -> i32 {
        self.ceiling.unwrap_or(self.amount)
    }
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// One contribution to the mood level, as shown in a UI breakdown.
///
/// `value` has pharmacological squelching applied but not the temperament
/// scaling, which only affects the aggregate level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MoraleEntry {
    /// Modifier type.
    pub kind: MoraleType,
    /// Signed contribution.
    pub value: i32,
    /// Store the contribution lives in.
    pub source: BonusSource,
}
