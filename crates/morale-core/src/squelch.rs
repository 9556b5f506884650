//! Pharmacological squelching.
//!
//! While the squelching effect is active (reported intensity above zero),
//! designated modifier types are scaled down by a fixed ratio. Nothing is
//! stored: the factor is applied to the final value of each type on every
//! query, so the full value returns as soon as the effect ends.

use std::collections::BTreeMap;

use morale_types::MoraleType;

use crate::config::Ratio;

/// Squelch factors per modifier type, plus the reported effect intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PharmacologicalSquelch {
    table: BTreeMap<MoraleType, Ratio>,
    intensity: u32,
}

impl PharmacologicalSquelch {
    /// An inactive squelch with the given factor table.
    pub const fn new(table: BTreeMap<MoraleType, Ratio>) -> Self {
        Self {
            table,
            intensity: 0,
        }
    }

    /// Record the effect intensity reported by the effect subsystem.
    pub fn set_intensity(&mut self, intensity: u32) {
        if (self.intensity == 0) != (intensity == 0) {
            tracing::debug!(intensity, "morale squelch toggled");
        }
        self.intensity = intensity;
    }

    /// Whether the effect is currently active.
    pub const fn is_active(&self) -> bool {
        self.intensity > 0
    }

    /// The value of `kind` after squelching.
    pub fn apply(&self, kind: MoraleType, value: i32) -> i32 {
        if !self.is_active() {
            return value;
        }
        self.table
            .get(&kind)
            .map_or(value, |ratio| ratio.apply(value))
    }
}
