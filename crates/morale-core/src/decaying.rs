//! Duration-limited morale bonuses.
//!
//! Each modifier type has at most one live [`DecayingBonus`]. A second
//! contribution of the same type merges into the live entry and restarts its
//! clock. An entry keeps its full magnitude through the grace period, then
//! fades linearly to zero at the end of its lifetime:
//!
//! ```text
//! magnitude
//!   base |--------------.
//!        |               `.
//!        |                 `.
//!      0 +------------------+----> age
//!        0            grace  lifetime
//! ```
//!
//! All arithmetic saturates; nothing here can panic.

use std::collections::BTreeMap;

use morale_types::{BonusSpec, MoraleType};

/// One live decaying bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayingBonus {
    /// Magnitude at the start of the current lifetime.
    base: i32,
    /// Total lifetime in minutes.
    lifetime: u32,
    /// Minutes at full strength before decay begins.
    grace: u32,
    /// Minutes since the entry was created or last refreshed.
    age: u32,
}

impl DecayingBonus {
    const fn new(amount: i32, spec: &BonusSpec) -> Self {
        Self {
            base: amount,
            lifetime: spec.lifetime,
            grace: spec.grace,
            age: 0,
        }
    }

    /// Current magnitude after decay.
    ///
    /// Full strength while `age <= grace`; an entry whose grace period reaches
    /// its lifetime is cut off instantly, so the interpolation span is never
    /// zero.
    pub fn current(&self) -> i32 {
        if self.is_expired() {
            return 0;
        }
        if self.age <= self.grace {
            return self.base;
        }
        let remaining = i64::from(self.lifetime.saturating_sub(self.age));
        let span = i64::from(self.lifetime.saturating_sub(self.grace));
        let scaled = i64::from(self.base).saturating_mul(remaining);
        scaled
            .checked_div(span)
            .and_then(|value| i32::try_from(value).ok())
            .unwrap_or(0)
    }

    /// Minutes since the last refresh.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Whether the lifetime has run out.
    pub const fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

/// The set of live decaying bonuses for one character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecayingBonusStore {
    entries: BTreeMap<MoraleType, DecayingBonus>,
}

impl DecayingBonusStore {
    /// An empty store.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a contribution, merging into the live entry of the same type.
    ///
    /// A merge refreshes lifetime and grace to the new values, restarts the
    /// clock, and combines magnitudes from the entry's *current* value:
    /// capped merges clamp toward zero at the ceiling, uncapped merges are a
    /// plain sum. Returns the resulting magnitude.
    pub fn add(&mut self, kind: MoraleType, spec: &BonusSpec) -> i32 {
        let Some(existing) = self.entries.get_mut(&kind) else {
            self.entries.insert(kind, DecayingBonus::new(spec.amount, spec));
            tracing::debug!(kind = ?kind, amount = spec.amount, "decaying bonus created");
            return spec.amount;
        };

        let summed = existing.current().saturating_add(spec.amount);
        let merged = if spec.capped {
            clamp_to_ceiling(summed, spec.ceiling_value())
        } else {
            summed
        };
        *existing = DecayingBonus::new(merged, spec);
        tracing::debug!(
            kind = ?kind,
            amount = spec.amount,
            merged,
            capped = spec.capped,
            "decaying bonus merged"
        );
        merged
    }

    /// Current magnitude of the live entry, or 0.
    pub fn has(&self, kind: MoraleType) -> i32 {
        self.entries.get(&kind).map_or(0, DecayingBonus::current)
    }

    /// The live entry, if any.
    pub fn get(&self, kind: MoraleType) -> Option<&DecayingBonus> {
        self.entries.get(&kind)
    }

    /// Delete the live entry. Returns whether one existed.
    pub fn remove(&mut self, kind: MoraleType) -> bool {
        self.entries.remove(&kind).is_some()
    }

    /// Set every entry's age to `elapsed_minutes`, dropping the expired ones.
    ///
    /// The argument is the absolute number of minutes since each entry was
    /// created or last refreshed, not an increment over the previous call.
    pub fn decay(&mut self, elapsed_minutes: u32) {
        for bonus in self.entries.values_mut() {
            bonus.age = elapsed_minutes;
        }
        let before = self.entries.len();
        self.entries.retain(|_, bonus| !bonus.is_expired());
        let expired = before.saturating_sub(self.entries.len());
        if expired > 0 {
            tracing::debug!(elapsed_minutes, expired, "decaying bonuses expired");
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Live entries and their current magnitudes, ordered by type.
    pub fn iter(&self) -> impl Iterator<Item = (MoraleType, i32)> + '_ {
        self.entries.iter().map(|(kind, bonus)| (*kind, bonus.current()))
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Clamp toward zero at `ceiling`: `min` for a non-negative ceiling, `max`
/// for a negative one.
const fn clamp_to_ceiling(value: i32, ceiling: i32) -> i32 {
    if ceiling >= 0 {
        if value > ceiling { ceiling } else { value }
    } else if value < ceiling {
        ceiling
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_store() -> DecayingBonusStore {
        let mut store = DecayingBonusStore::new();
        store.add(MoraleType::FoodGood, &BonusSpec::new(20).ceiling(40).timing(20, 10));
        store.add(MoraleType::FoodBad, &BonusSpec::new(-10).ceiling(-20).timing(20, 10));
        store
    }

    #[test]
    fn add_creates_entry_with_amount() {
        let store = food_store();
        assert_eq!(store.has(MoraleType::FoodGood), 20);
        assert_eq!(store.has(MoraleType::FoodBad), -10);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn has_unknown_type_is_zero() {
        let store = food_store();
        assert_eq!(store.has(MoraleType::Music), 0);
    }

    #[test]
    fn capped_merge_clamps_at_ceiling() {
        let mut store = food_store();
        let good = store.add(
            MoraleType::FoodGood,
            &BonusSpec::new(5).ceiling(10).timing(20, 10),
        );
        let bad = store.add(
            MoraleType::FoodBad,
            &BonusSpec::new(-5).ceiling(-10).timing(20, 10),
        );
        assert_eq!(good, 10);
        assert_eq!(bad, -10);
    }

    #[test]
    fn capped_merge_below_ceiling_sums() {
        let mut store = food_store();
        store.add(
            MoraleType::FoodGood,
            &BonusSpec::new(5).ceiling(40).timing(20, 10),
        );
        assert_eq!(store.has(MoraleType::FoodGood), 25);
    }

    #[test]
    fn uncapped_merge_ignores_ceiling() {
        let mut store = food_store();
        store.add(
            MoraleType::FoodGood,
            &BonusSpec::new(10).ceiling(40).timing(20, 10).capped(false),
        );
        store.add(
            MoraleType::FoodBad,
            &BonusSpec::new(-10).ceiling(-20).timing(20, 10).capped(false),
        );
        assert_eq!(store.has(MoraleType::FoodGood), 30);
        assert_eq!(store.has(MoraleType::FoodBad), -20);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn grace_period_keeps_full_strength() {
        let mut store = food_store();
        store.decay(10);
        assert_eq!(store.has(MoraleType::FoodGood), 20);
        assert_eq!(store.has(MoraleType::FoodBad), -10);
    }

    #[test]
    fn decay_is_linear_after_grace() {
        let mut store = food_store();
        store.decay(15);
        assert_eq!(store.has(MoraleType::FoodGood), 10);
        assert_eq!(store.has(MoraleType::FoodBad), -5);

        let mut later = food_store();
        later.decay(18);
        assert_eq!(later.has(MoraleType::FoodGood), 4);
        assert_eq!(later.has(MoraleType::FoodBad), -2);
    }

    #[test]
    fn entries_expire_at_lifetime() {
        let mut store = food_store();
        store.decay(20);
        assert_eq!(store.has(MoraleType::FoodGood), 0);
        assert_eq!(store.has(MoraleType::FoodBad), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn decay_takes_absolute_minutes_since_refresh() {
        let mut store = food_store();
        store.decay(10);
        store.decay(15);
        assert_eq!(store.get(MoraleType::FoodGood).map(DecayingBonus::age), Some(15));
        assert_eq!(store.has(MoraleType::FoodGood), 10);
        assert_eq!(store.has(MoraleType::FoodBad), -5);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn merge_restarts_the_clock_from_current_value() {
        let mut store = food_store();
        store.decay(15);
        store.add(
            MoraleType::FoodGood,
            &BonusSpec::new(5).ceiling(40).timing(20, 10),
        );
        assert_eq!(store.has(MoraleType::FoodGood), 15);
        assert_eq!(store.get(MoraleType::FoodGood).map(DecayingBonus::age), Some(0));
        store.decay(10);
        assert_eq!(store.has(MoraleType::FoodGood), 15);
    }

    #[test]
    fn instant_cutoff_has_no_fade() {
        let mut store = DecayingBonusStore::new();
        store.add(MoraleType::Support, &BonusSpec::new(8).timing(5, 5));
        store.decay(4);
        assert_eq!(store.has(MoraleType::Support), 8);
        store.decay(5);
        assert_eq!(store.has(MoraleType::Support), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn grace_longer_than_lifetime_is_an_instant_cutoff() {
        let mut store = DecayingBonusStore::new();
        store.add(MoraleType::Support, &BonusSpec::new(8).timing(5, 50));
        store.decay(4);
        assert_eq!(store.has(MoraleType::Support), 8);
        store.decay(5);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_and_clear() {
        let mut store = food_store();
        assert!(store.remove(MoraleType::FoodGood));
        assert!(!store.remove(MoraleType::FoodGood));
        assert_eq!(store.has(MoraleType::FoodGood), 0);
        assert_eq!(store.has(MoraleType::FoodBad), -10);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn clamp_respects_ceiling_sign() {
        assert_eq!(clamp_to_ceiling(25, 10), 10);
        assert_eq!(clamp_to_ceiling(5, 10), 5);
        assert_eq!(clamp_to_ceiling(-15, -10), -10);
        assert_eq!(clamp_to_ceiling(-5, -10), -5);
    }
}
