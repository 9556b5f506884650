//! The morale engine facade.
//!
//! [`MoraleEngine`] owns every morale container of one character and exposes
//! the contract the game loop drives:
//!
//! - direct bonus management: [`add`](MoraleEngine::add),
//!   [`has`](MoraleEngine::has), [`remove`](MoraleEngine::remove),
//!   [`clear`](MoraleEngine::clear), [`set_permanent`](MoraleEngine::set_permanent)
//! - time: [`decay`](MoraleEngine::decay)
//! - event hooks: trait gain/loss, item wear/takeoff, stat and effect changes
//! - output: [`get_level`](MoraleEngine::get_level) and
//!   [`breakdown`](MoraleEngine::breakdown)
//!
//! Derived bonuses are recomputed per trigger category: trait changes
//! refresh every rule, equipment changes refresh the stylish and constraint
//! rules, pain changes refresh the pain rule.

use std::collections::BTreeSet;

use morale_types::{
    BodyPart, BonusSource, BonusSpec, EffectId, ItemProfile, MoraleEntry, MoraleEvent, MoraleType,
    StatId, ThermalCategory, TraitFlag, TraitId,
};

use crate::config::MoraleConfig;
use crate::decaying::DecayingBonusStore;
use crate::persistent::PersistentBonusTable;
use crate::rules;
use crate::squelch::PharmacologicalSquelch;
use crate::thermal::ThermalComfortTracker;

/// Morale state of a single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoraleEngine {
    config: MoraleConfig,
    decaying: DecayingBonusStore,
    persistent: PersistentBonusTable,
    thermal: ThermalComfortTracker,
    squelch: PharmacologicalSquelch,
    traits: BTreeSet<TraitId>,
    worn: Vec<ItemProfile>,
    perceived_pain: i32,
}

impl Default for MoraleEngine {
    fn default() -> Self {
        Self::new(MoraleConfig::default())
    }
}

impl MoraleEngine {
    /// A neutral engine using `config`.
    pub fn new(config: MoraleConfig) -> Self {
        Self {
            thermal: ThermalComfortTracker::new(&config.thermal),
            squelch: PharmacologicalSquelch::new(config.squelch.clone()),
            config,
            decaying: DecayingBonusStore::new(),
            persistent: PersistentBonusTable::new(),
            traits: BTreeSet::new(),
            worn: Vec::new(),
            perceived_pain: 0,
        }
    }

    /// Active configuration.
    pub const fn config(&self) -> &MoraleConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Direct bonus management
    // -----------------------------------------------------------------------

    /// Add or merge a decaying bonus. Returns the resulting magnitude.
    pub fn add(&mut self, kind: MoraleType, spec: BonusSpec) -> i32 {
        self.decaying.add(kind, &spec)
    }

    /// Current value of `kind` across every store, after squelching.
    ///
    /// Unknown or absent types read 0. Temperament scaling is not applied.
    pub fn has(&self, kind: MoraleType) -> i32 {
        let thermal = ThermalCategory::from_morale_type(kind)
            .map_or(0, |category| self.thermal.aggregate(category));
        let raw = self
            .decaying
            .has(kind)
            .saturating_add(self.persistent.get(kind))
            .saturating_add(thermal);
        self.squelch.apply(kind, raw)
    }

    /// Remove the decaying and persistent entries of `kind`.
    pub fn remove(&mut self, kind: MoraleType) {
        let decaying = self.decaying.remove(kind);
        let persistent = self.persistent.remove(kind);
        if decaying || persistent {
            tracing::debug!(kind = ?kind, "morale bonus removed");
        }
    }

    /// Drop every decaying and persistent entry.
    ///
    /// Thermal exposure is owned by the effect subsystem and survives. Held
    /// traits, worn items and perceived pain also survive, so the bonuses
    /// derived from them are recomputed at once.
    pub fn clear(&mut self) {
        self.decaying.clear();
        self.persistent.clear();
        self.refresh_trait_rules();
        tracing::debug!("morale cleared");
    }

    /// Overwrite a persistent bonus.
    pub fn set_permanent(&mut self, kind: MoraleType, value: i32) {
        self.persistent.set(kind, value);
    }

    /// Advance time: decaying bonuses age and thermal discomfort evolves.
    pub fn decay(&mut self, elapsed_minutes: u32) {
        self.decaying.decay(elapsed_minutes);
        self.thermal.advance(elapsed_minutes);
    }

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------

    /// Aggregate mood level.
    ///
    /// Every contribution is squelched, then scaled by the character's
    /// temperament, then summed. No global clamp is applied.
    pub fn get_level(&self) -> i32 {
        let temper = rules::temperament(&self.active_flags(), &self.config.temperament);
        self.breakdown()
            .iter()
            .fold(0_i32, |level, entry| level.saturating_add(temper.apply(entry.value)))
    }

    /// Every non-zero contribution, squelched but not temperament-scaled.
    pub fn breakdown(&self) -> Vec<MoraleEntry> {
        let decaying = self
            .decaying
            .iter()
            .map(|(kind, value)| (kind, value, BonusSource::Decaying));
        let persistent = self
            .persistent
            .iter()
            .map(|(kind, value)| (kind, value, BonusSource::Persistent));
        let thermal = ThermalCategory::ALL.into_iter().map(|category| {
            (
                category.morale_type(),
                self.thermal.aggregate(category),
                BonusSource::Thermal,
            )
        });

        decaying
            .chain(persistent)
            .chain(thermal)
            .map(|(kind, value, source)| MoraleEntry {
                kind,
                value: self.squelch.apply(kind, value),
                source,
            })
            .filter(|entry| entry.value != 0)
            .collect()
    }

    /// Thermal exposure state, for exposure-time queries.
    pub const fn thermal(&self) -> &ThermalComfortTracker {
        &self.thermal
    }

    /// Items currently worn, in wear order.
    pub fn worn_items(&self) -> &[ItemProfile] {
        &self.worn
    }

    /// Traits currently held.
    pub const fn traits(&self) -> &BTreeSet<TraitId> {
        &self.traits
    }

    // -----------------------------------------------------------------------
    // Event hooks
    // -----------------------------------------------------------------------

    /// The character gained a trait.
    pub fn on_mutation_gain(&mut self, trait_id: &TraitId) {
        if self.traits.insert(trait_id.clone()) {
            tracing::debug!(trait_id = %trait_id, "trait gained");
            self.refresh_trait_rules();
        }
    }

    /// The character lost a trait.
    pub fn on_mutation_loss(&mut self, trait_id: &TraitId) {
        if self.traits.remove(trait_id) {
            tracing::debug!(trait_id = %trait_id, "trait lost");
            self.refresh_trait_rules();
        }
    }

    /// The character put an item on.
    pub fn on_item_wear(&mut self, item: &ItemProfile) {
        self.worn.push(item.clone());
        self.refresh_equipment_rules(&self.active_flags());
    }

    /// The character took an item off. One matching instance is removed.
    pub fn on_item_takeoff(&mut self, item: &ItemProfile) {
        match self.worn.iter().position(|worn| worn == item) {
            Some(index) => {
                self.worn.remove(index);
                self.refresh_equipment_rules(&self.active_flags());
            }
            None => tracing::trace!(item = %item.id, "takeoff of an item not worn ignored"),
        }
    }

    /// A named stat changed. Only perceived pain matters to morale.
    pub fn on_stat_change(&mut self, stat: &StatId, value: i32) {
        if *stat == self.config.stats.pain {
            self.perceived_pain = value;
            self.refresh_pain_rule(&self.active_flags());
        } else {
            tracing::trace!(stat = %stat, value, "stat change ignored");
        }
    }

    /// An effect's intensity changed, optionally on one body part.
    pub fn on_effect_int_change(
        &mut self,
        effect: &EffectId,
        intensity: u32,
        region: Option<BodyPart>,
    ) {
        if *effect == self.config.effects.squelch {
            self.squelch.set_intensity(intensity);
            return;
        }

        let category = if *effect == self.config.effects.cold {
            ThermalCategory::Cold
        } else if *effect == self.config.effects.hot {
            ThermalCategory::Hot
        } else {
            tracing::trace!(effect = %effect, intensity, "effect change ignored");
            return;
        };

        match region {
            Some(region) => self.thermal.set_region_intensity(category, region, intensity),
            None => tracing::trace!(
                effect = %effect,
                intensity,
                "thermal effect without a body part ignored"
            ),
        }
    }

    /// Apply one recorded event.
    pub fn apply(&mut self, event: &MoraleEvent) {
        match event {
            MoraleEvent::Add { kind, bonus } => {
                self.add(*kind, *bonus);
            }
            MoraleEvent::Remove { kind } => self.remove(*kind),
            MoraleEvent::Clear => self.clear(),
            MoraleEvent::Decay { minutes } => self.decay(*minutes),
            MoraleEvent::SetPermanent { kind, value } => self.set_permanent(*kind, *value),
            MoraleEvent::MutationGain { trait_id } => self.on_mutation_gain(trait_id),
            MoraleEvent::MutationLoss { trait_id } => self.on_mutation_loss(trait_id),
            MoraleEvent::ItemWear { item } => self.on_item_wear(item),
            MoraleEvent::ItemTakeoff { item } => self.on_item_takeoff(item),
            MoraleEvent::StatChange { stat, value } => self.on_stat_change(stat, *value),
            MoraleEvent::EffectIntChange {
                effect,
                intensity,
                region,
            } => self.on_effect_int_change(effect, *intensity, *region),
        }
    }

    // -----------------------------------------------------------------------
    // Derived rules
    // -----------------------------------------------------------------------

    fn active_flags(&self) -> BTreeSet<TraitFlag> {
        rules::active_flags(&self.traits, &self.config)
    }

    fn refresh_trait_rules(&mut self) {
        let flags = self.active_flags();
        self.persistent.set(
            MoraleType::PermOptimist,
            rules::optimist_bonus(&flags, &self.config.fixed),
        );
        self.persistent.set(
            MoraleType::PermBadTemper,
            rules::bad_temper_bonus(&flags, &self.config.fixed),
        );
        self.refresh_equipment_rules(&flags);
        self.refresh_pain_rule(&flags);
    }

    fn refresh_equipment_rules(&mut self, flags: &BTreeSet<TraitFlag>) {
        self.persistent.set(
            MoraleType::PermFancy,
            rules::stylish_bonus(&self.worn, flags, &self.config.stylish),
        );
        self.persistent.set(
            MoraleType::PermConstrained,
            rules::constrained_penalty(&self.worn, flags, &self.config.constrained),
        );
    }

    fn refresh_pain_rule(&mut self, flags: &BTreeSet<TraitFlag>) {
        self.persistent.set(
            MoraleType::PermMasochist,
            rules::pain_bonus(self.perceived_pain, flags, &self.config.pain),
        );
    }
}

#[cfg(test)]
mod tests {
    use morale_types::Fanciness;

    use super::*;

    const OPTIMISTIC: TraitId = TraitId::from_static("OPTIMISTIC");
    const BADTEMPER: TraitId = TraitId::from_static("BADTEMPER");
    const STYLISH: TraitId = TraitId::from_static("STYLISH");
    const PROZAC: EffectId = EffectId::from_static("took_prozac");
    const COLD: EffectId = EffectId::from_static("cold");

    #[test]
    fn empty_engine_is_neutral() {
        let engine = MoraleEngine::default();
        assert_eq!(engine.get_level(), 0);
        assert!(engine.breakdown().is_empty());
    }

    #[test]
    fn has_sums_decaying_and_persistent() {
        let mut engine = MoraleEngine::default();
        engine.add(MoraleType::Music, BonusSpec::new(3));
        engine.set_permanent(MoraleType::Music, 2);
        assert_eq!(engine.has(MoraleType::Music), 5);
        assert_eq!(engine.get_level(), 5);
    }

    #[test]
    fn optimism_scales_level_but_not_has() {
        let mut engine = MoraleEngine::default();
        engine.on_mutation_gain(&OPTIMISTIC);
        assert_eq!(engine.has(MoraleType::PermOptimist), 4);
        assert_eq!(engine.get_level(), 5);

        engine.add(MoraleType::FoodBad, BonusSpec::new(-8));
        assert_eq!(engine.get_level(), -1);
    }

    #[test]
    fn bad_temper_scales_the_other_way() {
        let mut engine = MoraleEngine::default();
        engine.on_mutation_gain(&BADTEMPER);
        assert_eq!(engine.has(MoraleType::PermBadTemper), -4);
        assert_eq!(engine.get_level(), -5);

        engine.add(MoraleType::FoodGood, BonusSpec::new(8));
        assert_eq!(engine.get_level(), 1);
    }

    #[test]
    fn regaining_a_held_trait_changes_nothing() {
        let mut engine = MoraleEngine::default();
        engine.on_mutation_gain(&OPTIMISTIC);
        engine.on_mutation_gain(&OPTIMISTIC);
        engine.on_mutation_loss(&OPTIMISTIC);
        assert_eq!(engine.has(MoraleType::PermOptimist), 0);
        assert_eq!(engine.get_level(), 0);
    }

    #[test]
    fn squelch_applies_to_has_and_breakdown() {
        let mut engine = MoraleEngine::default();
        engine.add(MoraleType::KilledInnocent, BonusSpec::new(-100));
        engine.on_effect_int_change(&PROZAC, 2, None);
        assert_eq!(engine.has(MoraleType::KilledInnocent), -25);
        assert_eq!(
            engine.breakdown(),
            vec![MoraleEntry {
                kind: MoraleType::KilledInnocent,
                value: -25,
                source: BonusSource::Decaying,
            }]
        );
    }

    #[test]
    fn taking_off_an_item_not_worn_is_ignored() {
        let mut engine = MoraleEngine::default();
        engine.on_mutation_gain(&STYLISH);
        let tux = ItemProfile::new("tux".into())
            .covering([BodyPart::Torso])
            .with_fanciness(Fanciness::Fancy);
        engine.on_item_takeoff(&tux);
        assert!(engine.worn_items().is_empty());
        engine.on_item_wear(&tux);
        assert_eq!(engine.has(MoraleType::PermFancy), 6);
    }

    #[test]
    fn thermal_discomfort_shows_under_its_own_type() {
        let mut engine = MoraleEngine::default();
        engine.on_effect_int_change(&COLD, 3, Some(BodyPart::Torso));
        engine.decay(2);
        assert_eq!(engine.has(MoraleType::Cold), -4);
        assert_eq!(engine.thermal().exposure_minutes(ThermalCategory::Cold), 2);
        assert_eq!(
            engine.breakdown(),
            vec![MoraleEntry {
                kind: MoraleType::Cold,
                value: -4,
                source: BonusSource::Thermal,
            }]
        );
    }

    #[test]
    fn thermal_effect_without_region_is_ignored() {
        let mut engine = MoraleEngine::default();
        engine.on_effect_int_change(&COLD, 3, None);
        engine.decay(5);
        assert_eq!(engine.get_level(), 0);
    }

    #[test]
    fn unknown_identifiers_are_no_ops() {
        let mut engine = MoraleEngine::default();
        engine.on_effect_int_change(&EffectId::from("bleed"), 3, Some(BodyPart::ArmL));
        engine.on_stat_change(&StatId::from("hunger"), 400);
        engine.on_mutation_gain(&TraitId::from("PLANT"));
        engine.remove(MoraleType::Wet);
        assert_eq!(engine.has(MoraleType::Wet), 0);
        assert_eq!(engine.get_level(), 0);
    }

    #[test]
    fn clear_keeps_thermal_exposure() {
        let mut engine = MoraleEngine::default();
        engine.add(MoraleType::Game, BonusSpec::new(6));
        engine.on_effect_int_change(&COLD, 1, Some(BodyPart::Head));
        engine.decay(1);
        engine.clear();
        assert_eq!(engine.has(MoraleType::Game), 0);
        assert_eq!(engine.get_level(), -2);
    }

    #[test]
    fn apply_routes_events() {
        let mut engine = MoraleEngine::default();
        engine.apply(&MoraleEvent::Add {
            kind: MoraleType::FoodGood,
            bonus: BonusSpec::new(20).ceiling(40).timing(20, 10),
        });
        engine.apply(&MoraleEvent::Decay { minutes: 15 });
        assert_eq!(engine.has(MoraleType::FoodGood), 10);
        engine.apply(&MoraleEvent::MutationGain {
            trait_id: OPTIMISTIC,
        });
        assert_eq!(engine.get_level(), 17);
        engine.apply(&MoraleEvent::Clear);
        assert_eq!(engine.has(MoraleType::FoodGood), 0);
        assert_eq!(engine.get_level(), 5);
    }

    #[test]
    fn clear_rederives_bonuses_from_what_is_still_held() {
        let mut engine = MoraleEngine::default();
        engine.on_mutation_gain(&OPTIMISTIC);
        engine.on_mutation_gain(&STYLISH);
        let tux = ItemProfile::new("tux".into())
            .covering([BodyPart::Torso])
            .with_fanciness(Fanciness::Fancy);
        engine.on_item_wear(&tux);
        engine.set_permanent(MoraleType::Support, 3);
        engine.add(MoraleType::Music, BonusSpec::new(7));

        engine.clear();

        assert_eq!(engine.has(MoraleType::Support), 0);
        assert_eq!(engine.has(MoraleType::Music), 0);
        assert_eq!(engine.has(MoraleType::PermOptimist), 4);
        assert_eq!(engine.has(MoraleType::PermFancy), 6);
        // (4 + 6) scaled by 5/4 per contribution: 5 + 7
        assert_eq!(engine.get_level(), 12);
    }
}
