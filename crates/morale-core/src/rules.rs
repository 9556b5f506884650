//! Derived bonus rules.
//!
//! Stateless translators from character state (held traits, worn items,
//! perceived pain) to persistent bonus values. Each rule recomputes its value
//! from the *whole* current state, so repeated wear/takeoff events can never
//! drift.

use std::collections::BTreeSet;

use morale_types::{BodyPart, Fanciness, ItemProfile, ItemTypeId, TraitFlag, TraitId};

use crate::config::{
    ConstrainedConfig, FixedTraitConfig, MoraleConfig, PainConfig, StylishConfig, Temper,
    TemperamentConfig,
};

/// Style points per region covered by fancy clothing. Paired regions are
/// listed once and count if either side is covered.
const FANCY_REGION_WEIGHTS: [(BodyPart, i32); 7] = [
    (BodyPart::Torso, 6),
    (BodyPart::Head, 3),
    (BodyPart::Eyes, 2),
    (BodyPart::Mouth, 2),
    (BodyPart::LegL, 2),
    (BodyPart::FootL, 1),
    (BodyPart::HandL, 1),
];

/// Leg and foot of each side; roots suffer per side.
const ROOT_SIDES: [(BodyPart, BodyPart); 2] = [
    (BodyPart::LegL, BodyPart::FootL),
    (BodyPart::LegR, BodyPart::FootR),
];

/// Union of the flags switched on by the held traits. Unknown traits add
/// nothing.
pub fn active_flags(traits: &BTreeSet<TraitId>, config: &MoraleConfig) -> BTreeSet<TraitFlag> {
    traits
        .iter()
        .filter_map(|trait_id| config.traits.get(trait_id))
        .flatten()
        .copied()
        .collect()
}

/// `PermOptimist` value.
pub fn optimist_bonus(flags: &BTreeSet<TraitFlag>, config: &FixedTraitConfig) -> i32 {
    if flags.contains(&TraitFlag::Optimist) {
        config.optimist
    } else {
        0
    }
}

/// `PermBadTemper` value.
pub fn bad_temper_bonus(flags: &BTreeSet<TraitFlag>, config: &FixedTraitConfig) -> i32 {
    if flags.contains(&TraitFlag::BadTemper) {
        config.bad_temper
    } else {
        0
    }
}

/// Combined level scaling for the held disposition flags.
pub fn temperament(flags: &BTreeSet<TraitFlag>, config: &TemperamentConfig) -> Temper {
    let mut temper = Temper::NEUTRAL;
    if flags.contains(&TraitFlag::Optimist) {
        temper = temper.compose(config.optimist);
    }
    if flags.contains(&TraitFlag::BadTemper) {
        temper = temper.compose(config.bad_temper);
    }
    temper
}

/// Every region covered by at least one worn item matching `filter`.
fn covered_regions(worn: &[ItemProfile], filter: impl Fn(&ItemProfile) -> bool) -> BTreeSet<BodyPart> {
    worn.iter()
        .filter(|item| filter(*item))
        .flat_map(ItemProfile::covered_parts)
        .collect()
}

fn covers_either_side(covered: &BTreeSet<BodyPart>, part: BodyPart) -> bool {
    covered.contains(&part) || covered.contains(&part.opposite())
}

/// `PermFancy` value for a character wearing `worn`.
///
/// Zero unless the stylish flag is held. Otherwise the sum of:
/// - a bonus per distinct super-fancy item type,
/// - a bonus per fancy accessory (items covering nothing), up to a limit,
/// - region weights for every region covered by fancy clothing,
///
/// capped at the configured ceiling.
pub fn stylish_bonus(
    worn: &[ItemProfile],
    flags: &BTreeSet<TraitFlag>,
    config: &StylishConfig,
) -> i32 {
    if !flags.contains(&TraitFlag::Stylish) {
        return 0;
    }

    let super_fancy_types: BTreeSet<&ItemTypeId> = worn
        .iter()
        .filter(|item| item.fanciness == Fanciness::SuperFancy)
        .map(|item| &item.id)
        .collect();
    let accessories = worn
        .iter()
        .filter(|item| item.fanciness.is_fancy() && item.is_accessory())
        .count();
    let counted_accessories = accessories.min(usize::try_from(config.accessory_limit).unwrap_or(0));
    let fancy_regions = covered_regions(worn, |item| item.fanciness.is_fancy());

    let region_points = FANCY_REGION_WEIGHTS
        .iter()
        .filter(|(part, _)| covers_either_side(&fancy_regions, *part))
        .fold(0_i32, |total, (_, weight)| total.saturating_add(*weight));

    let total = config
        .super_fancy_bonus
        .saturating_mul(count_as_i32(super_fancy_types.len()))
        .saturating_add(config.accessory_bonus.saturating_mul(count_as_i32(counted_accessories)))
        .saturating_add(region_points);
    total.min(config.ceiling)
}

/// `PermConstrained` value for a character wearing `worn`.
///
/// Flowers suffer when the head is covered; roots suffer for each side whose
/// leg or foot is covered. The penalty is capped and returned negated.
pub fn constrained_penalty(
    worn: &[ItemProfile],
    flags: &BTreeSet<TraitFlag>,
    config: &ConstrainedConfig,
) -> i32 {
    let has_flowers = flags.contains(&TraitFlag::Flowers);
    let has_roots = flags.contains(&TraitFlag::Roots);
    if !has_flowers && !has_roots {
        return 0;
    }

    let covered = covered_regions(worn, |_| true);
    let mut penalty: i32 = 0;
    if has_flowers && covered.contains(&BodyPart::Head) {
        penalty = penalty.saturating_add(config.flowers_penalty);
    }
    if has_roots {
        for (leg, foot) in ROOT_SIDES {
            if covered.contains(&leg) || covered.contains(&foot) {
                penalty = penalty.saturating_add(config.roots_penalty_per_side);
            }
        }
    }
    penalty.min(config.ceiling).saturating_neg()
}

/// `PermMasochist` value at the given perceived pain.
///
/// The cenobite flag lifts the masochist ceiling; without either flag the
/// bonus is zero.
pub fn pain_bonus(pain: i32, flags: &BTreeSet<TraitFlag>, config: &PainConfig) -> i32 {
    let bonus = config.ratio.apply(pain.max(0));
    if flags.contains(&TraitFlag::Cenobite) {
        bonus
    } else if flags.contains(&TraitFlag::Masochist) {
        bonus.min(config.masochist_ceiling)
    } else {
        0
    }
}

fn count_as_i32(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
