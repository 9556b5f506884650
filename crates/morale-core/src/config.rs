//! Configuration loading and typed config structures for the morale engine.
//!
//! Every tunable constant of the derived-bonus rules, the thermal tracker,
//! and the squelch table lives here. The defaults reproduce the stock game
//! behaviour; a YAML document can override any section:
//!
//! ```yaml
//! traits:
//!   OPTIMISTIC: [optimist]
//!   STYLISH: [stylish]
//! effects:
//!   squelch: took_prozac
//! stylish:
//!   ceiling: 20
//! squelch:
//!   killed_innocent: { numerator: 1, denominator: 4 }
//! ```
//!
//! Sections that are omitted keep their defaults.

use std::collections::BTreeMap;
use std::path::Path;

use morale_types::{EffectId, MoraleType, StatId, TraitFlag, TraitId};
use serde::Deserialize;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Ratio
// ---------------------------------------------------------------------------

/// An exact multiplicative factor applied with integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Ratio {
    /// Multiplier.
    pub numerator: i32,
    /// Divisor. A zero divisor leaves values unchanged.
    pub denominator: i32,
}

impl Ratio {
    /// The identity factor.
    pub const ONE: Self = Self::new(1, 1);

    /// Create a ratio.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Scale `value`, truncating toward zero and saturating at the `i32` range.
    pub fn apply(self, value: i32) -> i32 {
        let scaled = i64::from(value).saturating_mul(i64::from(self.numerator));
        let Some(quotient) = scaled.checked_div(i64::from(self.denominator)) else {
            return value;
        };
        i32::try_from(quotient).unwrap_or(if quotient < 0 { i32::MIN } else { i32::MAX })
    }

    /// The product of two factors.
    #[must_use]
    pub const fn compose(self, other: Self) -> Self {
        Self {
            numerator: self.numerator.saturating_mul(other.numerator),
            denominator: self.denominator.saturating_mul(other.denominator),
        }
    }
}

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

/// Top-level morale configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MoraleConfig {
    /// Trait table: which rule flags each trait switches on.
    pub traits: BTreeMap<TraitId, Vec<TraitFlag>>,
    /// Effect identifiers the engine reacts to.
    pub effects: EffectConfig,
    /// Stat identifiers the engine reacts to.
    pub stats: StatConfig,
    /// Fixed persistent bonuses granted by disposition traits.
    pub fixed: FixedTraitConfig,
    /// Level scaling for optimistic and bad-tempered characters.
    pub temperament: TemperamentConfig,
    /// Stylishness rule.
    pub stylish: StylishConfig,
    /// Physical-constraint rule for rooted and flowering characters.
    pub constrained: ConstrainedConfig,
    /// Pain-pleasure rule.
    pub pain: PainConfig,
    /// Thermal discomfort growth.
    pub thermal: ThermalConfig,
    /// Modifier types dampened while the squelching effect is active.
    pub squelch: BTreeMap<MoraleType, Ratio>,
}

impl Default for MoraleConfig {
    fn default() -> Self {
        Self {
            traits: default_trait_table(),
            effects: EffectConfig::default(),
            stats: StatConfig::default(),
            fixed: FixedTraitConfig::default(),
            temperament: TemperamentConfig::default(),
            stylish: StylishConfig::default(),
            constrained: ConstrainedConfig::default(),
            pain: PainConfig::default(),
            thermal: ThermalConfig::default(),
            squelch: default_squelch_table(),
        }
    }
}

impl MoraleConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

fn default_trait_table() -> BTreeMap<TraitId, Vec<TraitFlag>> {
    [
        ("OPTIMISTIC", TraitFlag::Optimist),
        ("BADTEMPER", TraitFlag::BadTemper),
        ("STYLISH", TraitFlag::Stylish),
        ("MASOCHIST", TraitFlag::Masochist),
        ("MASOCHIST_MED", TraitFlag::Cenobite),
        ("CENOBITE", TraitFlag::Cenobite),
        ("FLOWERS", TraitFlag::Flowers),
        ("ROOTS", TraitFlag::Roots),
        ("ROOTS2", TraitFlag::Roots),
        ("ROOTS3", TraitFlag::Roots),
    ]
    .into_iter()
    .map(|(key, flag)| (TraitId::from_static(key), vec![flag]))
    .collect()
}

fn default_squelch_table() -> BTreeMap<MoraleType, Ratio> {
    BTreeMap::from([
        (MoraleType::KilledInnocent, Ratio::new(1, 4)),
        (MoraleType::PermMasochist, Ratio::new(1, 3)),
    ])
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Effect identifiers routed to the thermal tracker and the squelch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Per-body-part cold exposure.
    pub cold: EffectId,
    /// Per-body-part heat exposure.
    pub hot: EffectId,
    /// Effect whose non-zero intensity activates the squelch table.
    pub squelch: EffectId,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            cold: EffectId::from_static("cold"),
            hot: EffectId::from_static("hot"),
            squelch: EffectId::from_static("took_prozac"),
        }
    }
}

/// Stat identifiers the engine listens to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatConfig {
    /// Perceived pain, feeding the pain-pleasure rule.
    pub pain: StatId,
}

impl Default for StatConfig {
    fn default() -> Self {
        Self {
            pain: StatId::from_static("perceived_pain"),
        }
    }
}

/// Fixed persistent bonuses for disposition traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixedTraitConfig {
    /// `PermOptimist` value while optimistic (default: 4).
    pub optimist: i32,
    /// `PermBadTemper` value while bad-tempered (default: -4).
    pub bad_temper: i32,
}

impl Default for FixedTraitConfig {
    fn default() -> Self {
        Self {
            optimist: 4,
            bad_temper: -4,
        }
    }
}

/// Scaling applied to positive and negative contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Temper {
    /// Factor for positive contributions.
    pub positive: Ratio,
    /// Factor for negative contributions.
    pub negative: Ratio,
}

impl Temper {
    /// No scaling.
    pub const NEUTRAL: Self = Self {
        positive: Ratio::ONE,
        negative: Ratio::ONE,
    };

    /// Scale one contribution according to its sign.
    pub fn apply(self, value: i32) -> i32 {
        if value >= 0 {
            self.positive.apply(value)
        } else {
            self.negative.apply(value)
        }
    }

    /// Both tempers applied in sequence.
    #[must_use]
    pub const fn compose(self, other: Self) -> Self {
        Self {
            positive: self.positive.compose(other.positive),
            negative: self.negative.compose(other.negative),
        }
    }
}

/// Temperament scaling per disposition flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemperamentConfig {
    /// Optimists weigh the good more and the bad less (default: 5/4, 3/4).
    pub optimist: Temper,
    /// Bad-tempered characters do the opposite (default: 3/4, 5/4).
    pub bad_temper: Temper,
}

impl Default for TemperamentConfig {
    fn default() -> Self {
        Self {
            optimist: Temper {
                positive: Ratio::new(5, 4),
                negative: Ratio::new(3, 4),
            },
            bad_temper: Temper {
                positive: Ratio::new(3, 4),
                negative: Ratio::new(5, 4),
            },
        }
    }
}

/// Stylishness rule constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StylishConfig {
    /// Maximum `PermFancy` value (default: 20).
    pub ceiling: i32,
    /// Bonus per distinct super-fancy item type worn (default: 2).
    pub super_fancy_bonus: i32,
    /// Bonus per fancy accessory covering no body part (default: 2).
    pub accessory_bonus: i32,
    /// Accessories counted at most (default: 3).
    pub accessory_limit: u32,
}

impl Default for StylishConfig {
    fn default() -> Self {
        Self {
            ceiling: 20,
            super_fancy_bonus: 2,
            accessory_bonus: 2,
            accessory_limit: 3,
        }
    }
}

/// Physical-constraint rule constants. Penalties are magnitudes; the stored
/// bonus is their negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConstrainedConfig {
    /// Penalty when flowers are covered by headwear (default: 10).
    pub flowers_penalty: i32,
    /// Penalty per side whose leg or foot is covered (default: 5).
    pub roots_penalty_per_side: i32,
    /// Maximum total penalty (default: 10).
    pub ceiling: i32,
}

impl Default for ConstrainedConfig {
    fn default() -> Self {
        Self {
            flowers_penalty: 10,
            roots_penalty_per_side: 5,
            ceiling: 10,
        }
    }
}

/// Pain-pleasure rule constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PainConfig {
    /// Conversion from perceived pain to bonus (default: 2/5).
    pub ratio: Ratio,
    /// Ceiling for the ordinary masochist (default: 25).
    pub masochist_ceiling: i32,
}

impl Default for PainConfig {
    fn default() -> Self {
        Self {
            ratio: Ratio::new(2, 5),
            masochist_ceiling: 25,
        }
    }
}

/// Thermal discomfort constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThermalConfig {
    /// Discomfort magnitude gained per minute of exposure (default: 2).
    pub growth_per_minute: i32,
    /// Discomfort ceiling per point of the worst region's intensity
    /// (default: 10).
    pub ceiling_per_intensity: i32,
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            growth_per_minute: 2,
            ceiling_per_intensity: 10,
        }
    }
}
