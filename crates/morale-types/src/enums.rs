//! Enumeration types for the morale engine.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Modifier types
// ---------------------------------------------------------------------------

/// What a morale bonus represents.
///
/// The identifier carries no numeric meaning. Ordering only exists so that
/// stores keyed by type iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum MoraleType {
    // --- Temporary ---
    /// Ate something tasty.
    FoodGood,
    /// Ate something warm.
    FoodHot,
    /// Ate something disgusting.
    FoodBad,
    /// Listened to music.
    Music,
    /// Played a game.
    Game,
    /// Read an enjoyable book.
    Book,
    /// Resting somewhere comfortable.
    Comfy,
    /// Clothes are soaked.
    Wet,
    /// Killed somebody who did not deserve it.
    KilledInnocent,
    /// Killed a friend.
    KilledFriend,
    /// Butchered a corpse.
    Butcher,
    /// Watched something burn.
    Pyromania,
    /// Received emotional support.
    Support,

    // --- Thermal ---
    /// Discomfort from cold exposure.
    Cold,
    /// Discomfort from heat exposure.
    Hot,

    // --- Permanent ---
    /// Optimistic disposition.
    PermOptimist,
    /// Short temper.
    PermBadTemper,
    /// Wearing fancy clothes while caring about appearance.
    PermFancy,
    /// Pleasure derived from pain.
    PermMasochist,
    /// Worn items obstruct roots or flowers.
    PermConstrained,
}

// ---------------------------------------------------------------------------
// Anatomy
// ---------------------------------------------------------------------------

/// Side of a paired body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Side {
    /// Left side.
    Left,
    /// Right side.
    Right,
}

/// Anatomical region an item can cover or an effect can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum BodyPart {
    /// Torso.
    Torso,
    /// Head.
    Head,
    /// Eyes.
    Eyes,
    /// Mouth.
    Mouth,
    /// Left arm.
    ArmL,
    /// Right arm.
    ArmR,
    /// Left hand.
    HandL,
    /// Right hand.
    HandR,
    /// Left leg.
    LegL,
    /// Right leg.
    LegR,
    /// Left foot.
    FootL,
    /// Right foot.
    FootR,
}

impl BodyPart {
    /// Every body part, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Torso,
        Self::Head,
        Self::Eyes,
        Self::Mouth,
        Self::ArmL,
        Self::ArmR,
        Self::HandL,
        Self::HandR,
        Self::LegL,
        Self::LegR,
        Self::FootL,
        Self::FootR,
    ];

    /// The side this part sits on, or `None` for unpaired parts.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::ArmL | Self::HandL | Self::LegL | Self::FootL => Some(Side::Left),
            Self::ArmR | Self::HandR | Self::LegR | Self::FootR => Some(Side::Right),
            Self::Torso | Self::Head | Self::Eyes | Self::Mouth => None,
        }
    }

    /// The mirrored part on the other side. Unpaired parts map to themselves.
    pub const fn opposite(self) -> Self {
        match self {
            Self::ArmL => Self::ArmR,
            Self::ArmR => Self::ArmL,
            Self::HandL => Self::HandR,
            Self::HandR => Self::HandL,
            Self::LegL => Self::LegR,
            Self::LegR => Self::LegL,
            Self::FootL => Self::FootR,
            Self::FootR => Self::FootL,
            Self::Torso | Self::Head | Self::Eyes | Self::Mouth => self,
        }
    }
}

// ---------------------------------------------------------------------------
// Conditions and equipment
// ---------------------------------------------------------------------------

/// Temperature discomfort category tracked per body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ThermalCategory {
    /// Too cold.
    Cold,
    /// Too hot.
    Hot,
}

impl ThermalCategory {
    /// Both categories.
    pub const ALL: [Self; 2] = [Self::Cold, Self::Hot];

    /// The modifier type this category's discomfort is reported under.
    pub const fn morale_type(self) -> MoraleType {
        match self {
            Self::Cold => MoraleType::Cold,
            Self::Hot => MoraleType::Hot,
        }
    }

    /// Inverse of [`Self::morale_type`].
    pub const fn from_morale_type(kind: MoraleType) -> Option<Self> {
        match kind {
            MoraleType::Cold => Some(Self::Cold),
            MoraleType::Hot => Some(Self::Hot),
            _ => None,
        }
    }
}

/// How fancy an item looks to a character who values appearance.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Fanciness {
    /// Ordinary item.
    #[default]
    Plain,
    /// Fancy item; counts toward covered-region style.
    Fancy,
    /// Super fancy item; also earns a per-item-type bonus.
    SuperFancy,
}

impl Fanciness {
    /// Whether the item counts toward stylishness at all.
    pub const fn is_fancy(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Rule-participation switch derived from the traits a character holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TraitFlag {
    /// Fixed positive bonus; positive morale counts more, negative less.
    Optimist,
    /// Fixed negative bonus; negative morale counts more, positive less.
    BadTemper,
    /// Enjoys wearing fancy clothes.
    Stylish,
    /// Enjoys pain, up to a ceiling.
    Masochist,
    /// Enjoys pain without a ceiling.
    Cenobite,
    /// Flowers on the head need sunlight.
    Flowers,
    /// Roots in the legs and feet need soil.
    Roots,
}

/// Which store a breakdown entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum BonusSource {
    /// A duration-limited bonus.
    Decaying,
    /// An indefinite bonus.
    Persistent,
    /// Aggregate temperature discomfort.
    Thermal,
}
