//! String-keyed identifier wrappers for collaborator-owned definitions.
//!
//! Traits, effects, stats, and item types are defined by subsystems outside
//! the morale engine. The engine only ever compares these identifiers, so
//! each one is a newtype over `Cow<'static, str>`: well-known identifiers are
//! `const` and borrowed, identifiers read from config or event scripts are
//! owned.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around `Cow<'static, str>` with standard derives.
macro_rules! define_key {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(#[ts(type = "string")] Cow<'static, str>);

        impl $name {
            /// Create an identifier from a string literal, usable in `const` items.
            pub const fn from_static(key: &'static str) -> Self {
                Self(Cow::Borrowed(key))
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&'static str> for $name {
            fn from(key: &'static str) -> Self {
                Self::from_static(key)
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(Cow::Owned(key))
            }
        }
    };
}

define_key! {
    /// Identifier of a trait or mutation a character can gain or lose.
    TraitId
}

define_key! {
    /// Identifier of an active effect reported by the effect subsystem.
    EffectId
}

define_key! {
    /// Identifier of a named character stat (e.g. perceived pain).
    StatId
}

define_key! {
    /// Identifier of an item type in the external item catalog.
    ItemTypeId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_keys_compare_equal() {
        const ROOTS: TraitId = TraitId::from_static("ROOTS");
        assert_eq!(ROOTS, TraitId::from(String::from("ROOTS")));
        assert_ne!(ROOTS, TraitId::from("ROOTS2"));
    }

    #[test]
    fn key_serializes_as_plain_string() {
        let json = serde_json::to_string(&EffectId::from("cold")).ok();
        assert_eq!(json.as_deref(), Some("\"cold\""));

        let restored: Result<EffectId, _> = serde_json::from_str("\"took_prozac\"");
        assert_eq!(restored.ok(), Some(EffectId::from("took_prozac")));
    }

    #[test]
    fn display_matches_key() {
        assert_eq!(StatId::from("perceived_pain").to_string(), "perceived_pain");
    }
}
