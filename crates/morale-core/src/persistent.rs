//! Indefinite morale bonuses keyed by modifier type.

use std::collections::BTreeMap;

use morale_types::MoraleType;

/// Persistent bonuses. Entries never expire; they are overwritten by
/// [`set`](Self::set) and dropped only by [`remove`](Self::remove) or
/// [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistentBonusTable {
    values: BTreeMap<MoraleType, i32>,
}

impl PersistentBonusTable {
    /// An empty table.
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Overwrite the stored value, creating the entry if absent.
    pub fn set(&mut self, kind: MoraleType, value: i32) {
        let previous = self.values.insert(kind, value);
        if previous != Some(value) {
            tracing::debug!(kind = ?kind, value, previous = ?previous, "persistent bonus set");
        }
    }

    /// Stored value, or 0.
    pub fn get(&self, kind: MoraleType) -> i32 {
        self.values.get(&kind).copied().unwrap_or(0)
    }

    /// Drop an entry. Returns whether one existed.
    pub fn remove(&mut self, kind: MoraleType) -> bool {
        self.values.remove(&kind).is_some()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Stored entries with a non-zero value, ordered by type.
    pub fn iter(&self) -> impl Iterator<Item = (MoraleType, i32)> + '_ {
        self.values
            .iter()
            .filter(|(_, value)| **value != 0)
            .map(|(kind, value)| (*kind, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_instead_of_adding() {
        let mut table = PersistentBonusTable::new();
        table.set(MoraleType::PermMasochist, 5);
        table.set(MoraleType::PermMasochist, 3);
        assert_eq!(table.get(MoraleType::PermMasochist), 3);
    }

    #[test]
    fn missing_entry_reads_zero() {
        let table = PersistentBonusTable::new();
        assert_eq!(table.get(MoraleType::PermOptimist), 0);
    }

    #[test]
    fn zero_values_are_hidden_from_iteration() {
        let mut table = PersistentBonusTable::new();
        table.set(MoraleType::PermFancy, 0);
        table.set(MoraleType::PermBadTemper, -4);
        let entries: Vec<(MoraleType, i32)> = table.iter().collect();
        assert_eq!(entries, vec![(MoraleType::PermBadTemper, -4)]);
    }

    #[test]
    fn remove_and_clear() {
        let mut table = PersistentBonusTable::new();
        table.set(MoraleType::PermOptimist, 4);
        table.set(MoraleType::PermFancy, 19);
        assert!(table.remove(MoraleType::PermOptimist));
        assert!(!table.remove(MoraleType::PermOptimist));
        assert_eq!(table.get(MoraleType::PermFancy), 19);
        table.clear();
        assert_eq!(table.iter().count(), 0);
    }
}
