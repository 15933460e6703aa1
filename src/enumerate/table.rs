//! Direct-mapped memo tables for the enumeration phases.
//!
//! Same addressing as the transposition table: one slot per index, exact key
//! check on lookup, colliding inserts overwrite. A miss just means the
//! subtree is counted again.

use log::debug;

use crate::core::error::{KalahError, Result};
use crate::core::hash::slot_index;

use super::distribution::ScoreDistribution;

#[derive(Clone, Copy, Debug)]
struct CountEntry {
    key: u64,
    count: u64,
}

/// Scalar game counts keyed by position hash.
pub struct CountTable {
    entries: Vec<Option<CountEntry>>,
    bits: u32,
}

impl CountTable {
    /// Creates a table with `1 << bits` slots.
    pub fn new(bits: u32) -> Self {
        Self {
            entries: vec![None; 1 << bits],
            bits,
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: u64) -> Option<u64> {
        self.entries[slot_index(key, self.bits)]
            .filter(|entry| entry.key == key)
            .map(|entry| entry.count)
    }

    #[inline]
    pub fn insert(&mut self, key: u64, count: u64) {
        self.entries[slot_index(key, self.bits)] = Some(CountEntry { key, count });
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn occupied(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|entry| *entry = None);
    }
}

/// Score histograms keyed by position hash.
///
/// Stored as three parallel heap arrays. The histogram array is large
/// (584 bytes per slot), so allocation is fallible and reported as an error
/// instead of aborting.
pub struct DistTable {
    keys: Vec<u64>,
    values: Vec<ScoreDistribution>,
    valid: Vec<bool>,
    bits: u32,
}

impl DistTable {
    /// Allocate a table with `1 << bits` slots.
    pub fn try_new(bits: u32) -> Result<Self> {
        let entries = 1usize << bits;
        let alloc_error = |_| KalahError::TableAllocation {
            table: "score distribution",
            entries,
        };

        let mut keys = Vec::new();
        keys.try_reserve_exact(entries).map_err(alloc_error)?;
        let mut values = Vec::new();
        values.try_reserve_exact(entries).map_err(alloc_error)?;
        let mut valid = Vec::new();
        valid.try_reserve_exact(entries).map_err(alloc_error)?;

        keys.resize(entries, 0);
        values.resize(entries, ScoreDistribution::default());
        valid.resize(entries, false);

        debug!(
            "allocated score distribution table: {entries} entries, {} MiB",
            (entries * (std::mem::size_of::<ScoreDistribution>() + 9)) >> 20
        );
        Ok(Self {
            keys,
            values,
            valid,
            bits,
        })
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: u64) -> Option<&ScoreDistribution> {
        let idx = slot_index(key, self.bits);
        (self.valid[idx] && self.keys[idx] == key).then(|| &self.values[idx])
    }

    #[inline]
    pub fn insert(&mut self, key: u64, value: &ScoreDistribution) {
        let idx = slot_index(key, self.bits);
        self.keys[idx] = key;
        self.values[idx] = *value;
        self.valid[idx] = true;
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    pub fn clear(&mut self) {
        self.valid.iter_mut().for_each(|v| *v = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_table_hit_and_miss() {
        let mut table = CountTable::new(4);
        let key = 0x0500_0000_0000_0000;
        assert_eq!(table.get(key), None);
        table.insert(key, 42);
        assert_eq!(table.get(key), Some(42));
        assert_eq!(table.get(key ^ 1), None);
    }

    #[test]
    fn test_count_table_collision_evicts() {
        let mut table = CountTable::new(4);
        let key = 0x0500_0000_0000_0000;
        table.insert(key, 1);
        table.insert(key | 7, 2);
        assert_eq!(table.get(key), None);
        assert_eq!(table.get(key | 7), Some(2));
        assert_eq!(table.occupied(), 1);

        table.clear();
        assert_eq!(table.get(key | 7), None);
        assert_eq!(table.capacity(), 16);
    }

    #[test]
    fn test_dist_table_round_trip() {
        let mut table = DistTable::try_new(3).unwrap();
        let key = 0x0100_0000_0000_0000;
        assert!(table.get(key).is_none());

        let mut dist = ScoreDistribution::default();
        dist.add(4, 10);
        table.insert(key, &dist);
        assert_eq!(table.get(key), Some(&dist));
        assert!(table.get(key + 1).is_none());

        table.clear();
        assert!(table.get(key).is_none());
        assert_eq!(table.capacity(), 8);
    }
}
