//! Transposition table for the negamax solver.
//!
//! Direct-mapped, one entry per slot, addressed by the upper hash bits and
//! validated by the full key. Scores are stored relative to the position's
//! store differential so an entry serves every store context that shares the
//! same pit layout.

use crate::core::hash::slot_index;

/// What the stored score says about the true value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The search ended inside the window.
    Exact,
    /// Fail high: true value is at least the score.
    Lower,
    /// Fail low: true value is at most the score.
    Upper,
}

/// A single slot of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    /// Best score minus the store differential at the time of storing.
    pub score: i8,
    pub depth: i16,
    pub best_move: Option<u8>,
    pub bound: Bound,
    /// Every line below this position was searched to the end of the game.
    pub solved: bool,
}

impl TtEntry {
    /// Whether the entry may stand in for a search of `depth`.
    #[inline]
    #[must_use]
    pub fn usable_at(&self, depth: i32) -> bool {
        self.solved || i32::from(self.depth) >= depth
    }

    /// Whether a stored value `value` settles a search in `(alpha, beta)`.
    #[inline]
    #[must_use]
    pub fn cuts_off(&self, value: i32, alpha: i32, beta: i32) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => value >= beta,
            Bound::Upper => value <= alpha,
        }
    }
}

/// The transposition table itself.
pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
    bits: u32,
}

impl TranspositionTable {
    /// Creates a table with `1 << bits` slots.
    pub fn new(bits: u32) -> Self {
        Self {
            entries: vec![None; 1 << bits],
            bits,
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Whatever occupies the slot for `key`, matching or not.
    #[inline]
    #[must_use]
    pub fn slot(&self, key: u64) -> Option<&TtEntry> {
        self.entries[slot_index(key, self.bits)].as_ref()
    }

    /// The entry for `key`, if the slot holds that exact key.
    #[inline]
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<&TtEntry> {
        self.slot(key).filter(|entry| entry.key == key)
    }

    /// Offer a search result to the table.
    ///
    /// Solved results always go in. Otherwise the new result needs a depth at
    /// least as deep as a same-key occupant, and never replaces a solved
    /// occupant of any key. Returns whether the entry was written.
    pub fn store(&mut self, entry: TtEntry) -> bool {
        let idx = slot_index(entry.key, self.bits);
        let replace = match &self.entries[idx] {
            _ if entry.solved => true,
            None => true,
            Some(old) => !old.solved && (old.key != entry.key || entry.depth >= old.depth),
        };
        if replace {
            self.entries[idx] = Some(entry);
        }
        replace
    }

    /// Count occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|entry| *entry = None);
    }
}
