//! Kalah board: two rows of pits plus stores, viewed as a 14-slot ring.
//!
//! ## Layout
//!
//! ```text
//! index:  0 1 2 3 4 5 | 6 | 7 8 9 10 11 12 | 13
//!         own pits    |own| opponent pits  |opp store
//! ```
//!
//! The board is always oriented towards the player to move ("own" side).
//! Sowing walks the ring counter-clockwise and skips slot 13. Opponent pit `i`
//! sits opposite own pit `PITS - 1 - i`, so a capture from own pit `p` takes
//! opponent pit `PITS - 1 - p`.
//!
//! `flip` swaps the two halves, which hands the board to the other player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{KalahError, Result};

/// Pits per side.
pub const PITS: usize = 6;

/// Slots per side: pits plus store.
pub const HALF: usize = PITS + 1;

/// Slots on the whole ring.
pub const FULL: usize = HALF * 2;

/// Seeds per pit in the canonical Kalah(6,3) start.
pub const START_SEEDS: u8 = 3;

/// Most seeds a board may hold. Scores, histogram buckets and cached
/// relative scores are all sized for this total.
pub const MAX_SEEDS: u32 = 2 * PITS as u32 * START_SEEDS as u32;

/// Ring index of the mover's store.
pub const OWN_STORE: usize = PITS;

/// Ring index of the opponent's store.
pub const OPP_STORE: usize = FULL - 1;

/// Legal moves, at most one per pit.
pub type MoveList = SmallVec<[usize; PITS]>;

/// A Kalah position seen from the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    ring: [u8; FULL],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Canonical start: 3 seeds in every pit, both stores empty.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seeds(START_SEEDS)
    }

    /// Start position with `seeds` in every pit.
    ///
    /// Smaller variants keep the game tree small enough for exhaustive
    /// cross-checks.
    #[must_use]
    pub const fn with_seeds(seeds: u8) -> Self {
        let mut ring = [seeds; FULL];
        ring[OWN_STORE] = 0;
        ring[OPP_STORE] = 0;
        Self { ring }
    }

    /// Checked [`Board::with_seeds`]: at most [`START_SEEDS`] per pit.
    pub fn try_with_seeds(seeds: u8) -> Result<Self> {
        Self::with_seeds(seeds).checked()
    }

    /// Build a board from explicit rows.
    ///
    /// `opp` is indexed in the opponent's own sowing order, so `opp[0]` faces
    /// `own[5]`.
    #[must_use]
    pub fn from_parts(own: [u8; PITS], own_store: u8, opp: [u8; PITS], opp_store: u8) -> Self {
        let mut ring = [0; FULL];
        ring[..PITS].copy_from_slice(&own);
        ring[OWN_STORE] = own_store;
        ring[HALF..HALF + PITS].copy_from_slice(&opp);
        ring[OPP_STORE] = opp_store;
        Self { ring }
    }

    /// Rebuild a board from its raw ring.
    #[must_use]
    pub const fn from_ring(ring: [u8; FULL]) -> Self {
        Self { ring }
    }

    /// Checked [`Board::from_ring`]: at most [`MAX_SEEDS`] on the board.
    pub fn try_from_ring(ring: [u8; FULL]) -> Result<Self> {
        Self::from_ring(ring).checked()
    }

    /// Reject boards holding more than [`MAX_SEEDS`].
    pub fn checked(self) -> Result<Self> {
        let total = self.total_seeds();
        if total > MAX_SEEDS {
            return Err(KalahError::TooManySeeds {
                total,
                max: MAX_SEEDS,
            });
        }
        Ok(self)
    }

    /// The raw 14-slot ring.
    #[inline]
    #[must_use]
    pub const fn ring(&self) -> &[u8; FULL] {
        &self.ring
    }

    /// Seeds in own pit `pit`.
    #[inline]
    #[must_use]
    pub fn pit(&self, pit: usize) -> u8 {
        self.ring[pit]
    }

    /// Seeds in opponent pit `pit`.
    #[inline]
    #[must_use]
    pub fn opp_pit(&self, pit: usize) -> u8 {
        self.ring[HALF + pit]
    }

    /// Own pits.
    #[inline]
    #[must_use]
    pub fn pits(&self) -> &[u8] {
        &self.ring[..PITS]
    }

    /// Opponent pits.
    #[inline]
    #[must_use]
    pub fn opp_pits(&self) -> &[u8] {
        &self.ring[HALF..HALF + PITS]
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> u8 {
        self.ring[OWN_STORE]
    }

    #[inline]
    #[must_use]
    pub fn opp_store(&self) -> u8 {
        self.ring[OPP_STORE]
    }

    /// Own store minus opponent store.
    #[inline]
    #[must_use]
    pub fn store_diff(&self) -> i32 {
        i32::from(self.store()) - i32::from(self.opp_store())
    }

    /// Seeds left in own pits minus seeds left in opponent pits.
    #[must_use]
    pub fn pit_balance(&self) -> i32 {
        self.pits()
            .iter()
            .zip(self.opp_pits())
            .map(|(&own, &opp)| i32::from(own) - i32::from(opp))
            .sum()
    }

    /// Seeds on the whole board, stores included.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.ring.iter().map(|&s| u32::from(s)).sum()
    }

    /// Whether `pit` names a non-empty own pit.
    #[inline]
    #[must_use]
    pub fn is_legal(&self, pit: usize) -> bool {
        pit < PITS && self.ring[pit] != 0
    }

    /// Non-empty own pits in ascending order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        (0..PITS).filter(|&p| self.ring[p] != 0).collect()
    }

    /// True once either side has no seeds left in its pits.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let own_empty = self.pits().iter().all(|&s| s == 0);
        let opp_empty = self.opp_pits().iter().all(|&s| s == 0);
        own_empty || opp_empty
    }

    /// Final margin for the side to move: leftover pit seeds go to their owner.
    #[must_use]
    pub fn final_score(&self) -> i32 {
        self.store_diff() + self.pit_balance()
    }

    /// Hand the board to the other player.
    #[inline]
    pub fn flip(&mut self) {
        let (own, opp) = self.ring.split_at_mut(HALF);
        own.swap_with_slice(opp);
    }

    /// Copy of the board seen from the other side.
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Sow own pit `pit`. Returns `true` when the mover plays again.
    ///
    /// The pit must be non-empty; use [`Board::try_sow`] for unchecked input.
    pub fn sow(&mut self, pit: usize) -> bool {
        debug_assert!(self.is_legal(pit), "sow from empty or invalid pit {pit}");

        let mut seeds = self.ring[pit];
        self.ring[pit] = 0;
        let mut pos = pit;
        while seeds > 0 {
            pos = (pos + 1) % OPP_STORE;
            self.ring[pos] += 1;
            seeds -= 1;
        }

        if pos == OWN_STORE {
            return true;
        }

        // Empty capture: fires even when the facing pit holds nothing.
        if pos < PITS && self.ring[pos] == 1 {
            let facing = HALF + PITS - 1 - pos;
            self.ring[OWN_STORE] += self.ring[pos] + self.ring[facing];
            self.ring[pos] = 0;
            self.ring[facing] = 0;
        }
        false
    }

    /// Checked [`Board::sow`].
    pub fn try_sow(&mut self, pit: usize) -> Result<bool> {
        if !self.is_legal(pit) {
            return Err(KalahError::InvalidMove { pit });
        }
        Ok(self.sow(pit))
    }

    /// Play `pit` on a copy and orient the result towards whoever moves next.
    ///
    /// Returns the child and whether the mover keeps the turn.
    #[must_use]
    pub fn child(&self, pit: usize) -> (Self, bool) {
        let mut after = *self;
        let again = after.sow(pit);
        if !again {
            after.flip();
        }
        (after, again)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Opponent row printed right to left so facing pits line up.
        write!(f, "    ")?;
        for pit in (0..PITS).rev() {
            write!(f, "{:>3}", self.opp_pit(pit))?;
        }
        writeln!(f)?;
        writeln!(f, "{:>3}{:>22}", self.opp_store(), self.store())?;
        write!(f, "    ")?;
        for pit in 0..PITS {
            write!(f, "{:>3}", self.pit(pit))?;
        }
        Ok(())
    }
}
