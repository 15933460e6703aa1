//! Position fingerprints for the memoization tables.
//!
//! Only the twelve pit counts are hashed. Store totals are left out on
//! purpose: every table keyed by this hash stores values relative to the
//! position's store differential.

use super::board::{Board, PITS};

const SEED: u64 = 0x281d_cf94_d307_a6b0;
const MULTIPLIER: u64 = 0x31d8_b11c_baba_d6e3;

/// Bits of the hash above the table index. Tables index with bits 40 and up.
const INDEX_SHIFT: u32 = 40;

/// Largest table width the index shift leaves room for.
pub const MAX_TABLE_BITS: u32 = 64 - INDEX_SHIFT;

/// 64-bit fingerprint of the pit layout.
#[must_use]
pub fn hash_board(board: &Board) -> u64 {
    let mut h = SEED;
    for pit in 0..PITS {
        h = (h ^ u64::from(board.pit(pit))).wrapping_mul(MULTIPLIER);
        h = (h ^ u64::from(board.opp_pit(pit))).wrapping_mul(MULTIPLIER);
    }
    h
}

/// Slot of `hash` in a direct-mapped table of `1 << bits` entries.
#[inline]
#[must_use]
pub fn slot_index(hash: u64, bits: u32) -> usize {
    debug_assert!(bits <= MAX_TABLE_BITS);
    ((hash >> INDEX_SHIFT) & ((1u64 << bits) - 1)) as usize
}
