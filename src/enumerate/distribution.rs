//! Final-margin histograms over every game in a subtree.
//!
//! A cached histogram counts margins relative to the store differential of
//! the position it belongs to, which is why it can be keyed by a hash that
//! ignores the stores. When a child histogram is folded into its parent it is
//! shifted by the store differential the move gained, and mirrored when the
//! move handed the turn over.

use log::trace;

use crate::core::board::Board;
use crate::core::hash::hash_board;
use crate::search::SCORE_BOUND;

use super::table::DistTable;

/// Number of margin buckets: -36 ..= +36.
pub const BUCKETS: usize = 2 * SCORE_BOUND as usize + 1;

/// Bucket of margin 0.
const OFFSET: i32 = SCORE_BOUND;

/// Game counts per final margin.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScoreDistribution {
    buckets: [u64; BUCKETS],
}

impl Default for ScoreDistribution {
    fn default() -> Self {
        Self {
            buckets: [0; BUCKETS],
        }
    }
}

impl std::fmt::Debug for ScoreDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl ScoreDistribution {
    /// Add `count` games ending at `margin`. Margins outside ±36 are dropped.
    pub fn add(&mut self, margin: i32, count: u64) {
        if let Some(bucket) = bucket_of(margin) {
            self.buckets[bucket] += count;
        }
    }

    /// Games ending at `margin`.
    #[must_use]
    pub fn get(&self, margin: i32) -> u64 {
        bucket_of(margin).map_or(0, |bucket| self.buckets[bucket])
    }

    /// Games across all buckets.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// Non-empty buckets as `(margin, count)`, lowest margin first.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, &count)| count != 0)
            .map(|(bucket, &count)| (bucket as i32 - OFFSET, count))
    }

    /// Wins, draws and losses for the player to move at the root.
    #[must_use]
    pub fn outcomes(&self) -> OutcomeSummary {
        let mut summary = OutcomeSummary::default();
        for (margin, count) in self.iter() {
            match margin.signum() {
                1 => summary.first_wins += count,
                0 => summary.draws += count,
                _ => summary.second_wins += count,
            }
        }
        summary
    }

    /// Fold in a child reached by a move that keeps the turn.
    fn absorb_same_side(&mut self, child: &Self, delta: i32) {
        for (margin, count) in child.iter() {
            self.add(margin + delta, count);
        }
    }

    /// Fold in a flipped child: its margins are the opponent's.
    fn absorb_flipped(&mut self, child: &Self, delta: i32) {
        for (margin, count) in child.iter() {
            self.add(delta - margin, count);
        }
    }
}

fn bucket_of(margin: i32) -> Option<usize> {
    let bucket = margin + OFFSET;
    (0..BUCKETS as i32).contains(&bucket).then_some(bucket as usize)
}

/// Outcome counts from the root mover's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub first_wins: u64,
    pub draws: u64,
    pub second_wins: u64,
}

impl OutcomeSummary {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.first_wins + self.draws + self.second_wins
    }
}

/// Percentage of `part` in `total`, 0 for an empty total.
#[must_use]
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

/// Histogram of final margins over every game reachable from `board`,
/// relative to `board`'s store differential.
pub fn score_distribution(table: &mut DistTable, board: &Board) -> ScoreDistribution {
    let mut result = ScoreDistribution::default();

    if board.is_game_over() {
        result.add(board.pit_balance(), 1);
        return result;
    }

    let hash = hash_board(board);
    if let Some(cached) = table.get(hash) {
        return *cached;
    }

    let store_diff = board.store_diff();
    for pit in board.legal_moves() {
        let mut after = *board;
        let again = after.sow(pit);
        let delta = after.store_diff() - store_diff;

        if again {
            let child = score_distribution(table, &after);
            result.absorb_same_side(&child, delta);
        } else {
            after.flip();
            let child = score_distribution(table, &after);
            result.absorb_flipped(&child, delta);
        }
    }

    trace!("distribution {hash:016x}: {} games", result.total());
    table.insert(hash, &result);
    result
}
