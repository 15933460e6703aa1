//! Negamax solver with alpha-beta pruning and a transposition table.
//!
//! Scores are final seed margins for the player to move. A move that ends in
//! the mover's store keeps the turn, so that child is searched with the same
//! window and sign; every other child is flipped and negated.
//!
//! Depth-limited leaves are scored by the store differential and marked
//! unsolved. A node counts as solved only when every child it scanned was
//! solved, cutoffs included, so iterative deepening stops exactly when no
//! heuristic leaf influenced the result.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::board::{Board, MoveList, PITS};
use crate::core::config::SolverConfig;
use crate::core::hash::hash_board;

use super::stats::SearchStats;
use super::tt::{Bound, TranspositionTable, TtEntry};

/// Largest possible margin. Bounds the root window.
pub const SCORE_BOUND: i32 = 36;

/// Below any reachable score.
const NO_SCORE: i32 = -100;

/// Outcome of a search call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best pit found, `None` at terminal positions and depth-limited leaves.
    pub best_move: Option<usize>,
    /// Margin for the player to move.
    pub score: i32,
    /// No heuristic leaf contributed to `score`.
    pub solved: bool,
}

impl SearchResult {
    fn terminal(board: &Board) -> Self {
        Self {
            best_move: None,
            score: board.final_score(),
            solved: true,
        }
    }

    fn negated(self) -> Self {
        Self {
            score: -self.score,
            ..self
        }
    }
}

/// Search context. Owns its transposition table, so independent solves never
/// share cached values.
pub struct Solver {
    tt: TranspositionTable,
    stats: SearchStats,
}

impl Solver {
    /// Create a solver with a transposition table sized by `config`.
    pub fn new(config: &SolverConfig) -> Self {
        Self::with_tt_bits(config.tt_bits)
    }

    /// Create a solver with a `1 << bits` entry transposition table.
    pub fn with_tt_bits(bits: u32) -> Self {
        Self {
            tt: TranspositionTable::new(bits),
            stats: SearchStats::default(),
        }
    }

    /// Statistics since the last reset.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Interior nodes expanded since the last reset.
    #[must_use]
    pub fn nodes_searched(&self) -> u64 {
        self.stats.nodes
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// The transposition table.
    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Forget every cached result and reset statistics.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.stats.reset();
    }

    /// Depth-limited negamax in the window `(alpha, beta)`.
    pub fn search(&mut self, board: &Board, depth: i32, mut alpha: i32, beta: i32) -> SearchResult {
        if board.is_game_over() {
            return SearchResult::terminal(board);
        }

        let hash = hash_board(board);
        let score_diff = board.store_diff();
        self.stats.tt_probes += 1;
        let entry = self.tt.probe(hash).copied();
        let hint = entry.and_then(|e| e.best_move).map(usize::from);

        if let Some(entry) = entry {
            self.stats.tt_hits += 1;
            if entry.usable_at(depth) {
                let value = i32::from(entry.score) + score_diff;
                if entry.cuts_off(value, alpha, beta) {
                    self.stats.tt_cutoffs += 1;
                    return SearchResult {
                        best_move: hint,
                        score: value,
                        solved: entry.solved,
                    };
                }
            }
        }

        if depth <= 0 {
            return SearchResult {
                best_move: None,
                score: score_diff,
                solved: false,
            };
        }
        self.stats.nodes += 1;

        let original_alpha = alpha;
        let mut solved = true;
        let mut best_score = NO_SCORE;
        let mut best_move = None;

        for pit in ordered_moves(board, hint) {
            if alpha >= beta {
                break;
            }

            let mut after = *board;
            let result = if after.sow(pit) {
                self.search(&after, depth - 1, alpha, beta)
            } else {
                after.flip();
                self.search(&after, depth - 1, -beta, -alpha).negated()
            };

            if !result.solved {
                solved = false;
            }
            if result.score > best_score {
                best_score = result.score;
                best_move = Some(pit);
                alpha = alpha.max(best_score);
            }
        }

        let bound = if best_score <= original_alpha {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(TtEntry {
            key: hash,
            score: (best_score - score_diff) as i8,
            depth: depth as i16,
            best_move: best_move.map(|pit| pit as u8),
            bound,
            solved,
        });

        SearchResult {
            best_move,
            score: best_score,
            solved,
        }
    }

    /// Iterative deepening with a full window until the result is solved.
    ///
    /// Terminates because the game length is bounded by the seeds on the
    /// board. Shallow passes leave best-move hints that order the deeper ones.
    pub fn search_full(&mut self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let mut depth = 0;
        let result = loop {
            depth += 1;
            let result = self.search(board, depth, -SCORE_BOUND, SCORE_BOUND);
            self.stats.iterations += 1;
            debug!(
                "depth {depth} score {:+} move {:?} solved {} nodes {}",
                result.score,
                result.best_move,
                result.solved,
                self.stats.nodes
            );
            if result.solved {
                break result;
            }
        };

        self.stats.max_depth = depth as u32;
        self.stats.time_us += start.elapsed().as_micros() as u64;
        debug!(
            "solved at depth {depth}: score {:+} move {:?} ({} nodes)",
            result.score, result.best_move, self.stats.nodes
        );
        result
    }
}

/// Hinted move first, then pits from the store side back.
fn ordered_moves(board: &Board, hint: Option<usize>) -> MoveList {
    let mut moves = MoveList::new();
    if let Some(pit) = hint.filter(|&pit| board.is_legal(pit)) {
        moves.push(pit);
    }
    moves.extend((0..PITS).rev().filter(|&pit| board.is_legal(pit) && Some(pit) != hint));
    moves
}
