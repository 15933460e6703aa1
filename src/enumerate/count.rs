//! Game counting: every game, and only the games on perfect-play lines.
//!
//! Children are always oriented towards their mover, so a position reached
//! with either player to move shares one cache slot.

use crate::core::board::Board;
use crate::core::hash::hash_board;
use crate::search::Solver;

use super::table::CountTable;

/// Number of distinct games (move sequences to a finished board) from `board`.
pub fn count_all(table: &mut CountTable, board: &Board) -> u64 {
    if board.is_game_over() {
        return 1;
    }

    let hash = hash_board(board);
    if let Some(count) = table.get(hash) {
        return count;
    }

    let total = board
        .legal_moves()
        .into_iter()
        .map(|pit| count_all(table, &board.child(pit).0))
        .sum();

    table.insert(hash, total);
    total
}

/// Number of games from `board` in which every move keeps the solved value.
///
/// A move qualifies when the solved value of its child, seen from the
/// current mover, equals the solved value of `board` itself. The table must
/// not hold entries from [`count_all`].
pub fn count_perfect(table: &mut CountTable, solver: &mut Solver, board: &Board) -> u64 {
    if board.is_game_over() {
        return 1;
    }

    let hash = hash_board(board);
    if let Some(count) = table.get(hash) {
        return count;
    }

    let best = solver.search_full(board).score;

    let mut total = 0;
    for pit in board.legal_moves() {
        let (child, again) = board.child(pit);
        let value = if again {
            solver.search_full(&child).score
        } else {
            -solver.search_full(&child).score
        };
        if value == best {
            total += count_perfect(table, solver, &child);
        }
    }

    table.insert(hash, total);
    total
}
