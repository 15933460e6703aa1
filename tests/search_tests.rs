//! Solver integration tests: exhaustive cross-checks and pinned results.

use std::collections::HashMap;

use kalah_solver::core::{Board, SolverConfig, PITS};
use kalah_solver::search::Solver;
use proptest::prelude::*;

/// Plain minimax over the full tree, memoized on the exact ring.
fn minimax(board: &Board, memo: &mut HashMap<Board, i32>) -> i32 {
    if board.is_game_over() {
        return board.final_score();
    }
    if let Some(&value) = memo.get(board) {
        return value;
    }
    let value = board
        .legal_moves()
        .into_iter()
        .map(|pit| {
            let (child, again) = board.child(pit);
            let child_value = minimax(&child, memo);
            if again {
                child_value
            } else {
                -child_value
            }
        })
        .max()
        .unwrap_or_else(|| board.final_score());
    memo.insert(*board, value);
    value
}

/// Value of `pit` for the player to move.
fn move_value(board: &Board, pit: usize) -> i32 {
    let (child, again) = board.child(pit);
    let value = minimax(&child, &mut HashMap::new());
    if again {
        value
    } else {
        -value
    }
}

fn arb_board() -> impl Strategy<Value = Board> {
    (
        prop::array::uniform6(0u8..=2),
        0u8..6,
        prop::array::uniform6(0u8..=2),
        0u8..6,
    )
        .prop_map(|(own, own_store, opp, opp_store)| {
            Board::from_parts(own, own_store, opp, opp_store)
        })
}

// =============================================================================
// Exhaustive Cross-Checks
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]

    #[test]
    fn prop_solver_matches_minimax(board in arb_board()) {
        let mut solver = Solver::with_tt_bits(12);
        let result = solver.search_full(&board);
        prop_assert!(result.solved);
        prop_assert_eq!(result.score, minimax(&board, &mut HashMap::new()));
    }

    #[test]
    fn prop_best_move_achieves_value(board in arb_board()) {
        prop_assume!(!board.is_game_over());
        let mut solver = Solver::with_tt_bits(12);
        let result = solver.search_full(&board);

        let pit = result.best_move.expect("live position has a best move");
        prop_assert!(board.is_legal(pit));
        prop_assert_eq!(move_value(&board, pit), result.score);
    }

    #[test]
    fn prop_tiny_table_still_exact(
        own in prop::array::uniform6(0u8..=1),
        opp in prop::array::uniform6(0u8..=1),
    ) {
        let board = Board::from_parts(own, 0, opp, 0);
        // Two slots: nearly every store collides.
        let mut solver = Solver::with_tt_bits(1);
        prop_assert_eq!(
            solver.search_full(&board).score,
            minimax(&board, &mut HashMap::new())
        );
    }
}

#[test]
fn test_one_seed_start_matches_minimax() {
    let board = Board::with_seeds(1);
    let mut solver = Solver::new(&SolverConfig::compact());
    let result = solver.search_full(&board);
    assert_eq!(result.score, minimax(&board, &mut HashMap::new()));
    assert_eq!(result.score, 2);
}

// =============================================================================
// Table Reuse
// =============================================================================

#[test]
fn test_warm_table_gives_same_answer() {
    let board = Board::with_seeds(1);
    let mut solver = Solver::new(&SolverConfig::compact());
    let cold = solver.search_full(&board);
    let cold_nodes = solver.nodes_searched();

    let warm = solver.search_full(&board);
    assert_eq!(warm.score, cold.score);
    assert!(solver.nodes_searched() - cold_nodes < cold_nodes);

    solver.clear();
    assert_eq!(solver.nodes_searched(), 0);
    assert_eq!(solver.search_full(&board), cold);
    assert_eq!(solver.nodes_searched(), cold_nodes);
}

#[test]
fn test_every_opening_reply_solves() {
    let board = Board::with_seeds(1);
    let mut solver = Solver::new(&SolverConfig::compact());
    let root = solver.search_full(&board).score;

    let best = (0..PITS)
        .map(|pit| {
            let (child, again) = board.child(pit);
            let value = solver.search_full(&child).score;
            if again {
                value
            } else {
                -value
            }
        })
        .max();
    assert_eq!(best, Some(root));
}

// =============================================================================
// Pinned Results
// =============================================================================

#[test]
fn test_one_seed_default_tables() {
    let mut solver = Solver::new(&SolverConfig::default());
    let result = solver.search_full(&Board::with_seeds(1));
    assert!(result.solved);
    assert_eq!(result.score, 2);
    assert_eq!(result.best_move, Some(5));
    assert_eq!(solver.nodes_searched(), 1376);
}

#[test]
fn test_canonical_start() {
    let mut solver = Solver::new(&SolverConfig::default());
    let result = solver.search_full(&Board::new());
    assert!(result.solved);
    assert_eq!(result.best_move, Some(4));
    assert_eq!(result.score, 2);
    assert_eq!(solver.nodes_searched(), 4_868_064);
}
