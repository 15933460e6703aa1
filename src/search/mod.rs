//! Adversarial search for Kalah positions.
//!
//! ## Overview
//!
//! - **Negamax with alpha-beta**: scores are always for the player to move;
//!   a move into one's own store keeps the sign, any other move flips it.
//! - **Transposition table**: direct-mapped, scores stored relative to the
//!   store differential, solved entries never evicted by unsolved ones.
//! - **Iterative deepening**: [`Solver::search_full`] deepens until no
//!   depth-limited leaf affects the result.
//!
//! ## Usage
//!
//! ```rust
//! use kalah_solver::core::Board;
//! use kalah_solver::search::Solver;
//!
//! let mut solver = Solver::with_tt_bits(16);
//! let result = solver.search_full(&Board::with_seeds(1));
//! assert!(result.solved);
//! println!("move {:?} score {:+}", result.best_move, result.score);
//! ```

pub mod solver;
pub mod stats;
pub mod tt;

pub use solver::{SearchResult, Solver, SCORE_BOUND};
pub use stats::SearchStats;
pub use tt::{Bound, TranspositionTable, TtEntry};
