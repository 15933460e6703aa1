//! Core types: board, position hashing, sides, configuration, errors.
//!
//! Everything else in the crate builds on the board model and the hash
//! defined here.

pub mod board;
pub mod config;
pub mod error;
pub mod hash;
pub mod side;

pub use board::{Board, MoveList, FULL, HALF, MAX_SEEDS, PITS, START_SEEDS};
pub use config::SolverConfig;
pub use error::{KalahError, Result};
pub use hash::{hash_board, slot_index};
pub use side::Side;
