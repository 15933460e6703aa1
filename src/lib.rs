//! # kalah-solver
//!
//! Perfect-play analysis of Kalah(6,3) with empty capture.
//!
//! ## Design Principles
//!
//! 1. **Mover-Relative Boards**: the board is always seen from the player to
//!    move. Ending a turn flips it, so search and enumeration never branch on
//!    whose turn it is.
//!
//! 2. **Fixed-Size Tables**: every memo table is direct-mapped with a
//!    configurable power-of-two size. Collisions evict; they never corrupt.
//!
//! 3. **Exact Answers**: search deepens until the value is proven, and
//!    enumeration counts every game without sampling.
//!
//! ## Modules
//!
//! - `core`: Board, sowing rules, hashing, configuration, errors
//! - `search`: Negamax solver with transposition table
//! - `enumerate`: Game counts, margin histograms, perfect-play counts
//! - `session`: A single game advised by the solver
//! - `python`: Python bindings (feature `python`)

pub mod core;
pub mod enumerate;
pub mod search;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, KalahError, MoveList, Result, Side, SolverConfig};

pub use crate::search::{SearchResult, SearchStats, Solver};

pub use crate::enumerate::{Analysis, Enumerator, OutcomeSummary, ScoreDistribution};

pub use crate::session::{MoveOutcome, Session, SessionState};
