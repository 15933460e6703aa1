//! A single interactive game backed by the solver.
//!
//! The session stores the board from the first player's orientation and
//! remembers whose turn it is. Every operation flips the board towards the
//! mover, works on that view, and flips back, so callers never see the
//! search's mover-relative orientation.
//!
//! [`SessionState`] has a fixed 16-byte encoding for consumers that read the
//! session as raw memory:
//!
//! | bytes  | content                              |
//! |--------|--------------------------------------|
//! | 0..14  | board ring, first player's pits first |
//! | 14     | turn (0 = first player, 1 = second)   |
//! | 15     | last solved score, first player's view |

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::board::{Board, FULL};
use crate::core::config::SolverConfig;
use crate::core::error::{KalahError, Result};
use crate::core::side::Side;
use crate::search::Solver;

/// Encoded size of [`SessionState`].
pub const STATE_BYTES: usize = FULL + 2;

/// Snapshot of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub board: [u8; FULL],
    pub turn: u8,
    pub score: i8,
}

impl SessionState {
    fn start(board: Board) -> Self {
        Self {
            board: *board.ring(),
            turn: Side::First.index(),
            score: 0,
        }
    }

    /// Fixed-layout encoding.
    pub fn to_bytes(&self) -> Result<[u8; STATE_BYTES]> {
        let bytes = bincode::serialize(self)?;
        let len = bytes.len();
        bytes.try_into().map_err(|_| {
            KalahError::Snapshot(Box::new(bincode::ErrorKind::Custom(format!(
                "expected {STATE_BYTES} bytes, encoded {len}"
            ))))
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Result of [`Session::play`]. The discriminants are the wire codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i8)]
pub enum MoveOutcome {
    /// Pit out of range or empty; nothing changed.
    Invalid = -1,
    /// The other player moves next.
    TurnEnded = 0,
    /// The last seed reached the store; same player again.
    MoveAgain = 1,
}

impl MoveOutcome {
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// One game plus the solver that advises on it.
pub struct Session {
    state: SessionState,
    start: Board,
    solver: Solver,
}

impl Session {
    /// New session at the canonical start.
    pub fn new(config: &SolverConfig) -> Self {
        Self::with_start(config, Board::new())
    }

    /// New session that starts (and restarts) from `start`.
    pub fn with_start(config: &SolverConfig, start: Board) -> Self {
        Self {
            state: SessionState::start(start),
            start,
            solver: Solver::new(config),
        }
    }

    /// Restart the game. Cached search results survive unless `clear_tables`.
    pub fn init(&mut self, clear_tables: bool) -> &SessionState {
        if clear_tables {
            self.solver.clear();
        } else {
            self.solver.reset_stats();
        }
        self.state = SessionState::start(self.start);
        &self.state
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Board from the first player's orientation.
    #[must_use]
    pub fn board(&self) -> Board {
        Board::from_ring(self.state.board)
    }

    #[must_use]
    pub fn turn(&self) -> Side {
        Side::from_index(self.state.turn)
    }

    /// Last solved score, first player's view.
    #[must_use]
    pub fn score(&self) -> i8 {
        self.state.score
    }

    #[must_use]
    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Board oriented towards the player to move.
    fn mover_board(&self) -> Board {
        let board = self.board();
        match self.turn() {
            Side::First => board,
            Side::Second => board.flipped(),
        }
    }

    fn store_mover_board(&mut self, board: Board) {
        let board = match self.turn() {
            Side::First => board,
            Side::Second => board.flipped(),
        };
        self.state.board = *board.ring();
    }

    /// Play the mover's pit `pit` (0..6, mover's own numbering).
    pub fn play(&mut self, pit: usize) -> MoveOutcome {
        let mut board = self.mover_board();
        let again = match board.try_sow(pit) {
            Ok(again) => again,
            Err(err) => {
                debug!("{} rejected: {err}", self.turn());
                return MoveOutcome::Invalid;
            }
        };
        self.store_mover_board(board);

        debug!("{} plays pit {pit}{}", self.turn(), if again { ", again" } else { "" });
        if again {
            MoveOutcome::MoveAgain
        } else {
            self.state.turn = self.turn().opponent().index();
            MoveOutcome::TurnEnded
        }
    }

    /// Solve the current position. Returns the mover's best pit, `None` once
    /// the game is over, and records the value in [`Session::score`].
    pub fn solve(&mut self) -> Option<usize> {
        let side = self.turn();
        let best = self.solver.search_full(&self.mover_board());
        self.state.score = (side.sign() * best.score) as i8;
        debug!(
            "{side} best move {:?}, score {:+} ({} nodes)",
            best.best_move,
            best.score,
            self.solver.nodes_searched()
        );
        best.best_move
    }

    pub fn to_bytes(&self) -> Result<[u8; STATE_BYTES]> {
        self.state.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::with_start(&SolverConfig::compact(), Board::with_seeds(1))
    }

    #[test]
    fn test_invalid_moves_change_nothing() {
        let mut session = session();
        let before = *session.state();
        assert_eq!(session.play(6), MoveOutcome::Invalid);
        assert_eq!(session.play(100), MoveOutcome::Invalid);
        assert_eq!(*session.state(), before);
        assert_eq!(MoveOutcome::Invalid.code(), -1);
    }

    #[test]
    fn test_turn_bookkeeping() {
        let mut session = session();
        // Pit 5 with one seed lands in the store.
        assert_eq!(session.play(5), MoveOutcome::MoveAgain);
        assert_eq!(session.turn(), Side::First);
        // Pit 4 feeds the now-empty pit 5 and captures.
        assert_eq!(session.play(4), MoveOutcome::TurnEnded);
        assert_eq!(session.turn(), Side::Second);
        assert_eq!(session.board().store(), 3);
        assert_eq!(session.board().opp_pit(0), 0);

        // Second player's pit 5 is ring slot 12.
        assert_eq!(session.play(5), MoveOutcome::MoveAgain);
        assert_eq!(session.board().opp_store(), 1);
        assert_eq!(session.board().opp_pit(5), 0);
        assert_eq!(session.board().total_seeds(), 12);
    }

    #[test]
    fn test_solve_reports_first_player_score() {
        let mut session = session();
        let best = session.solve().unwrap();
        assert!(session.board().is_legal(best));
        assert_eq!(session.score(), 2);

        session.play(0);
        assert_eq!(session.turn(), Side::Second);
        assert!(session.solve().is_some());
        // Stored from the first player's view regardless of who moves.
        let mut solver = Solver::with_tt_bits(16);
        let mover_value = solver.search_full(&session.board().flipped()).score;
        assert_eq!(i32::from(session.score()), -mover_value);
    }

    #[test]
    fn test_init_restarts() {
        let mut session = session();
        session.play(0);
        session.solve();
        let state = *session.init(true);
        assert_eq!(state, SessionState::start(Board::with_seeds(1)));
        assert_eq!(session.solver().tt().occupied(), 0);
    }

    #[test]
    fn test_state_layout() {
        let mut session = session();
        session.play(0);
        session.state.score = -3;
        let bytes = session.to_bytes().unwrap();

        assert_eq!(bytes.len(), STATE_BYTES);
        assert_eq!(&bytes[..FULL], session.board().ring());
        assert_eq!(bytes[14], 1);
        assert_eq!(bytes[15] as i8, -3);
        assert_eq!(SessionState::from_bytes(&bytes).unwrap(), *session.state());
    }
}
