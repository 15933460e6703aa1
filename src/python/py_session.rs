//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{Board, SolverConfig, FULL};
use crate::search::Solver;
use crate::session::{MoveOutcome, Session};

/// Python wrapper for Session.
///
/// Holds one game and the solver's tables.
#[pyclass(name = "Session")]
pub struct PySession(Session);

#[pymethods]
impl PySession {
    /// Create a session at the canonical start.
    ///
    /// # Arguments
    /// - tt_bits: log2 of the transposition table size (default: 22)
    #[new]
    #[pyo3(signature = (tt_bits = 22))]
    fn new(tt_bits: u32) -> PyResult<Self> {
        let config = SolverConfig::default().with_tt_bits(tt_bits);
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self(Session::new(&config)))
    }

    /// Restart the game, optionally dropping cached search results.
    ///
    /// Returns the 16-byte state snapshot.
    #[pyo3(signature = (clear_tables = false))]
    fn init<'py>(&mut self, py: Python<'py>, clear_tables: bool) -> PyResult<Bound<'py, PyBytes>> {
        self.0.init(clear_tables);
        self.state_bytes(py)
    }

    /// Play the mover's pit. Returns -1 (invalid), 0 (turn ended) or 1 (again).
    #[pyo3(name = "move")]
    fn play(&mut self, pit: i64) -> i32 {
        match usize::try_from(pit) {
            Ok(pit) => self.0.play(pit).code(),
            Err(_) => MoveOutcome::Invalid.code(),
        }
    }

    /// Solve the position; returns the best pit or -1 when the game is over.
    fn solve(&mut self, py: Python<'_>) -> i64 {
        py.allow_threads(|| self.0.solve())
            .map_or(-1, |pit| pit as i64)
    }

    /// Board ring from the first player's orientation.
    #[getter]
    fn board(&self) -> Vec<u8> {
        self.0.board().ring().to_vec()
    }

    /// 0 when the first player moves, 1 otherwise.
    #[getter]
    fn turn(&self) -> u8 {
        self.0.turn().index()
    }

    /// Last solved score, first player's view.
    #[getter]
    fn score(&self) -> i8 {
        self.0.score()
    }

    #[getter]
    fn nodes_searched(&self) -> u64 {
        self.0.solver().nodes_searched()
    }

    /// Fixed 16-byte state layout.
    fn state_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .0
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(turn=P{}, score={:+}, board={:?})",
            self.turn() + 1,
            self.0.score(),
            self.0.board().ring()
        )
    }
}

/// Solve a position given as a 14-slot ring oriented towards the mover.
///
/// Rings holding more than 36 seeds raise `ValueError`.
///
/// Returns `(best_pit, score)` with `best_pit = -1` for finished games.
#[pyfunction]
#[pyo3(signature = (ring, tt_bits = 20))]
pub fn solve_board(py: Python<'_>, ring: Vec<u8>, tt_bits: u32) -> PyResult<(i64, i32)> {
    let ring: [u8; FULL] = ring
        .try_into()
        .map_err(|_| PyValueError::new_err(format!("ring must have {FULL} slots")))?;
    let config = SolverConfig::default().with_tt_bits(tt_bits);
    config
        .validate()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let board = Board::try_from_ring(ring).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let result = py.allow_threads(|| Solver::new(&config).search_full(&board));
    Ok((result.best_move.map_or(-1, |pit| pit as i64), result.score))
}
