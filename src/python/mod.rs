//! Python bindings for the Kalah solver.
//!
//! # Quick Start
//!
//! ```python
//! import kalah_solver as ks
//!
//! session = ks.Session()
//! session.init(clear_tables=True)
//! best = session.solve()           # mover's best pit
//! session.move(best)               # -1 invalid, 0 turn ended, 1 move again
//! print(session.board, session.turn, session.score)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// kalah_solver: perfect play for Kalah(6,3) with empty capture.
#[pymodule]
fn kalah_solver(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_function(wrap_pyfunction!(solve_board, m)?)?;
    Ok(())
}
