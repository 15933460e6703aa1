//! Error types for the solver.
//!
//! Invalid move requests are reported to callers, never panicked on.
//! Cache collisions are not errors: the tables evict silently.

/// Solver errors.
#[derive(thiserror::Error, Debug)]
pub enum KalahError {
    /// Pit index out of range or empty.
    #[error("invalid move: pit {pit} is empty or out of range")]
    InvalidMove { pit: usize },

    /// Board holds more seeds than the score scale covers.
    #[error("board holds {total} seeds, at most {max} are supported")]
    TooManySeeds { total: u32, max: u32 },

    /// A memoization table could not be allocated.
    #[error("could not allocate {table} table with {entries} entries")]
    TableAllocation { table: &'static str, entries: usize },

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error(transparent)]
    ConfigParse(#[from] serde_json::Error),

    /// Session snapshot could not be encoded or decoded.
    #[error("session snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, KalahError>;
