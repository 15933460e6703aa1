//! Exhaustive game-tree enumeration.
//!
//! ## Phases
//!
//! 1. **Total games**: every move sequence from the root to a finished board.
//! 2. **Score distribution**: how those games end, as a margin histogram.
//! 3. **Perfect play**: games where both players only ever play moves that
//!    keep the solved value.
//!
//! Each phase memoizes through its own direct-mapped table. Phases 1 and 3
//! share the count table and clear it in between; phase 2 allocates its
//! histogram table for the duration of the phase only.
//!
//! ## Usage
//!
//! ```no_run
//! use kalah_solver::core::{Board, SolverConfig};
//! use kalah_solver::enumerate::Enumerator;
//!
//! let mut enumerator = Enumerator::new(SolverConfig::default()).unwrap();
//! let analysis = enumerator.analyze(&Board::new()).unwrap();
//! println!("{} games, {} won by P1 under perfect play", analysis.total, analysis.perfect_wins);
//! ```

pub mod count;
pub mod distribution;
pub mod table;

use log::info;

use crate::core::board::Board;
use crate::core::config::SolverConfig;
use crate::core::error::Result;
use crate::search::{SearchResult, Solver};

pub use count::{count_all, count_perfect};
pub use distribution::{percent, score_distribution, OutcomeSummary, ScoreDistribution, BUCKETS};
pub use table::{CountTable, DistTable};

/// Results of all three phases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// Games reachable from the root.
    pub total: u64,
    /// Final margins of those games.
    pub distribution: ScoreDistribution,
    /// Solved root.
    pub root: SearchResult,
    /// Perfect-play games, counted only when the root mover wins.
    pub perfect_wins: u64,
}

impl Analysis {
    /// How many games there are per perfect-play win.
    #[must_use]
    pub fn one_in_every(&self) -> Option<u64> {
        (self.perfect_wins != 0).then(|| self.total / self.perfect_wins)
    }
}

/// Enumeration context: the count table plus a solver for perfect play.
pub struct Enumerator {
    config: SolverConfig,
    counts: CountTable,
    solver: Solver,
}

impl Enumerator {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            counts: CountTable::new(config.count_bits),
            solver: Solver::new(&config),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Phase 1: total game count. Starts from a cleared count table.
    pub fn count_all(&mut self, board: &Board) -> u64 {
        self.counts.clear();
        count_all(&mut self.counts, board)
    }

    /// Phase 2: margin histogram. Allocates and releases its own table.
    ///
    /// Boards beyond [`MAX_SEEDS`](crate::core::MAX_SEEDS) are rejected: their margins would fall
    /// outside the histogram.
    pub fn score_distribution(&mut self, board: &Board) -> Result<ScoreDistribution> {
        board.checked()?;
        let mut table = DistTable::try_new(self.config.dist_bits)?;
        Ok(score_distribution(&mut table, board))
    }

    /// Games on perfect-play lines, whatever the root value.
    pub fn count_perfect(&mut self, board: &Board) -> u64 {
        self.counts.clear();
        count_perfect(&mut self.counts, &mut self.solver, board)
    }

    /// Phase 3: solve the root, then count perfect-play games if the root
    /// mover wins. A drawn or lost root counts zero.
    pub fn perfect_play_wins(&mut self, board: &Board) -> (SearchResult, u64) {
        let root = self.solver.search_full(board);
        let wins = if root.score > 0 {
            self.count_perfect(board)
        } else {
            0
        };
        (root, wins)
    }

    /// Run all three phases in order.
    pub fn analyze(&mut self, board: &Board) -> Result<Analysis> {
        board.checked()?;
        info!("counting total games");
        let total = self.count_all(board);
        info!("total games: {total}");

        info!("computing outcome distribution");
        let distribution = self.score_distribution(board)?;
        let outcomes = distribution.outcomes();
        info!(
            "P1 wins {}, draws {}, P2 wins {}",
            outcomes.first_wins, outcomes.draws, outcomes.second_wins
        );

        info!("counting perfect-play games");
        let (root, perfect_wins) = self.perfect_play_wins(board);
        info!("perfect-play score {:+}, P1 wins {perfect_wins}", root.score);

        Ok(Analysis {
            total,
            distribution,
            root,
            perfect_wins,
        })
    }
}
