//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected by the solver.
///
/// Counters accumulate across calls until [`SearchStats::reset`], matching
/// the node counter the CLI reports for a whole iterative-deepening run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior nodes expanded (depth budget left, not terminal, no TT cutoff).
    pub nodes: u64,

    /// Transposition table probes.
    pub tt_probes: u64,

    /// Probes that found the exact key.
    pub tt_hits: u64,

    /// Probes answered from the table without searching.
    pub tt_cutoffs: u64,

    /// Iterative deepening passes run.
    pub iterations: u32,

    /// Deepest pass of the last full solve.
    pub max_depth: u32,

    /// Total time spent in full solves (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of probes that hit.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64
        }
    }

    /// Nodes expanded per second of full-solve time.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 1_000_000;
        stats.tt_probes = 4;
        stats.tt_hits = 1;

        assert_eq!(stats.nodes_per_second(), 1000.0);
        assert_eq!(stats.hit_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.iterations = 5;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
