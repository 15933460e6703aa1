//! Solver configuration: table capacities.
//!
//! Every table is a direct-mapped array of `1 << bits` slots. The defaults
//! match the sizes the canonical Kalah(6,3) analysis was tuned for.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{KalahError, Result};
use super::hash::MAX_TABLE_BITS;

/// Table sizes for the solver and the enumeration phases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Transposition table: `1 << tt_bits` entries (default 2^22).
    pub tt_bits: u32,

    /// Game count table shared by total and perfect-play counting
    /// (default 2^22).
    pub count_bits: u32,

    /// Score distribution table (default 2^20).
    /// Each entry carries a 73-bucket histogram, so this one dominates memory.
    pub dist_bits: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tt_bits: 22,
            count_bits: 22,
            dist_bits: 20,
        }
    }
}

impl SolverConfig {
    /// Small tables for tests and embedding.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            tt_bits: 16,
            count_bits: 16,
            dist_bits: 12,
        }
    }

    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_tt_bits(mut self, bits: u32) -> Self {
        self.tt_bits = bits;
        self
    }

    #[must_use]
    pub fn with_count_bits(mut self, bits: u32) -> Self {
        self.count_bits = bits;
        self
    }

    #[must_use]
    pub fn with_dist_bits(mut self, bits: u32) -> Self {
        self.dist_bits = bits;
        self
    }

    /// Reject widths the hash cannot index.
    pub fn validate(&self) -> Result<()> {
        for (name, bits) in [
            ("tt_bits", self.tt_bits),
            ("count_bits", self.count_bits),
            ("dist_bits", self.dist_bits),
        ] {
            if bits == 0 || bits > MAX_TABLE_BITS {
                return Err(KalahError::InvalidConfig(format!(
                    "{name} must be in 1..={MAX_TABLE_BITS}, got {bits}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.tt_bits, 22);
        assert_eq!(config.count_bits, 22);
        assert_eq!(config.dist_bits, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::default()
            .with_tt_bits(18)
            .with_count_bits(17)
            .with_dist_bits(10);

        assert_eq!(config.tt_bits, 18);
        assert_eq!(config.count_bits, 17);
        assert_eq!(config.dist_bits, 10);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(SolverConfig::default().with_tt_bits(0).validate().is_err());
        assert!(SolverConfig::default().with_dist_bits(25).validate().is_err());
        assert!(SolverConfig::default().with_count_bits(24).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = SolverConfig::compact();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"tt_bits": 12}"#).unwrap();
        assert_eq!(config.tt_bits, 12);
        assert_eq!(config.dist_bits, 20);
    }
}
