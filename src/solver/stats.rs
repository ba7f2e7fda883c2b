//! Solver statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `solve` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Opening tiles tried.
    pub branches: u32,

    /// Search calls made, including leaves and pruned candidates.
    pub nodes: u64,

    /// Calls that found no legal continuation and scored the line.
    pub leaves: u64,

    /// Candidates rejected as illegal.
    pub pruned: u64,

    /// Moves actually applied.
    pub moves_applied: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SolveStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate search calls per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
