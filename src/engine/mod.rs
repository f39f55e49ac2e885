//! Assignment feasibility and conflict-detection engine.
//!
//! The engine is synchronous, pure computation over in-memory roster
//! snapshots. The one injected impurity is the [`Clock`], consumed only by
//! the urgent-pending-mission rule in the scanner. Inputs are immutable per
//! call, so a shared engine is safe to use from concurrent requests.

pub mod assign;
pub mod checks;
pub mod scan;
pub mod score;

use crate::adapters::clock::LiveClock;
use crate::ports::clock::Clock;

/// Rule-based conflict detection and assignment feasibility scoring.
pub struct ConflictEngine {
    feasibility_threshold: f64,
    clock: Box<dyn Clock>,
}

impl ConflictEngine {
    /// Minimum score a proposal must reach to qualify in the search.
    pub const DEFAULT_THRESHOLD: f64 = 50.0;

    /// Creates an engine with the default threshold and the live clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }

    /// Creates an engine with a custom feasibility threshold.
    #[must_use]
    pub fn with_threshold(feasibility_threshold: f64) -> Self {
        Self { feasibility_threshold, clock: Box::new(LiveClock) }
    }

    /// Replaces the clock, e.g. with a fixed clock under test.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The configured feasibility threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.feasibility_threshold
    }
}

impl Default for ConflictEngine {
    fn default() -> Self {
        Self::new()
    }
}
