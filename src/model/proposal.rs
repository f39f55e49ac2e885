//! Assignment proposal produced by the search.

use serde::{Deserialize, Serialize};

use super::conflict::ConflictCheck;
use super::drone::Drone;
use super::mission::Mission;
use super::pilot::Pilot;

/// A scored pilot-drone pairing for a mission.
///
/// `conflicts` holds only the unresolved checks; a perfect pairing has an
/// empty list and a score of 100.0. Proposals are ephemeral — the search
/// builds one per candidate pair and never stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentProposal {
    /// The mission being staffed.
    pub mission: Mission,
    /// The proposed pilot.
    pub pilot: Pilot,
    /// The proposed drone.
    pub drone: Drone,
    /// Unresolved checks for this pairing.
    pub conflicts: Vec<ConflictCheck>,
    /// Feasibility in [0, 100], rounded to one decimal.
    pub feasibility_score: f64,
    /// Two-part explanation: feasibility tier, then issues or all-clear.
    pub reasoning: String,
}
