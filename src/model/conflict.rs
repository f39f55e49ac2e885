//! Conflict-check and system-conflict result types.
//!
//! Two severity scales coexist on purpose. A per-pairing [`ConflictCheck`]
//! is three-valued; a fleet-wide [`DetectedConflict`] adds `Critical`, which
//! is only ever produced by the urgent-reassignment pass when no alternative
//! resource exists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single pairing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSeverity {
    /// Informational; no score penalty.
    Low,
    /// Degrades the pairing but does not block it.
    Medium,
    /// Blocks or heavily penalizes the pairing.
    High,
}

impl fmt::Display for CheckSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(label)
    }
}

/// Outcome of one compatibility rule for a pilot/drone/mission subset.
///
/// `resolved = true` means the rule found no issue, not that anything was
/// fixed. Resolved checks never contribute to the feasibility penalty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictCheck {
    /// Rule tag, e.g. `skill_mismatch` or `availability_ok`.
    #[serde(rename = "check_type")]
    pub kind: String,
    /// Severity when unresolved.
    pub severity: CheckSeverity,
    /// Human-readable detail.
    pub message: String,
    /// `true` when the rule found no issue.
    pub resolved: bool,
}

impl ConflictCheck {
    /// Builds an unresolved check at the given severity.
    #[must_use]
    pub fn unresolved(kind: &str, severity: CheckSeverity, message: impl Into<String>) -> Self {
        Self { kind: kind.to_string(), severity, message: message.into(), resolved: false }
    }

    /// Builds a resolved (no-issue) check. Resolved checks are always `Low`.
    #[must_use]
    pub fn resolved(kind: &str, message: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            severity: CheckSeverity::Low,
            message: message.into(),
            resolved: true,
        }
    }
}

/// Severity of a fleet-wide conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanSeverity {
    /// Informational.
    Low,
    /// Needs attention but not blocking.
    Medium,
    /// Blocking; a resource or mission is at risk.
    High,
    /// No recovery path exists with current resources.
    Critical,
}

impl fmt::Display for ScanSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Category of a fleet-wide conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// A pilot's assigned missions overlap in time.
    PilotOverlap,
    /// A pilot's assignment points at a mission that does not exist.
    PilotAssignmentMismatch,
    /// A drone's assigned missions overlap in time.
    DroneOverlap,
    /// A drone's assignment points at a mission that does not exist.
    DroneAssignmentMismatch,
    /// The best available pairing for a mission scores poorly.
    LowFeasibility,
    /// No pairing for a mission clears the feasibility threshold.
    NoAssignment,
    /// A replacement pilot is available for a conflicted mission.
    UrgentReassignPilot,
    /// No replacement pilot exists for a conflicted mission.
    UrgentNoPilot,
    /// A replacement drone is available for a conflicted mission.
    UrgentReassignDrone,
    /// No replacement drone exists for a conflicted mission.
    UrgentNoDrone,
    /// A mission starts within days but is missing a pilot or drone.
    UrgentPendingMission,
}

impl ConflictKind {
    /// Stable snake_case tag, used to derive conflict ids.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::PilotOverlap => "pilot_overlap",
            Self::PilotAssignmentMismatch => "pilot_assignment_mismatch",
            Self::DroneOverlap => "drone_overlap",
            Self::DroneAssignmentMismatch => "drone_assignment_mismatch",
            Self::LowFeasibility => "low_feasibility",
            Self::NoAssignment => "no_assignment",
            Self::UrgentReassignPilot => "urgent_reassign_pilot",
            Self::UrgentNoPilot => "urgent_no_pilot",
            Self::UrgentReassignDrone => "urgent_reassign_drone",
            Self::UrgentNoDrone => "urgent_no_drone",
            Self::UrgentPendingMission => "urgent_pending_mission",
        }
    }

    /// Whether this conflict is anchored on a pilot resource.
    #[must_use]
    pub fn involves_pilot(self) -> bool {
        matches!(self, Self::PilotOverlap | Self::PilotAssignmentMismatch)
    }

    /// Whether this conflict is anchored on a drone resource.
    #[must_use]
    pub fn involves_drone(self) -> bool {
        matches!(self, Self::DroneOverlap | Self::DroneAssignmentMismatch)
    }
}

/// A conflict found by the system-wide scan.
///
/// `mission_ids` carries the affected missions as a typed reference so
/// downstream passes never have to recover them from `affected_items` by
/// string pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedConflict {
    /// Identifier derived from the kind tag and the anchoring entity id.
    pub conflict_id: String,
    /// Conflict category.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub description: String,
    /// Severity on the four-level scan scale.
    pub severity: ScanSeverity,
    /// All entity ids (pilots, drones, missions) touched by the conflict.
    pub affected_items: Vec<String>,
    /// Mission ids touched by the conflict.
    pub mission_ids: Vec<String>,
    /// Suggested operator action.
    pub recommendation: String,
}

impl DetectedConflict {
    /// Builds a conflict with the id derived from `kind` and `entity_id`.
    #[must_use]
    pub fn new(
        kind: ConflictKind,
        entity_id: &str,
        severity: ScanSeverity,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            conflict_id: format!("{}_{entity_id}", kind.tag()),
            kind,
            description: description.into(),
            severity,
            affected_items: Vec::new(),
            mission_ids: Vec::new(),
            recommendation: recommendation.into(),
        }
    }

    /// Sets the affected entity ids.
    #[must_use]
    pub fn with_affected(mut self, items: Vec<String>) -> Self {
        self.affected_items = items;
        self
    }

    /// Sets the affected mission ids.
    #[must_use]
    pub fn with_missions(mut self, missions: Vec<String>) -> Self {
        self.mission_ids = missions;
        self
    }
}
