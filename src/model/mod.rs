//! Domain types for pilots, drones, missions, and conflict reporting.
//!
//! Everything here is a plain serde-friendly value type. The engine treats
//! all of these as read-only snapshots; mutation (committing an assignment,
//! editing a roster) belongs to whatever owns the data source.

pub mod conflict;
pub mod drone;
pub mod mission;
pub mod pilot;
pub mod proposal;

pub use conflict::{
    CheckSeverity, ConflictCheck, ConflictKind, DetectedConflict, ScanSeverity,
};
pub use drone::{Drone, DroneStatus};
pub use mission::{Mission, MissionPriority};
pub use pilot::{Pilot, PilotStatus};
pub use proposal::AssignmentProposal;
