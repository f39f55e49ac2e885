//! Drone fleet entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operational status of a drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneStatus {
    /// Ready for assignment.
    Available,
    /// Grounded for maintenance.
    Maintenance,
    /// Flying a mission.
    #[serde(rename = "In Use")]
    InUse,
}

impl fmt::Display for DroneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "Available",
            Self::Maintenance => "Maintenance",
            Self::InUse => "In Use",
        };
        f.write_str(label)
    }
}

impl FromStr for DroneStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "Maintenance" => Ok(Self::Maintenance),
            "In Use" => Ok(Self::InUse),
            other => Err(format!("unknown drone status: {other}")),
        }
    }
}

/// A drone in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    /// Unique drone identifier.
    #[serde(rename = "drone_id")]
    pub id: String,
    /// Airframe model name.
    pub model: String,
    /// Capability tokens (e.g. "RGB", "Thermal", "LiDAR").
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Operational status.
    pub status: DroneStatus,
    /// Current location.
    pub location: String,
    /// Mission ID the drone is currently committed to, if any.
    #[serde(default)]
    pub current_assignment: Option<String>,
    /// Next maintenance due date, as `YYYY-MM-DD`.
    pub maintenance_due: String,
}
