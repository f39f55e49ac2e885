//! Mission (project) entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scheduling priority of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPriority {
    /// Normal scheduling.
    Standard,
    /// Elevated priority.
    High,
    /// Needs resources immediately.
    Urgent,
}

impl fmt::Display for MissionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Standard => "Standard",
            Self::High => "High",
            Self::Urgent => "Urgent",
        };
        f.write_str(label)
    }
}

impl FromStr for MissionPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "High" => Ok(Self::High),
            "Urgent" => Ok(Self::Urgent),
            other => Err(format!("unknown mission priority: {other}")),
        }
    }
}

/// A client mission needing a pilot and a drone.
///
/// Callers are expected to supply `start_date <= end_date`; the engine does
/// not enforce the ordering but tolerates violations without failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique mission identifier.
    #[serde(rename = "project_id")]
    pub id: String,
    /// Client name.
    pub client: String,
    /// Mission location.
    pub location: String,
    /// Skill tokens the assigned pilot must cover.
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Certification tokens the assigned pilot must cover.
    #[serde(default)]
    pub required_certs: Vec<String>,
    /// Start date, as `YYYY-MM-DD`.
    pub start_date: String,
    /// End date, as `YYYY-MM-DD`.
    pub end_date: String,
    /// Scheduling priority.
    pub priority: MissionPriority,
}
