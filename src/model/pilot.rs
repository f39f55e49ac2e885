//! Pilot roster entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Duty status of a pilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilotStatus {
    /// Free to take a new mission.
    Available,
    /// Currently committed to a mission.
    Assigned,
    /// Off roster until further notice.
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl fmt::Display for PilotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "Available",
            Self::Assigned => "Assigned",
            Self::OnLeave => "On Leave",
        };
        f.write_str(label)
    }
}

impl FromStr for PilotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "Assigned" => Ok(Self::Assigned),
            "On Leave" => Ok(Self::OnLeave),
            other => Err(format!("unknown pilot status: {other}")),
        }
    }
}

/// A pilot on the roster.
///
/// `skills` and `certifications` are free-text tokens; matching against
/// mission requirements is case-insensitive substring containment, so
/// "Thermal Imaging" satisfies a required skill of "thermal".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    /// Unique pilot identifier.
    #[serde(rename = "pilot_id")]
    pub id: String,
    /// Full name.
    pub name: String,
    /// Skill tokens.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Certification tokens.
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Current home location.
    pub location: String,
    /// Duty status.
    pub status: PilotStatus,
    /// Mission ID the pilot is currently committed to, if any.
    #[serde(default)]
    pub current_assignment: Option<String>,
    /// Earliest date the pilot can start, as `YYYY-MM-DD`.
    pub available_from: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_display_and_from_str() {
        for status in [PilotStatus::Available, PilotStatus::Assigned, PilotStatus::OnLeave] {
            let parsed: PilotStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn status_rejects_unknown_strings() {
        assert!("Busy".parse::<PilotStatus>().is_err());
        assert!("available".parse::<PilotStatus>().is_err());
    }

    #[test]
    fn serializes_on_leave_with_space() {
        let json = serde_json::to_string(&PilotStatus::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");
    }
}
