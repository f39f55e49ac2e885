//! The seven compatibility rule checks.
//!
//! Each check takes a subset of {pilot, drone, mission} and returns exactly
//! one [`ConflictCheck`]. Requirement matching is case-insensitive substring
//! containment: a required token is satisfied when it appears inside any of
//! the entity's tokens, lower-cased on both sides. "Thermal Imaging" on a
//! pilot therefore covers a required skill of "thermal".

use chrono::NaiveDate;
use tracing::warn;

use crate::model::{
    CheckSeverity, ConflictCheck, Drone, DroneStatus, Mission, Pilot, PilotStatus,
};

/// Calendar date format used across every data boundary.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Capability vocabulary scanned for inside mission skill requirements.
pub const CAPABILITY_KEYWORDS: [&str; 5] = ["Thermal", "LiDAR", "RGB", "Hyperspectral", "4K"];

/// Whether `required` is covered by any of `tokens`, case-insensitively.
fn covered(required: &str, tokens: &[String]) -> bool {
    let needle = required.to_lowercase();
    tokens.iter().any(|token| token.to_lowercase().contains(&needle))
}

/// Required tokens not covered by any entity token.
fn missing<'a>(required: &'a [String], tokens: &[String]) -> Vec<&'a str> {
    required.iter().filter(|r| !covered(r, tokens)).map(String::as_str).collect()
}

/// Parses a `YYYY-MM-DD` date, logging and returning `None` on failure.
///
/// Checks that depend on dates degrade to their non-blocking outcome when
/// parsing fails; a bad date never raises.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(value, %err, "date parsing failed - skipping date check");
            None
        }
    }
}

/// Checks that the pilot covers every required mission skill.
#[must_use]
pub fn skill_match(pilot: &Pilot, mission: &Mission) -> ConflictCheck {
    let missing = missing(&mission.required_skills, &pilot.skills);
    if missing.is_empty() {
        ConflictCheck::resolved("skill_match", "All required skills present")
    } else {
        ConflictCheck::unresolved(
            "skill_mismatch",
            CheckSeverity::High,
            format!("Pilot missing skills: {}", missing.join(", ")),
        )
    }
}

/// Checks that the pilot covers every required certification.
#[must_use]
pub fn certification_match(pilot: &Pilot, mission: &Mission) -> ConflictCheck {
    let missing = missing(&mission.required_certs, &pilot.certifications);
    if missing.is_empty() {
        ConflictCheck::resolved("certification_match", "All required certifications present")
    } else {
        ConflictCheck::unresolved(
            "certification_mismatch",
            CheckSeverity::High,
            format!("Pilot missing certifications: {}", missing.join(", ")),
        )
    }
}

/// Checks that the pilot is based at the mission location.
#[must_use]
pub fn pilot_location_match(pilot: &Pilot, mission: &Mission) -> ConflictCheck {
    if pilot.location.to_lowercase() == mission.location.to_lowercase() {
        ConflictCheck::resolved("location_match", format!("Location match: {}", pilot.location))
    } else {
        ConflictCheck::unresolved(
            "location_mismatch",
            CheckSeverity::Medium,
            format!("Location mismatch: {} vs {}", pilot.location, mission.location),
        )
    }
}

/// Checks that the pilot is available and free before the mission starts.
///
/// A non-Available status is blocking regardless of dates. For an Available
/// pilot, `available_from` strictly after the mission start is blocking;
/// unparseable dates degrade the check to resolved.
#[must_use]
pub fn pilot_availability(pilot: &Pilot, mission: &Mission) -> ConflictCheck {
    if pilot.status != PilotStatus::Available {
        return ConflictCheck::unresolved(
            "pilot_unavailable",
            CheckSeverity::High,
            format!("Pilot status: {}. Available from: {}", pilot.status, pilot.available_from),
        );
    }

    if let (Some(available), Some(start)) =
        (parse_date(&pilot.available_from), parse_date(&mission.start_date))
    {
        if available > start {
            return ConflictCheck::unresolved(
                "availability_conflict",
                CheckSeverity::High,
                format!(
                    "Pilot available {}, mission starts {}",
                    pilot.available_from, mission.start_date
                ),
            );
        }
    }

    ConflictCheck::resolved("availability_ok", "Pilot available")
}

/// Checks that the drone is in Available status.
#[must_use]
pub fn drone_availability(drone: &Drone) -> ConflictCheck {
    if drone.status != DroneStatus::Available {
        return ConflictCheck::unresolved(
            "drone_unavailable",
            CheckSeverity::High,
            format!("Drone status: {}. Maintenance due: {}", drone.status, drone.maintenance_due),
        );
    }

    ConflictCheck::resolved("drone_available", "Drone available")
}

/// Checks that the drone covers the capabilities implied by mission skills.
///
/// Required capabilities are inferred by scanning each required skill for
/// the fixed capability vocabulary; a mission with no capability keyword in
/// its skills trivially passes.
#[must_use]
pub fn drone_capabilities(drone: &Drone, mission: &Mission) -> ConflictCheck {
    let mut required: Vec<&str> = Vec::new();
    for skill in &mission.required_skills {
        let skill = skill.to_lowercase();
        for keyword in CAPABILITY_KEYWORDS {
            if skill.contains(&keyword.to_lowercase()) {
                required.push(keyword);
            }
        }
    }

    if required.is_empty() {
        return ConflictCheck::resolved(
            "capability_not_required",
            "No specific capabilities required",
        );
    }

    let missing: Vec<&str> =
        required.into_iter().filter(|cap| !covered(cap, &drone.capabilities)).collect();
    if missing.is_empty() {
        ConflictCheck::resolved("capability_match", "Drone has required capabilities")
    } else {
        ConflictCheck::unresolved(
            "capability_mismatch",
            CheckSeverity::High,
            format!("Drone missing capabilities: {}", missing.join(", ")),
        )
    }
}

/// Checks that the drone is staged at the mission location.
#[must_use]
pub fn drone_location_match(drone: &Drone, mission: &Mission) -> ConflictCheck {
    if drone.location.to_lowercase() == mission.location.to_lowercase() {
        ConflictCheck::resolved(
            "drone_location_match",
            format!("Drone location match: {}", drone.location),
        )
    } else {
        ConflictCheck::unresolved(
            "drone_location_mismatch",
            CheckSeverity::Medium,
            format!("Drone location mismatch: {} vs {}", drone.location, mission.location),
        )
    }
}
