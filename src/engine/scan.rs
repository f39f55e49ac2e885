//! System-wide conflict scan over the full fleet.
//!
//! `detect_all` composes four passes in order: pilot booking checks, drone
//! booking checks, a per-mission feasibility audit, and the urgent
//! reassignment pass over everything found so far. The output preserves
//! that order, and within each pass the iteration order of the input
//! collections.

use crate::model::{
    ConflictKind, DetectedConflict, Drone, Mission, Pilot, ScanSeverity,
};

use super::checks::parse_date;
use super::ConflictEngine;

/// Best-pairing scores below this are reported as low-feasibility conflicts.
const LOW_FEASIBILITY_FLOOR: f64 = 60.0;
/// A mission missing resources and starting within this many days is urgent.
const URGENT_WINDOW_DAYS: i64 = 3;

impl ConflictEngine {
    /// Scans the whole fleet for scheduling and capability conflicts.
    #[must_use]
    pub fn detect_all(
        &self,
        pilots: &[Pilot],
        drones: &[Drone],
        missions: &[Mission],
    ) -> Vec<DetectedConflict> {
        let mut conflicts = Vec::new();

        for pilot in pilots {
            let assigned = assignments_of(pilot.current_assignment.as_deref(), missions);
            for (first, second) in overlapping_pairs(&assigned) {
                conflicts.push(
                    DetectedConflict::new(
                        ConflictKind::PilotOverlap,
                        &pilot.id,
                        ScanSeverity::High,
                        format!("Pilot {} has overlapping assignments", pilot.name),
                        format!(
                            "Reassign pilot {} to avoid date conflict between {} and {}",
                            pilot.name, first.client, second.client
                        ),
                    )
                    .with_affected(vec![pilot.id.clone(), first.id.clone(), second.id.clone()])
                    .with_missions(vec![first.id.clone(), second.id.clone()]),
                );
            }

            if let Some(assignment) = &pilot.current_assignment {
                if assigned.is_empty() {
                    conflicts.push(
                        DetectedConflict::new(
                            ConflictKind::PilotAssignmentMismatch,
                            &pilot.id,
                            ScanSeverity::Medium,
                            format!("Pilot {} has assignment but not in mission list", pilot.name),
                            "Update pilot assignment status",
                        )
                        .with_affected(vec![pilot.id.clone(), assignment.clone()])
                        .with_missions(vec![assignment.clone()]),
                    );
                }
            }
        }

        for drone in drones {
            let assigned = assignments_of(drone.current_assignment.as_deref(), missions);
            for (first, second) in overlapping_pairs(&assigned) {
                conflicts.push(
                    DetectedConflict::new(
                        ConflictKind::DroneOverlap,
                        &drone.id,
                        ScanSeverity::High,
                        format!("Drone {} has overlapping assignments", drone.model),
                        format!(
                            "Reassign drone {} to avoid date conflict between {} and {}",
                            drone.model, first.client, second.client
                        ),
                    )
                    .with_affected(vec![drone.id.clone(), first.id.clone(), second.id.clone()])
                    .with_missions(vec![first.id.clone(), second.id.clone()]),
                );
            }

            if let Some(assignment) = &drone.current_assignment {
                if assigned.is_empty() {
                    conflicts.push(
                        DetectedConflict::new(
                            ConflictKind::DroneAssignmentMismatch,
                            &drone.id,
                            ScanSeverity::Medium,
                            format!("Drone {} has assignment but not in mission list", drone.model),
                            "Update drone assignment status",
                        )
                        .with_affected(vec![drone.id.clone(), assignment.clone()])
                        .with_missions(vec![assignment.clone()]),
                    );
                }
            }
        }

        for mission in missions {
            match self.find_best(mission, pilots, drones) {
                Some(best) if best.feasibility_score < LOW_FEASIBILITY_FLOOR => {
                    conflicts.push(
                        DetectedConflict::new(
                            ConflictKind::LowFeasibility,
                            &mission.id,
                            ScanSeverity::Medium,
                            format!("Mission {} has low feasibility assignment", mission.client),
                            "Consider reassignment or skill development",
                        )
                        .with_affected(vec![mission.id.clone()])
                        .with_missions(vec![mission.id.clone()]),
                    );
                }
                Some(_) => {}
                None => {
                    conflicts.push(
                        DetectedConflict::new(
                            ConflictKind::NoAssignment,
                            &mission.id,
                            ScanSeverity::High,
                            format!("No suitable assignment found for {}", mission.client),
                            "Urgent: hire additional staff or delay mission",
                        )
                        .with_affected(vec![mission.id.clone()])
                        .with_missions(vec![mission.id.clone()]),
                    );
                }
            }
        }

        let urgent = self.urgent_actions(pilots, drones, missions, &conflicts);
        conflicts.extend(urgent);
        conflicts
    }

    /// Computes urgent reassignment recommendations from detected conflicts.
    ///
    /// For each high-severity conflict anchored on a pilot or drone, looks
    /// up the affected missions and searches for replacements; a mission
    /// with no replacement at all escalates to `Critical`. Independently,
    /// any mission missing an assigned pilot or drone and starting within
    /// the urgency window is flagged.
    fn urgent_actions(
        &self,
        pilots: &[Pilot],
        drones: &[Drone],
        missions: &[Mission],
        conflicts: &[DetectedConflict],
    ) -> Vec<DetectedConflict> {
        let mut actions = Vec::new();

        for conflict in conflicts.iter().filter(|c| c.severity == ScanSeverity::High) {
            let (reassign, no_alternative) = if conflict.kind.involves_pilot() {
                (ConflictKind::UrgentReassignPilot, ConflictKind::UrgentNoPilot)
            } else if conflict.kind.involves_drone() {
                (ConflictKind::UrgentReassignDrone, ConflictKind::UrgentNoDrone)
            } else {
                continue;
            };

            for mission_id in &conflict.mission_ids {
                let Some(mission) = missions.iter().find(|m| &m.id == mission_id) else {
                    continue;
                };
                let alternatives = self.find_alternatives(mission, pilots, drones, None);
                let action = if let Some(top) = alternatives.first() {
                    let resource = if conflict.kind.involves_pilot() {
                        format!("pilot {}", top.pilot.name)
                    } else {
                        format!("drone {}", top.drone.model)
                    };
                    DetectedConflict::new(
                        reassign,
                        mission_id,
                        ScanSeverity::High,
                        format!(
                            "URGENT: Alternative {} available for {}",
                            if conflict.kind.involves_pilot() { "pilot" } else { "drone" },
                            mission.client
                        ),
                        format!(
                            "Immediately reassign to {resource} with feasibility {:.1}%",
                            top.feasibility_score
                        ),
                    )
                } else {
                    let (resource, remedy) = if conflict.kind.involves_pilot() {
                        ("pilot", "Immediate action required: Hire new pilot or delay mission")
                    } else {
                        ("drone", "Immediate action required: Acquire new drone or delay mission")
                    };
                    DetectedConflict::new(
                        no_alternative,
                        mission_id,
                        ScanSeverity::Critical,
                        format!("URGENT: No alternative {resource} available for {}", mission.client),
                        remedy,
                    )
                };
                actions.push(
                    action
                        .with_affected(vec![mission_id.clone()])
                        .with_missions(vec![mission_id.clone()]),
                );
            }
        }

        let today = self.clock.now().date_naive();
        for mission in missions {
            let has_pilot = pilots
                .iter()
                .any(|p| p.current_assignment.as_deref() == Some(mission.id.as_str()));
            let has_drone = drones
                .iter()
                .any(|d| d.current_assignment.as_deref() == Some(mission.id.as_str()));
            if has_pilot && has_drone {
                continue;
            }

            let Some(start) = parse_date(&mission.start_date) else {
                continue;
            };
            let days_until_start = (start - today).num_days();
            if !(0..=URGENT_WINDOW_DAYS).contains(&days_until_start) {
                continue;
            }

            let mut missing = Vec::new();
            if !has_pilot {
                missing.push("pilot");
            }
            if !has_drone {
                missing.push("drone");
            }
            actions.push(
                DetectedConflict::new(
                    ConflictKind::UrgentPendingMission,
                    &mission.id,
                    ScanSeverity::High,
                    format!(
                        "URGENT: Mission {} starts in {days_until_start} days with missing {}",
                        mission.client,
                        missing.join(", ")
                    ),
                    "Immediately assign missing resources to meet deadline",
                )
                .with_affected(vec![mission.id.clone()])
                .with_missions(vec![mission.id.clone()]),
            );
        }

        actions
    }
}

/// Missions whose id equals the entity's current assignment.
///
/// The assignment field holds a single mission id, so this returns zero or
/// one mission for consistent data; longer lists only arise from duplicate
/// mission ids in the input.
fn assignments_of<'a>(assignment: Option<&str>, missions: &'a [Mission]) -> Vec<&'a Mission> {
    let Some(id) = assignment else {
        return Vec::new();
    };
    missions.iter().filter(|m| m.id == id).collect()
}

/// Pairs of missions whose date ranges overlap.
///
/// Ranges overlap when `start1 <= end2 && start2 <= end1`; sharing a
/// boundary day counts as overlapping, adjacent ranges do not. Pairs with
/// unparseable dates are logged by the parser and skipped.
fn overlapping_pairs<'a>(assigned: &[&'a Mission]) -> Vec<(&'a Mission, &'a Mission)> {
    let mut pairs = Vec::new();
    for i in 0..assigned.len() {
        for j in (i + 1)..assigned.len() {
            let dates = (
                parse_date(&assigned[i].start_date),
                parse_date(&assigned[i].end_date),
                parse_date(&assigned[j].start_date),
                parse_date(&assigned[j].end_date),
            );
            if let (Some(start1), Some(end1), Some(start2), Some(end2)) = dates {
                if start1 <= end2 && start2 <= end1 {
                    pairs.push((assigned[i], assigned[j]));
                }
            }
        }
    }
    pairs
}
