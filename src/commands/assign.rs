//! `skymatch assign` and `skymatch alternatives` commands.

use crate::config::Config;
use crate::engine::ConflictEngine;
use crate::model::AssignmentProposal;
use crate::ports::store::FleetStore;

/// Execute the `assign` command.
///
/// # Errors
///
/// Returns an error string if fleet data cannot be loaded, the mission id
/// is unknown, or no pairing clears the feasibility threshold.
pub fn run(config: &Config, mission_id: &str) -> Result<(), String> {
    let store = super::load_store(config)?;
    let mission =
        store.mission(mission_id).ok_or_else(|| format!("Mission not found: {mission_id}"))?;

    let engine = ConflictEngine::with_threshold(config.feasibility_threshold);
    let pilots = store.pilots();
    let drones = store.drones();
    let Some(best) = engine.find_best(&mission, &pilots, &drones) else {
        return Err(format!("No suitable pilot-drone pairing found for {mission_id}"));
    };

    println!("{}", format_proposal(&best));
    Ok(())
}

/// Execute the `alternatives` command.
///
/// # Errors
///
/// Returns an error string if fleet data cannot be loaded or the mission id
/// is unknown. An empty result is reported, not an error.
pub fn alternatives(
    config: &Config,
    mission_id: &str,
    exclude_pilot: Option<&str>,
) -> Result<(), String> {
    let store = super::load_store(config)?;
    let mission =
        store.mission(mission_id).ok_or_else(|| format!("Mission not found: {mission_id}"))?;

    let engine = ConflictEngine::with_threshold(config.feasibility_threshold);
    let pilots = store.pilots();
    let drones = store.drones();
    let proposals = engine.find_alternatives(&mission, &pilots, &drones, exclude_pilot);

    if proposals.is_empty() {
        println!("No qualifying pairings for {mission_id}");
        return Ok(());
    }
    for (rank, proposal) in proposals.iter().enumerate() {
        println!(
            "{}. {} + {} at {:.1}%",
            rank + 1,
            proposal.pilot.name,
            proposal.drone.model,
            proposal.feasibility_score
        );
    }
    Ok(())
}

/// Formats a proposal as a human-readable report.
fn format_proposal(proposal: &AssignmentProposal) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Mission: {} ({})", proposal.mission.id, proposal.mission.client));
    lines.push(format!("Pilot:   {} ({})", proposal.pilot.name, proposal.pilot.id));
    lines.push(format!("Drone:   {} ({})", proposal.drone.model, proposal.drone.id));
    lines.push(format!("Feasibility: {:.1}%", proposal.feasibility_score));
    lines.push(format!("Reasoning: {}", proposal.reasoning));
    if !proposal.conflicts.is_empty() {
        lines.push(String::new());
        lines.push("Unresolved checks:".to_string());
        for check in &proposal.conflicts {
            lines.push(format!(
                "  [{}] {}",
                check.severity.to_string().to_uppercase(),
                check.message
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CheckSeverity, ConflictCheck, Drone, DroneStatus, Mission, MissionPriority, Pilot,
        PilotStatus,
    };

    #[test]
    fn report_includes_unresolved_checks() {
        let proposal = AssignmentProposal {
            mission: Mission {
                id: "PRJ001".to_string(),
                client: "Acme Agriculture".to_string(),
                location: "Austin".to_string(),
                required_skills: vec![],
                required_certs: vec![],
                start_date: "2024-01-05".to_string(),
                end_date: "2024-01-10".to_string(),
                priority: MissionPriority::Standard,
            },
            pilot: Pilot {
                id: "P001".to_string(),
                name: "Dana Reyes".to_string(),
                skills: vec![],
                certifications: vec![],
                location: "Denver".to_string(),
                status: PilotStatus::Available,
                current_assignment: None,
                available_from: "2024-01-01".to_string(),
            },
            drone: Drone {
                id: "D001".to_string(),
                model: "Raptor X2".to_string(),
                capabilities: vec![],
                status: DroneStatus::Available,
                location: "Austin".to_string(),
                current_assignment: None,
                maintenance_due: "2024-06-01".to_string(),
            },
            conflicts: vec![ConflictCheck::unresolved(
                "location_mismatch",
                CheckSeverity::Medium,
                "Location mismatch: Denver vs Austin",
            )],
            feasibility_score: 85.0,
            reasoning: "High feasibility assignment (85.0%) | Issues: Location mismatch: Denver vs Austin".to_string(),
        };

        let report = format_proposal(&proposal);
        assert!(report.contains("Feasibility: 85.0%"));
        assert!(report.contains("[MEDIUM] Location mismatch: Denver vs Austin"));
    }
}
