//! Roster listing commands: `pilots`, `drones`, `missions`.

use crate::config::Config;
use crate::model::{DroneStatus, PilotStatus};
use crate::ports::store::FleetStore;

/// Execute the `pilots` command.
///
/// # Errors
///
/// Returns an error string if fleet data cannot be loaded.
pub fn pilots(config: &Config, available_only: bool) -> Result<(), String> {
    let store = super::load_store(config)?;
    let mut pilots = store.pilots();
    if available_only {
        pilots.retain(|p| p.status == PilotStatus::Available);
    }
    if pilots.is_empty() {
        println!("No pilots found");
        return Ok(());
    }
    for pilot in &pilots {
        println!(
            "{}  {}  {}  {}  skills: {}",
            pilot.id,
            pilot.name,
            pilot.location,
            pilot.status,
            pilot.skills.join(", ")
        );
    }
    Ok(())
}

/// Execute the `drones` command.
///
/// # Errors
///
/// Returns an error string if fleet data cannot be loaded.
pub fn drones(config: &Config, available_only: bool) -> Result<(), String> {
    let store = super::load_store(config)?;
    let mut drones = store.drones();
    if available_only {
        drones.retain(|d| d.status == DroneStatus::Available);
    }
    if drones.is_empty() {
        println!("No drones found");
        return Ok(());
    }
    for drone in &drones {
        println!(
            "{}  {}  {}  {}  capabilities: {}",
            drone.id,
            drone.model,
            drone.location,
            drone.status,
            drone.capabilities.join(", ")
        );
    }
    Ok(())
}

/// Execute the `missions` command.
///
/// # Errors
///
/// Returns an error string if fleet data cannot be loaded.
pub fn missions(config: &Config) -> Result<(), String> {
    let store = super::load_store(config)?;
    let missions = store.missions();
    if missions.is_empty() {
        println!("No missions found");
        return Ok(());
    }
    for mission in &missions {
        println!(
            "{}  {}  {}  {} to {}  priority: {}",
            mission.id,
            mission.client,
            mission.location,
            mission.start_date,
            mission.end_date,
            mission.priority
        );
    }
    Ok(())
}
