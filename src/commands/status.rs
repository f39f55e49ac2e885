//! `skymatch status` command.

use crate::config::Config;
use crate::model::{DroneStatus, PilotStatus};
use crate::ports::store::FleetStore;

/// Execute the `status` command.
///
/// # Errors
///
/// Returns an error string if fleet data cannot be loaded.
pub fn run(config: &Config) -> Result<(), String> {
    let store = super::load_store(config)?;
    let pilots = store.pilots();
    let drones = store.drones();
    let missions = store.missions();

    let available_pilots = pilots.iter().filter(|p| p.status == PilotStatus::Available).count();
    let available_drones = drones.iter().filter(|d| d.status == DroneStatus::Available).count();

    println!("Pilots:   {} total, {available_pilots} available", pilots.len());
    println!("Drones:   {} total, {available_drones} available", drones.len());
    println!("Missions: {} total", missions.len());
    println!("Loaded:   {}", store.loaded_at().to_rfc3339());
    Ok(())
}
