//! `skymatch conflicts` command.

use crate::config::Config;
use crate::engine::ConflictEngine;
use crate::ports::store::FleetStore;

/// Execute the `conflicts` command.
///
/// # Errors
///
/// Returns an error string if fleet data cannot be loaded. Detected
/// conflicts are report output, not an error.
pub fn run(config: &Config) -> Result<(), String> {
    let store = super::load_store(config)?;
    let engine = ConflictEngine::with_threshold(config.feasibility_threshold);

    let pilots = store.pilots();
    let drones = store.drones();
    let missions = store.missions();
    let conflicts = engine.detect_all(&pilots, &drones, &missions);

    if conflicts.is_empty() {
        println!("No conflicts detected");
        return Ok(());
    }

    println!("{} conflict(s) detected", conflicts.len());
    println!();
    for conflict in &conflicts {
        println!("  [{}] {}", conflict.severity.to_string().to_uppercase(), conflict.description);
        println!("         affected: {}", conflict.affected_items.join(", "));
        println!("         recommendation: {}", conflict.recommendation);
    }
    Ok(())
}
