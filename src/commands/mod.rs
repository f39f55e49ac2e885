//! Command dispatch and handlers.

pub mod assign;
pub mod conflicts;
pub mod roster;
pub mod serve;
pub mod status;

use crate::adapters::csv_store::CsvFleetStore;
use crate::cli::Command;
use crate::config::Config;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env();
    match command {
        Command::Status => status::run(&config),
        Command::Pilots { available } => roster::pilots(&config, *available),
        Command::Drones { available } => roster::drones(&config, *available),
        Command::Missions => roster::missions(&config),
        Command::Assign { mission_id } => assign::run(&config, mission_id),
        Command::Alternatives { mission_id, exclude_pilot } => {
            assign::alternatives(&config, mission_id, exclude_pilot.as_deref())
        }
        Command::Conflicts => conflicts::run(&config),
        Command::Serve { port } => serve::run(&config, *port),
    }
}

/// Loads the fleet store for a command, mapping store errors to strings.
pub(crate) fn load_store(config: &Config) -> Result<CsvFleetStore, String> {
    CsvFleetStore::load(config).map_err(|e| format!("Failed to load fleet data: {e}"))
}
