//! Environment-driven configuration.
//!
//! Every setting has a default, so `from_env` never fails; a value that is
//! present but unparseable falls back to the default with a warning. A
//! `.env` file in the working directory is honored when present.

use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Runtime configuration for the CLI and HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the pilot roster CSV (`PILOTS_CSV_PATH`).
    pub pilots_csv: PathBuf,
    /// Path to the drone fleet CSV (`DRONES_CSV_PATH`).
    pub drones_csv: PathBuf,
    /// Path to the mission list CSV (`MISSIONS_CSV_PATH`).
    pub missions_csv: PathBuf,
    /// HTTP listen port (`PORT`).
    pub port: u16,
    /// Minimum qualifying feasibility score (`FEASIBILITY_THRESHOLD`).
    pub feasibility_threshold: f64,
}

impl Config {
    /// Reads configuration from the environment, applying defaults.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            pilots_csv: path_var("PILOTS_CSV_PATH", "data/pilot_roster.csv"),
            drones_csv: path_var("DRONES_CSV_PATH", "data/drone_fleet.csv"),
            missions_csv: path_var("MISSIONS_CSV_PATH", "data/missions.csv"),
            port: parsed_var("PORT", 8000),
            feasibility_threshold: parsed_var("FEASIBILITY_THRESHOLD", 50.0),
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name).map_or_else(|_| PathBuf::from(default), PathBuf::from)
}

fn parsed_var<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(name, %raw, "unparseable value; using default {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        // Uses variable names no test environment sets.
        assert_eq!(path_var("SKYMATCH_TEST_UNSET_PATH", "data/x.csv"), PathBuf::from("data/x.csv"));
        assert_eq!(parsed_var("SKYMATCH_TEST_UNSET_PORT", 8000u16), 8000);
    }
}
