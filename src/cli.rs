//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `skymatch`.
#[derive(Debug, Parser)]
#[command(
    name = "skymatch",
    version,
    about = "Match pilots and drones to missions and surface fleet conflicts"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show fleet counts and data freshness.
    Status,
    /// List pilots.
    Pilots {
        /// Only show pilots in Available status.
        #[arg(long)]
        available: bool,
    },
    /// List drones.
    Drones {
        /// Only show drones in Available status.
        #[arg(long)]
        available: bool,
    },
    /// List missions.
    Missions,
    /// Propose the best pilot-drone pairing for a mission.
    Assign {
        /// Mission to staff.
        mission_id: String,
    },
    /// List all qualifying pairings for a mission, best first.
    Alternatives {
        /// Mission to staff.
        mission_id: String,
        /// Exclude this pilot from every pairing.
        #[arg(long)]
        exclude_pilot: Option<String>,
    },
    /// Scan the whole fleet for scheduling and capability conflicts.
    Conflicts,
    /// Serve the HTTP API.
    Serve {
        /// Listen port; overrides the PORT environment variable.
        #[arg(long)]
        port: Option<u16>,
    },
}
