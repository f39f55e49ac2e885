//! Core library entry for the `skymatch` CLI and HTTP service.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod model;
pub mod ports;
pub mod server;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_status() {
        let result = run(["skymatch", "status"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["skymatch", "unknown"]);
        assert!(result.is_err());
    }
}
