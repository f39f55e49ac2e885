//! `skymatch serve` command.

use std::sync::Arc;

use crate::config::Config;
use crate::server;
use crate::server::state::AppState;

/// Execute the `serve` command.
///
/// # Errors
///
/// Returns an error string if fleet data cannot be loaded, the runtime
/// cannot start, or the server fails.
pub fn run(config: &Config, port_override: Option<u16>) -> Result<(), String> {
    let state = AppState::new(config).map_err(|e| format!("Failed to load fleet data: {e}"))?;
    let port = port_override.unwrap_or(config.port);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    runtime.block_on(server::serve(Arc::new(state), port))
}
