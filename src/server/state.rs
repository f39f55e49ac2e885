//! Shared state for HTTP handlers.

use chrono::{DateTime, Utc};

use crate::adapters::csv_store::{CsvFleetStore, StoreError};
use crate::config::Config;
use crate::engine::ConflictEngine;
use crate::ports::store::FleetStore;

/// Store, engine, and load metadata shared by all handlers.
pub struct AppState {
    /// Fleet data source.
    pub store: Box<dyn FleetStore>,
    /// The assignment and conflict engine.
    pub engine: ConflictEngine,
    /// When the fleet snapshot was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    /// Loads fleet data per `config` and wires up the engine.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when a roster file cannot be read.
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let store = CsvFleetStore::load(config)?;
        let loaded_at = store.loaded_at();
        Ok(Self {
            store: Box::new(store),
            engine: ConflictEngine::with_threshold(config.feasibility_threshold),
            loaded_at,
        })
    }

    /// Builds state from an existing store and engine.
    #[must_use]
    pub fn with_parts(store: Box<dyn FleetStore>, engine: ConflictEngine) -> Self {
        Self { store, engine, loaded_at: Utc::now() }
    }
}
