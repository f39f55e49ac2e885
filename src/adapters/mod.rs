//! Adapter implementations of the port traits.

pub mod clock;
pub mod csv_store;

pub use clock::{FixedClock, LiveClock};
pub use csv_store::{CsvFleetStore, StoreError};
