//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// The urgent-pending-mission rule is the only clock consumer; abstracting
/// time access keeps the scanner deterministic under test by substituting a
/// fixed clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
