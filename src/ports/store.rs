//! Fleet store port for reading pilots, drones, and missions.

use crate::model::{Drone, Mission, Pilot};

/// Read access to the fleet roster.
///
/// Collection methods return owned snapshots so callers are decoupled from
/// the store's internal representation. The by-id lookups are derived from
/// those snapshots and default to a linear scan over the collection.
pub trait FleetStore: Send + Sync {
    /// Returns every pilot in the roster.
    fn pilots(&self) -> Vec<Pilot>;

    /// Returns every drone in the fleet.
    fn drones(&self) -> Vec<Drone>;

    /// Returns every mission.
    fn missions(&self) -> Vec<Mission>;

    /// Looks up a single pilot by id.
    fn pilot(&self, id: &str) -> Option<Pilot> {
        self.pilots().into_iter().find(|p| p.id == id)
    }

    /// Looks up a single drone by id.
    fn drone(&self, id: &str) -> Option<Drone> {
        self.drones().into_iter().find(|d| d.id == id)
    }

    /// Looks up a single mission by id.
    fn mission(&self, id: &str) -> Option<Mission> {
        self.missions().into_iter().find(|m| m.id == id)
    }
}
