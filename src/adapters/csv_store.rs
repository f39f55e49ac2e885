//! CSV-backed fleet store.
//!
//! Loads the pilot roster, drone fleet, and mission list from three CSV
//! files. Skill, certification, and capability cells hold comma-joined
//! tokens on the wire and become discrete token lists here. A record that
//! fails conversion (unknown status string, blank id) is logged and
//! dropped; a missing file yields an empty collection so a partial data
//! directory still loads.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::model::{Drone, Mission, Pilot};
use crate::ports::store::FleetStore;

/// File-level failure while loading a roster CSV.
///
/// Per-record failures never surface here; they are logged and the record
/// is dropped.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying CSV/IO error.
        source: csv::Error,
    },
}

/// In-memory snapshot of the fleet, loaded from CSV files.
pub struct CsvFleetStore {
    pilots: Vec<Pilot>,
    drones: Vec<Drone>,
    missions: Vec<Mission>,
    loaded_at: DateTime<Utc>,
}

impl CsvFleetStore {
    /// Loads all three rosters from the paths in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when an existing file cannot be read or
    /// decoded as CSV.
    pub fn load(config: &Config) -> Result<Self, StoreError> {
        let pilots = load_records::<PilotRow, Pilot>(&config.pilots_csv, "pilot")?;
        let drones = load_records::<DroneRow, Drone>(&config.drones_csv, "drone")?;
        let missions = load_records::<MissionRow, Mission>(&config.missions_csv, "mission")?;
        info!(
            pilots = pilots.len(),
            drones = drones.len(),
            missions = missions.len(),
            "fleet data loaded"
        );
        Ok(Self { pilots, drones, missions, loaded_at: Utc::now() })
    }

    /// Builds a store directly from records, bypassing the filesystem.
    #[must_use]
    pub fn from_records(pilots: Vec<Pilot>, drones: Vec<Drone>, missions: Vec<Mission>) -> Self {
        Self { pilots, drones, missions, loaded_at: Utc::now() }
    }

    /// When the snapshot was loaded.
    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl FleetStore for CsvFleetStore {
    fn pilots(&self) -> Vec<Pilot> {
        self.pilots.clone()
    }

    fn drones(&self) -> Vec<Drone> {
        self.drones.clone()
    }

    fn missions(&self) -> Vec<Mission> {
        self.missions.clone()
    }
}

/// Reads one CSV file, converting rows and dropping the ones that fail.
fn load_records<R, T>(path: &Path, label: &str) -> Result<Vec<T>, StoreError>
where
    R: for<'de> Deserialize<'de> + TryInto<T, Error = String>,
{
    if !path.exists() {
        warn!(path = %path.display(), "{label} file not found; starting empty");
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|source| StoreError::Read { path: path.to_path_buf(), source })?;

    let mut records = Vec::new();
    for row in reader.deserialize::<R>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to parse {label} row");
                continue;
            }
        };
        match row.try_into() {
            Ok(record) => records.push(record),
            Err(err) => warn!(path = %path.display(), %err, "dropping invalid {label} row"),
        }
    }
    Ok(records)
}

/// Splits a comma-joined cell into trimmed, non-empty tokens.
fn split_tokens(cell: &str) -> Vec<String> {
    cell.split(',').map(str::trim).filter(|t| !t.is_empty()).map(String::from).collect()
}

/// Normalizes an optional-id cell: blank means unassigned.
fn optional_id(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct PilotRow {
    pilot_id: String,
    name: String,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    certifications: String,
    location: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    current_assignment: String,
    #[serde(default)]
    available_from: String,
}

impl TryFrom<PilotRow> for Pilot {
    type Error = String;

    fn try_from(row: PilotRow) -> Result<Self, Self::Error> {
        if row.pilot_id.trim().is_empty() {
            return Err("blank pilot_id".to_string());
        }
        let status = if row.status.is_empty() {
            crate::model::PilotStatus::Available
        } else {
            row.status.parse()?
        };
        Ok(Self {
            id: row.pilot_id,
            name: row.name,
            skills: split_tokens(&row.skills),
            certifications: split_tokens(&row.certifications),
            location: row.location,
            status,
            current_assignment: optional_id(&row.current_assignment),
            available_from: row.available_from,
        })
    }
}

#[derive(Debug, Deserialize)]
struct DroneRow {
    drone_id: String,
    model: String,
    #[serde(default)]
    capabilities: String,
    #[serde(default)]
    status: String,
    location: String,
    #[serde(default)]
    current_assignment: String,
    #[serde(default)]
    maintenance_due: String,
}

impl TryFrom<DroneRow> for Drone {
    type Error = String;

    fn try_from(row: DroneRow) -> Result<Self, Self::Error> {
        if row.drone_id.trim().is_empty() {
            return Err("blank drone_id".to_string());
        }
        let status = if row.status.is_empty() {
            crate::model::DroneStatus::Available
        } else {
            row.status.parse()?
        };
        Ok(Self {
            id: row.drone_id,
            model: row.model,
            capabilities: split_tokens(&row.capabilities),
            status,
            location: row.location,
            current_assignment: optional_id(&row.current_assignment),
            maintenance_due: row.maintenance_due,
        })
    }
}

#[derive(Debug, Deserialize)]
struct MissionRow {
    project_id: String,
    client: String,
    location: String,
    #[serde(default)]
    required_skills: String,
    #[serde(default)]
    required_certs: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    priority: String,
}

impl TryFrom<MissionRow> for Mission {
    type Error = String;

    fn try_from(row: MissionRow) -> Result<Self, Self::Error> {
        if row.project_id.trim().is_empty() {
            return Err("blank project_id".to_string());
        }
        let priority = if row.priority.is_empty() {
            crate::model::MissionPriority::Standard
        } else {
            row.priority.parse()?
        };
        Ok(Self {
            id: row.project_id,
            client: row.client,
            location: row.location,
            required_skills: split_tokens(&row.required_skills),
            required_certs: split_tokens(&row.required_certs),
            start_date: row.start_date,
            end_date: row.end_date,
            priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DroneStatus, MissionPriority, PilotStatus};

    fn write_data_dir(name: &str, pilots: &str, drones: &str, missions: &str) -> Config {
        let dir = std::env::temp_dir().join(format!("skymatch_store_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let config = Config {
            pilots_csv: dir.join("pilots.csv"),
            drones_csv: dir.join("drones.csv"),
            missions_csv: dir.join("missions.csv"),
            port: 8000,
            feasibility_threshold: 50.0,
        };
        std::fs::write(&config.pilots_csv, pilots).unwrap();
        std::fs::write(&config.drones_csv, drones).unwrap();
        std::fs::write(&config.missions_csv, missions).unwrap();
        config
    }

    const PILOTS: &str = "\
pilot_id,name,skills,certifications,location,status,current_assignment,available_from
P001,Dana Reyes,\"Thermal Imaging, Mapping\",Part107,Austin,Available,,2024-01-01
P002,Lee Chou,LiDAR Survey,\"Part107, BVLOS\",Denver,On Leave,PRJ002,2024-02-01
";

    const DRONES: &str = "\
drone_id,model,capabilities,status,location,current_assignment,maintenance_due
D001,Raptor X2,\"Thermal, RGB\",Available,Austin,,2024-06-01
D002,Condor Pro,LiDAR,In Use,Denver,PRJ002,2024-05-15
";

    const MISSIONS: &str = "\
project_id,client,location,required_skills,required_certs,start_date,end_date,priority
PRJ001,Acme Agriculture,Austin,Thermal,Part107,2024-01-05,2024-01-10,Standard
PRJ002,Ridge Mining,Denver,LiDAR Survey,BVLOS,2024-02-10,2024-02-20,Urgent
";

    #[test]
    fn loads_all_rosters_and_splits_token_lists() {
        let config = write_data_dir("full", PILOTS, DRONES, MISSIONS);
        let store = CsvFleetStore::load(&config).unwrap();

        let pilots = store.pilots();
        assert_eq!(pilots.len(), 2);
        assert_eq!(pilots[0].skills, vec!["Thermal Imaging", "Mapping"]);
        assert_eq!(pilots[0].current_assignment, None);
        assert_eq!(pilots[1].status, PilotStatus::OnLeave);
        assert_eq!(pilots[1].current_assignment.as_deref(), Some("PRJ002"));

        let drones = store.drones();
        assert_eq!(drones[1].status, DroneStatus::InUse);
        assert_eq!(drones[0].capabilities, vec!["Thermal", "RGB"]);

        let missions = store.missions();
        assert_eq!(missions[1].priority, MissionPriority::Urgent);
        assert_eq!(missions[1].required_certs, vec!["BVLOS"]);
    }

    #[test]
    fn lookup_by_id() {
        let config = write_data_dir("lookup", PILOTS, DRONES, MISSIONS);
        let store = CsvFleetStore::load(&config).unwrap();

        assert_eq!(store.pilot("P002").unwrap().name, "Lee Chou");
        assert_eq!(store.drone("D001").unwrap().model, "Raptor X2");
        assert_eq!(store.mission("PRJ001").unwrap().client, "Acme Agriculture");
        assert!(store.mission("PRJ999").is_none());
    }

    #[test]
    fn invalid_status_row_is_dropped_not_fatal() {
        let pilots = "\
pilot_id,name,skills,certifications,location,status,current_assignment,available_from
P001,Dana Reyes,Thermal,Part107,Austin,Available,,2024-01-01
P002,Lee Chou,LiDAR,Part107,Denver,Vacationing,,2024-02-01
";
        let config = write_data_dir("badstatus", pilots, DRONES, MISSIONS);
        let store = CsvFleetStore::load(&config).unwrap();
        assert_eq!(store.pilots().len(), 1);
    }

    #[test]
    fn blank_status_defaults_to_available() {
        let pilots = "\
pilot_id,name,skills,certifications,location,status,current_assignment,available_from
P001,Dana Reyes,Thermal,Part107,Austin,,,2024-01-01
";
        let config = write_data_dir("blankstatus", pilots, DRONES, MISSIONS);
        let store = CsvFleetStore::load(&config).unwrap();
        assert_eq!(store.pilots()[0].status, PilotStatus::Available);
    }

    #[test]
    fn missing_file_yields_empty_collection() {
        let config = write_data_dir("missing", PILOTS, DRONES, MISSIONS);
        std::fs::remove_file(&config.missions_csv).unwrap();
        let store = CsvFleetStore::load(&config).unwrap();
        assert_eq!(store.pilots().len(), 2);
        assert!(store.missions().is_empty());
    }
}
