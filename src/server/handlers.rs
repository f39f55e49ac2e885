//! HTTP handlers for roster reads, assignment search, and conflict scans.
//!
//! Error mapping follows the engine's contract: an unknown mission id is a
//! 404, a search that finds no qualifying pairing is a 400, and everything
//! else is data.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::model::{AssignmentProposal, Drone, DroneStatus, Mission, Pilot, PilotStatus};

use super::state::AppState;

/// Service health probe.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "skymatch",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fleet counts and snapshot metadata.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<Value> {
    let pilots = state.store.pilots();
    let drones = state.store.drones();
    let missions = state.store.missions();
    let available_pilots = pilots.iter().filter(|p| p.status == PilotStatus::Available).count();
    let available_drones = drones.iter().filter(|d| d.status == DroneStatus::Available).count();

    Json(json!({
        "total_pilots": pilots.len(),
        "available_pilots": available_pilots,
        "total_drones": drones.len(),
        "available_drones": available_drones,
        "total_missions": missions.len(),
        "loaded_at": state.loaded_at.to_rfc3339(),
    }))
}

/// All pilots.
pub async fn pilots(State(state): State<Arc<AppState>>) -> Json<Vec<Pilot>> {
    Json(state.store.pilots())
}

/// Pilots in Available status.
pub async fn available_pilots(State(state): State<Arc<AppState>>) -> Json<Vec<Pilot>> {
    let pilots =
        state.store.pilots().into_iter().filter(|p| p.status == PilotStatus::Available).collect();
    Json(pilots)
}

/// All drones.
pub async fn drones(State(state): State<Arc<AppState>>) -> Json<Vec<Drone>> {
    Json(state.store.drones())
}

/// Drones in Available status.
pub async fn available_drones(State(state): State<Arc<AppState>>) -> Json<Vec<Drone>> {
    let drones =
        state.store.drones().into_iter().filter(|d| d.status == DroneStatus::Available).collect();
    Json(drones)
}

/// All missions.
pub async fn missions(State(state): State<Arc<AppState>>) -> Json<Vec<Mission>> {
    Json(state.store.missions())
}

/// Query parameters for `POST /assign`.
#[derive(Debug, Deserialize)]
pub struct AssignParams {
    /// Mission to staff.
    pub mission_id: String,
}

/// Proposes the best pilot-drone pairing for a mission.
pub async fn assign(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AssignParams>,
) -> Result<Json<AssignmentProposal>, StatusCode> {
    let mission = state.store.mission(&params.mission_id).ok_or(StatusCode::NOT_FOUND)?;
    let pilots = state.store.pilots();
    let drones = state.store.drones();

    state
        .engine
        .find_best(&mission, &pilots, &drones)
        .map(Json)
        .ok_or(StatusCode::BAD_REQUEST)
}

/// Query parameters for the alternatives listing.
#[derive(Debug, Deserialize)]
pub struct AlternativesParams {
    /// Pilot to exclude from every pairing.
    pub exclude_pilot: Option<String>,
}

/// Lists all qualifying pairings for a mission, best first.
pub async fn alternatives(
    State(state): State<Arc<AppState>>,
    Path(mission_id): Path<String>,
    Query(params): Query<AlternativesParams>,
) -> Result<Json<Vec<AssignmentProposal>>, StatusCode> {
    let mission = state.store.mission(&mission_id).ok_or(StatusCode::NOT_FOUND)?;
    let pilots = state.store.pilots();
    let drones = state.store.drones();

    let proposals =
        state.engine.find_alternatives(&mission, &pilots, &drones, params.exclude_pilot.as_deref());
    Ok(Json(proposals))
}

/// Runs the system-wide conflict scan.
pub async fn conflicts(State(state): State<Arc<AppState>>) -> Json<Value> {
    let pilots = state.store.pilots();
    let drones = state.store.drones();
    let missions = state.store.missions();

    let conflicts = state.engine.detect_all(&pilots, &drones, &missions);
    Json(json!({
        "total_conflicts": conflicts.len(),
        "conflicts": conflicts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::csv_store::CsvFleetStore;
    use crate::engine::ConflictEngine;
    use crate::model::MissionPriority;

    fn sample_state() -> Arc<AppState> {
        let pilots = vec![Pilot {
            id: "P001".to_string(),
            name: "Dana Reyes".to_string(),
            skills: vec!["Thermal".to_string()],
            certifications: vec!["Part107".to_string()],
            location: "Austin".to_string(),
            status: PilotStatus::Available,
            current_assignment: None,
            available_from: "2024-01-01".to_string(),
        }];
        let drones = vec![Drone {
            id: "D001".to_string(),
            model: "Raptor X2".to_string(),
            capabilities: vec!["Thermal".to_string(), "RGB".to_string()],
            status: DroneStatus::Available,
            location: "Austin".to_string(),
            current_assignment: None,
            maintenance_due: "2024-06-01".to_string(),
        }];
        let missions = vec![Mission {
            id: "PRJ001".to_string(),
            client: "Acme Agriculture".to_string(),
            location: "Austin".to_string(),
            required_skills: vec!["Thermal".to_string()],
            required_certs: vec!["Part107".to_string()],
            start_date: "2024-01-05".to_string(),
            end_date: "2024-01-10".to_string(),
            priority: MissionPriority::Standard,
        }];
        let store = CsvFleetStore::from_records(pilots, drones, missions);
        Arc::new(AppState::with_parts(Box::new(store), ConflictEngine::new()))
    }

    #[tokio::test]
    async fn health_reports_service_name() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "skymatch");
    }

    #[tokio::test]
    async fn status_counts_available_resources() {
        let Json(body) = status(State(sample_state())).await;
        assert_eq!(body["total_pilots"], 1);
        assert_eq!(body["available_pilots"], 1);
        assert_eq!(body["total_missions"], 1);
    }

    #[tokio::test]
    async fn assign_returns_best_pairing() {
        let params = AssignParams { mission_id: "PRJ001".to_string() };
        let Json(proposal) = assign(State(sample_state()), Query(params)).await.unwrap();
        assert_eq!(proposal.pilot.id, "P001");
        assert!((proposal.feasibility_score - 100.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn assign_unknown_mission_is_404() {
        let params = AssignParams { mission_id: "PRJ999".to_string() };
        let err = assign(State(sample_state()), Query(params)).await.unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn assign_with_no_qualifying_pair_is_400() {
        let state = sample_state();
        let mut mission = state.store.mission("PRJ001").unwrap();
        mission.required_skills = vec!["Hyperspectral Analysis".to_string()];
        mission.required_certs = vec!["BVLOS".to_string()];
        let store = CsvFleetStore::from_records(state.store.pilots(), state.store.drones(), vec![mission]);
        let state =
            Arc::new(AppState::with_parts(Box::new(store), ConflictEngine::new()));

        let params = AssignParams { mission_id: "PRJ001".to_string() };
        let err = assign(State(state), Query(params)).await.unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn alternatives_can_exclude_a_pilot() {
        let params = AlternativesParams { exclude_pilot: Some("P001".to_string()) };
        let Json(proposals) =
            alternatives(State(sample_state()), Path("PRJ001".to_string()), Query(params))
                .await
                .unwrap();
        assert!(proposals.is_empty());
    }

    #[tokio::test]
    async fn conflicts_reports_totals() {
        let Json(body) = conflicts(State(sample_state())).await;
        assert_eq!(body["total_conflicts"], body["conflicts"].as_array().unwrap().len());
    }
}
