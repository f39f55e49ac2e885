//! Assignment search: propose one pairing, or search the whole roster.

use crate::model::{AssignmentProposal, ConflictCheck, Drone, Mission, Pilot};

use super::{checks, score, ConflictEngine};

impl ConflictEngine {
    /// Scores a single pilot-drone pairing for a mission.
    ///
    /// Runs all seven rule checks in fixed order, reduces them to one
    /// feasibility score, and keeps only the unresolved checks on the
    /// returned proposal. Always returns a proposal; filtering by threshold
    /// is the caller's job.
    #[must_use]
    pub fn propose(&self, mission: &Mission, pilot: &Pilot, drone: &Drone) -> AssignmentProposal {
        let checks = vec![
            checks::skill_match(pilot, mission),
            checks::certification_match(pilot, mission),
            checks::pilot_location_match(pilot, mission),
            checks::pilot_availability(pilot, mission),
            checks::drone_availability(drone),
            checks::drone_capabilities(drone, mission),
            checks::drone_location_match(drone, mission),
        ];

        let feasibility = score::feasibility_score(&checks);
        let unresolved: Vec<ConflictCheck> = checks.into_iter().filter(|c| !c.resolved).collect();

        let tier = if feasibility >= self.feasibility_threshold {
            format!("High feasibility assignment ({feasibility:.1}%)")
        } else {
            format!("Low feasibility assignment ({feasibility:.1}%)")
        };
        let reasoning = if unresolved.is_empty() {
            format!("{tier} | No major conflicts detected")
        } else {
            let issues: Vec<&str> = unresolved.iter().map(|c| c.message.as_str()).collect();
            format!("{tier} | Issues: {}", issues.join("; "))
        };

        AssignmentProposal {
            mission: mission.clone(),
            pilot: pilot.clone(),
            drone: drone.clone(),
            conflicts: unresolved,
            feasibility_score: feasibility,
            reasoning,
        }
    }

    /// Finds the best qualifying pairing for a mission, if any.
    ///
    /// Evaluates every pilot×drone pair, keeps proposals at or above the
    /// threshold, and returns the highest-scoring one. Ties go to the
    /// first-seen pair in enumeration order.
    #[must_use]
    pub fn find_best(
        &self,
        mission: &Mission,
        pilots: &[Pilot],
        drones: &[Drone],
    ) -> Option<AssignmentProposal> {
        let mut proposals = self.qualifying(mission, pilots, drones, None);
        proposals.sort_by(|a, b| b.feasibility_score.total_cmp(&a.feasibility_score));
        proposals.into_iter().next()
    }

    /// Returns all qualifying pairings, best first.
    ///
    /// `exclude_pilot_id` drops every pairing involving that pilot; used to
    /// suggest replacements when a pilot becomes unavailable.
    #[must_use]
    pub fn find_alternatives(
        &self,
        mission: &Mission,
        pilots: &[Pilot],
        drones: &[Drone],
        exclude_pilot_id: Option<&str>,
    ) -> Vec<AssignmentProposal> {
        let mut proposals = self.qualifying(mission, pilots, drones, exclude_pilot_id);
        proposals.sort_by(|a, b| b.feasibility_score.total_cmp(&a.feasibility_score));
        proposals
    }

    fn qualifying(
        &self,
        mission: &Mission,
        pilots: &[Pilot],
        drones: &[Drone],
        exclude_pilot_id: Option<&str>,
    ) -> Vec<AssignmentProposal> {
        let mut proposals = Vec::new();
        for pilot in pilots {
            if exclude_pilot_id.is_some_and(|id| id == pilot.id) {
                continue;
            }
            for drone in drones {
                let proposal = self.propose(mission, pilot, drone);
                if proposal.feasibility_score >= self.feasibility_threshold {
                    proposals.push(proposal);
                }
            }
        }
        proposals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DroneStatus, MissionPriority, PilotStatus};

    fn pilot(id: &str, location: &str) -> Pilot {
        Pilot {
            id: id.to_string(),
            name: format!("Pilot {id}"),
            skills: vec!["Thermal".to_string(), "Mapping".to_string()],
            certifications: vec!["Part107".to_string()],
            location: location.to_string(),
            status: PilotStatus::Available,
            current_assignment: None,
            available_from: "2024-01-01".to_string(),
        }
    }

    fn drone(id: &str, location: &str) -> Drone {
        Drone {
            id: id.to_string(),
            model: format!("Model {id}"),
            capabilities: vec!["Thermal".to_string(), "RGB".to_string()],
            status: DroneStatus::Available,
            location: location.to_string(),
            current_assignment: None,
            maintenance_due: "2024-06-01".to_string(),
        }
    }

    fn mission() -> Mission {
        Mission {
            id: "PRJ001".to_string(),
            client: "Acme Agriculture".to_string(),
            location: "Austin".to_string(),
            required_skills: vec!["Thermal".to_string()],
            required_certs: vec!["Part107".to_string()],
            start_date: "2024-01-05".to_string(),
            end_date: "2024-01-10".to_string(),
            priority: MissionPriority::Standard,
        }
    }

    #[test]
    fn perfect_pairing_scores_100_with_all_clear_reasoning() {
        let engine = ConflictEngine::new();
        let proposal = engine.propose(&mission(), &pilot("P1", "Austin"), &drone("D1", "Austin"));

        assert!((proposal.feasibility_score - 100.0).abs() < f64::EPSILON);
        assert!(proposal.conflicts.is_empty());
        assert!(proposal.reasoning.ends_with("No major conflicts detected"));
        assert!(proposal.reasoning.starts_with("High feasibility assignment (100.0%)"));
    }

    #[test]
    fn mismatched_location_costs_15_points() {
        let engine = ConflictEngine::new();
        let proposal = engine.propose(&mission(), &pilot("P1", "Denver"), &drone("D1", "Austin"));

        assert!((proposal.feasibility_score - 85.0).abs() < f64::EPSILON);
        assert_eq!(proposal.conflicts.len(), 1);
        assert!(proposal.reasoning.contains("Issues: Location mismatch: Denver vs Austin"));
    }

    #[test]
    fn low_feasibility_tier_below_threshold() {
        let engine = ConflictEngine::new();
        let mut bad_pilot = pilot("P1", "Denver");
        bad_pilot.skills = vec!["Videography".to_string()];
        bad_pilot.certifications = vec![];
        let proposal = engine.propose(&mission(), &bad_pilot, &drone("D1", "Austin"));

        assert!(proposal.feasibility_score < 50.0);
        assert!(proposal.reasoning.starts_with("Low feasibility assignment"));
    }

    #[test]
    fn find_best_returns_highest_scoring_pair() {
        let engine = ConflictEngine::new();
        let pilots = vec![pilot("P1", "Denver"), pilot("P2", "Austin")];
        let drones = vec![drone("D1", "Austin")];

        let best = engine.find_best(&mission(), &pilots, &drones).unwrap();
        assert_eq!(best.pilot.id, "P2");
        assert!((best.feasibility_score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn find_best_never_returns_below_threshold() {
        let engine = ConflictEngine::new();
        let mut grounded = drone("D1", "Austin");
        grounded.status = DroneStatus::Maintenance;
        let mut late_pilot = pilot("P1", "Austin");
        late_pilot.status = PilotStatus::OnLeave;

        // Every pair carries two high-severity issues and scores below 50.
        let best = engine.find_best(&mission(), &[late_pilot], &[grounded]);
        assert!(best.is_none());
    }

    #[test]
    fn find_best_tie_goes_to_first_seen_pair() {
        let engine = ConflictEngine::new();
        let pilots = vec![pilot("P1", "Austin"), pilot("P2", "Austin")];
        let drones = vec![drone("D1", "Austin")];

        let best = engine.find_best(&mission(), &pilots, &drones).unwrap();
        assert_eq!(best.pilot.id, "P1");
    }

    #[test]
    fn find_alternatives_sorted_descending() {
        let engine = ConflictEngine::new();
        let pilots = vec![pilot("P1", "Denver"), pilot("P2", "Austin")];
        let drones = vec![drone("D1", "Austin")];

        let alternatives = engine.find_alternatives(&mission(), &pilots, &drones, None);
        assert_eq!(alternatives.len(), 2);
        assert!(alternatives[0].feasibility_score >= alternatives[1].feasibility_score);
        assert_eq!(alternatives[0].pilot.id, "P2");
    }

    #[test]
    fn find_alternatives_excludes_pilot() {
        let engine = ConflictEngine::new();
        let pilots = vec![pilot("P1", "Austin"), pilot("P2", "Austin")];
        let drones = vec![drone("D1", "Austin"), drone("D2", "Austin")];

        let alternatives = engine.find_alternatives(&mission(), &pilots, &drones, Some("P1"));
        assert!(!alternatives.is_empty());
        assert!(alternatives.iter().all(|p| p.pilot.id != "P1"));
    }

    #[test]
    fn custom_threshold_changes_qualification() {
        let engine = ConflictEngine::with_threshold(90.0);
        let pilots = vec![pilot("P1", "Denver")]; // scores 85.0
        let drones = vec![drone("D1", "Austin")];

        assert!(engine.find_best(&mission(), &pilots, &drones).is_none());
    }
}
