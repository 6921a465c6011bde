//! Deconfliction engine: owns the missions and the last check result.

use tracing::debug;

use crate::consolidate::consolidate;
use crate::models::{CheckReport, CheckStatus, Conflict, Mission};
use crate::rules::{SafetyRules, DEFAULT_SAFETY_BUFFER};
use crate::scanner::scan;
use crate::schedule::infer_schedule;

/// Checks a primary mission against simulated flights.
///
/// Simulated flights are checked in registration order. Drone ids are not
/// required to be unique.
#[derive(Debug, Clone)]
pub struct DeconflictionEngine {
    safety_buffer: f64,
    primary: Option<Mission>,
    simulated: Vec<Mission>,
    /// Raw per-sample hits from the last check
    raw_conflicts: Vec<Conflict>,
    /// Conflict zones from the last check
    conflicts: Vec<Conflict>,
}

impl Default for DeconflictionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SAFETY_BUFFER)
    }
}

impl DeconflictionEngine {
    pub fn new(safety_buffer: f64) -> Self {
        Self {
            safety_buffer,
            primary: None,
            simulated: Vec::new(),
            raw_conflicts: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    pub fn from_rules(rules: &SafetyRules) -> Self {
        Self::new(rules.safety_buffer)
    }

    /// Register the primary mission, inferring missing waypoint times.
    pub fn set_primary(&mut self, mut mission: Mission) {
        infer_schedule(&mut mission);
        debug!(
            drone_id = %mission.drone_id,
            waypoints = mission.waypoints.len(),
            start_time = mission.start_time,
            end_time = mission.end_time,
            "primary mission set"
        );
        self.primary = Some(mission);
    }

    /// Register a simulated flight, inferring missing waypoint times.
    pub fn add_simulated(&mut self, mut mission: Mission) {
        infer_schedule(&mut mission);
        debug!(
            drone_id = %mission.drone_id,
            waypoints = mission.waypoints.len(),
            start_time = mission.start_time,
            end_time = mission.end_time,
            "simulated flight added"
        );
        self.simulated.push(mission);
    }

    /// Scan the primary window against every simulated flight and consolidate
    /// the hits into conflict zones. The result replaces the previous one.
    pub fn check_conflicts(&mut self) -> CheckReport {
        self.raw_conflicts.clear();
        self.conflicts.clear();

        let primary = match &self.primary {
            Some(primary) if !self.simulated.is_empty() => primary,
            _ => {
                debug!("no flights to check");
                return CheckReport {
                    status: CheckStatus::Clear,
                    conflicts: Vec::new(),
                    details: "No flights to check".to_string(),
                };
            }
        };

        self.raw_conflicts = scan(primary, &self.simulated, self.safety_buffer);
        self.conflicts = consolidate(&self.raw_conflicts);
        debug!(
            primary = %primary.drone_id,
            flights = self.simulated.len(),
            raw = self.raw_conflicts.len(),
            zones = self.conflicts.len(),
            "conflict check complete"
        );

        let (status, details) = if self.conflicts.is_empty() {
            (CheckStatus::Clear, "No conflicts detected".to_string())
        } else {
            (
                CheckStatus::ConflictDetected,
                format!("Found {} conflict zones", self.conflicts.len()),
            )
        };

        CheckReport {
            status,
            conflicts: self.conflicts.clone(),
            details,
        }
    }

    pub fn safety_buffer(&self) -> f64 {
        self.safety_buffer
    }

    pub fn primary(&self) -> Option<&Mission> {
        self.primary.as_ref()
    }

    pub fn simulated(&self) -> &[Mission] {
        &self.simulated
    }

    /// Conflict zones from the last check.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Raw per-sample hits from the last check.
    pub fn raw_conflicts(&self) -> &[Conflict] {
        &self.raw_conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Waypoint;

    fn line(id: &str, y: f64) -> Mission {
        Mission::new(
            vec![Waypoint::planar(0.0, y), Waypoint::planar(100.0, y)],
            0.0,
            60.0,
            id,
        )
    }

    #[test]
    fn test_registration_infers_schedule() {
        let mut engine = DeconflictionEngine::default();
        engine.set_primary(line("P", 0.0));
        engine.add_simulated(line("S", 5.0));

        let primary = engine.primary().unwrap();
        assert_eq!(primary.waypoints[0].time, Some(0.0));
        assert_eq!(primary.waypoints[1].time, Some(60.0));
        assert!(engine.simulated()[0].waypoints.iter().all(|w| w.time.is_some()));
        assert_eq!(engine.safety_buffer(), 10.0);
    }

    #[test]
    fn test_from_rules_uses_buffer() {
        let engine = DeconflictionEngine::from_rules(&SafetyRules { safety_buffer: 7.5 });
        assert_eq!(engine.safety_buffer(), 7.5);
        assert!(engine.primary().is_none());
        assert!(engine.conflicts().is_empty());
    }

    #[test]
    fn test_no_primary_short_circuits() {
        let mut engine = DeconflictionEngine::new(5.0);
        engine.add_simulated(line("S", 0.0));
        let report = engine.check_conflicts();
        assert_eq!(report.status, CheckStatus::Clear);
        assert_eq!(report.details, "No flights to check");
        assert!(report.conflicts.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_separate_flights() {
        let mut engine = DeconflictionEngine::default();
        engine.set_primary(line("P", 0.0));
        engine.add_simulated(line("S", 50.0));
        engine.add_simulated(line("S", 3.0));
        assert_eq!(engine.simulated().len(), 2);

        let report = engine.check_conflicts();
        assert_eq!(report.status, CheckStatus::ConflictDetected);
        assert!(report.conflicts.iter().all(|c| c.conflicting_drone == "S"));
        assert!(report.conflicts.iter().all(|c| (c.distance - 3.0).abs() < 1e-9));
    }

    #[test]
    fn test_check_replaces_previous_result() {
        let mut engine = DeconflictionEngine::default();
        engine.set_primary(line("P", 0.0));
        engine.add_simulated(line("S", 3.0));

        let first = engine.check_conflicts();
        assert!(!engine.raw_conflicts().is_empty());
        assert_eq!(engine.conflicts(), first.conflicts.as_slice());

        let second = engine.check_conflicts();
        assert_eq!(first, second);
        assert_eq!(engine.conflicts().len(), second.conflicts.len());
    }
}
