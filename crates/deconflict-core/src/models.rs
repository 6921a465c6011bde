//! Core data models for missions and conflicts.

use serde::{Deserialize, Serialize};

use crate::error::MissionError;
use crate::geometry::Point3D;

/// A mission waypoint with an optional arrival time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    /// Altitude; planar missions leave it at zero
    #[serde(default)]
    pub z: f64,
    /// Time to reach this waypoint, filled in by schedule inference when unset
    #[serde(default)]
    pub time: Option<f64>,
}

impl Waypoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, time: None }
    }

    /// Waypoint on the ground plane (`z = 0`).
    pub fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Waypoint with an explicit arrival time.
    pub fn at(x: f64, y: f64, z: f64, time: f64) -> Self {
        Self {
            x,
            y,
            z,
            time: Some(time),
        }
    }

    pub fn position(&self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }
}

fn default_drone_id() -> String {
    "primary".to_string()
}

/// A drone mission: ordered waypoints flown within a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub waypoints: Vec<Waypoint>,
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default = "default_drone_id")]
    pub drone_id: String,
}

impl Mission {
    pub fn new(
        waypoints: Vec<Waypoint>,
        start_time: f64,
        end_time: f64,
        drone_id: impl Into<String>,
    ) -> Self {
        Self {
            waypoints,
            start_time,
            end_time,
            drone_id: drone_id.into(),
        }
    }

    /// Length of the waypoint polyline.
    pub fn path_length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].position().distance(&pair[1].position()))
            .sum()
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether `t` falls inside the mission window (inclusive on both ends).
    pub fn contains_time(&self, t: f64) -> bool {
        t >= self.start_time && t <= self.end_time
    }

    /// Strict input check.
    ///
    /// Rejects an inverted window, non-finite values and explicit waypoint
    /// times that go backwards. Unset times are skipped.
    pub fn validate(&self) -> Result<(), MissionError> {
        if self.start_time > self.end_time {
            return Err(MissionError::InvertedWindow {
                drone_id: self.drone_id.clone(),
                start_time: self.start_time,
                end_time: self.end_time,
            });
        }

        let mut previous: Option<f64> = None;
        for (index, waypoint) in self.waypoints.iter().enumerate() {
            let time_finite = waypoint.time.map(f64::is_finite).unwrap_or(true);
            if !(waypoint.x.is_finite() && waypoint.y.is_finite() && waypoint.z.is_finite())
                || !time_finite
            {
                return Err(MissionError::NonFiniteCoordinate {
                    drone_id: self.drone_id.clone(),
                    index,
                });
            }

            let Some(time) = waypoint.time else {
                continue;
            };
            if let Some(prev) = previous {
                if time < prev {
                    return Err(MissionError::NonMonotonicTime {
                        drone_id: self.drone_id.clone(),
                        index,
                        previous: prev,
                        time,
                    });
                }
            }
            previous = Some(time);
        }

        Ok(())
    }
}

/// A separation violation between the primary mission and another flight.
///
/// Used both for raw per-sample hits and for consolidated conflict zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Midpoint of the two drones (zone centroid once consolidated)
    pub location: Point3D,
    pub time: f64,
    pub primary_drone: String,
    pub conflicting_drone: String,
    /// Observed separation (closest approach once consolidated)
    pub distance: f64,
    pub description: String,
}

/// Overall outcome of a conflict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "conflict detected")]
    ConflictDetected,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Clear => "clear",
            CheckStatus::ConflictDetected => "conflict detected",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result returned by [`DeconflictionEngine::check_conflicts`](crate::engine::DeconflictionEngine::check_conflicts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub conflicts: Vec<Conflict>,
    pub details: String,
}

impl CheckReport {
    pub fn is_clear(&self) -> bool {
        self.status == CheckStatus::Clear
    }

    /// Plain structured form for reporting and plotting consumers.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "status": self.status.as_str(),
            "conflicts": self
                .conflicts
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "location": { "x": c.location.x, "y": c.location.y, "z": c.location.z },
                        "time": c.time,
                        "primary_drone": c.primary_drone,
                        "conflicting_drone": c.conflicting_drone,
                        "distance": c.distance,
                        "description": c.description,
                    })
                })
                .collect::<Vec<_>>(),
            "details": self.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_defaults_when_deserialized() {
        let wp: Waypoint = serde_json::from_str(r#"{"x": 1.0, "y": 2.0}"#).unwrap();
        assert_eq!(wp, Waypoint::planar(1.0, 2.0));
        assert!(wp.time.is_none());

        let mission: Mission =
            serde_json::from_str(r#"{"waypoints": [], "start_time": 0, "end_time": 5}"#).unwrap();
        assert_eq!(mission.drone_id, "primary");
    }

    #[test]
    fn test_path_length_follows_polyline() {
        let mission = Mission::new(
            vec![
                Waypoint::planar(0.0, 0.0),
                Waypoint::planar(3.0, 4.0),
                Waypoint::planar(3.0, 10.0),
            ],
            0.0,
            10.0,
            "M1",
        );
        assert!((mission.path_length() - 11.0).abs() < 1e-12);
        assert!(mission.contains_time(0.0));
        assert!(mission.contains_time(10.0));
        assert!(!mission.contains_time(10.01));
    }

    #[test]
    fn test_validate_flags_bad_input() {
        let inverted = Mission::new(vec![Waypoint::planar(0.0, 0.0)], 10.0, 5.0, "BAD");
        assert!(matches!(
            inverted.validate(),
            Err(MissionError::InvertedWindow { .. })
        ));

        let backwards = Mission::new(
            vec![
                Waypoint::at(0.0, 0.0, 0.0, 5.0),
                Waypoint::new(1.0, 0.0, 0.0),
                Waypoint::at(2.0, 0.0, 0.0, 3.0),
            ],
            0.0,
            10.0,
            "BAD",
        );
        assert_eq!(
            backwards.validate(),
            Err(MissionError::NonMonotonicTime {
                drone_id: "BAD".into(),
                index: 2,
                previous: 5.0,
                time: 3.0,
            })
        );

        let nan = Mission::new(vec![Waypoint::planar(f64::NAN, 0.0)], 0.0, 1.0, "BAD");
        assert!(matches!(
            nan.validate(),
            Err(MissionError::NonFiniteCoordinate { index: 0, .. })
        ));
    }

    #[test]
    fn test_report_json_shape() {
        let report = CheckReport {
            status: CheckStatus::ConflictDetected,
            conflicts: vec![Conflict {
                location: Point3D::new(1.0, 2.0, 3.0),
                time: 4.0,
                primary_drone: "P".into(),
                conflicting_drone: "S".into(),
                distance: 0.5,
                description: "zone".into(),
            }],
            details: "Found 1 conflict zones".into(),
        };
        let value = report.to_json();
        assert_eq!(value["status"], "conflict detected");
        assert_eq!(value["conflicts"][0]["location"]["y"], 2.0);
        assert_eq!(value["conflicts"][0]["conflicting_drone"], "S");

        // Derived serialization agrees with the hand-built form.
        assert_eq!(serde_json::to_value(&report).unwrap(), value);
    }
}
