//! Validation errors for mission input.

use thiserror::Error;

/// Reasons a mission fails strict validation.
///
/// The engine accepts all of these as-is; they are only reported by
/// [`Mission::validate`](crate::models::Mission::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MissionError {
    #[error("mission {drone_id}: start time {start_time} is after end time {end_time}")]
    InvertedWindow {
        drone_id: String,
        start_time: f64,
        end_time: f64,
    },
    #[error("mission {drone_id}: waypoint {index} has time {time} earlier than previous {previous}")]
    NonMonotonicTime {
        drone_id: String,
        index: usize,
        previous: f64,
        time: f64,
    },
    #[error("mission {drone_id}: waypoint {index} has a non-finite coordinate or time")]
    NonFiniteCoordinate { drone_id: String, index: usize },
}
