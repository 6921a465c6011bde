//! Safety rules and fixed thresholds for deconfliction.

use serde::{Deserialize, Serialize};

/// Separation distance used when none is configured.
pub const DEFAULT_SAFETY_BUFFER: f64 = 10.0;

/// Sampling interval of the conflict scanner (time units).
pub const SAMPLE_STEP_S: f64 = 0.1;

/// Maximum time gap between a zone seed and a member.
pub const CLUSTER_TIME_WINDOW_S: f64 = 1.0;

/// Maximum distance between a zone seed's location and a member's.
pub const CLUSTER_DISTANCE: f64 = 5.0;

/// Configuration for safety rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyRules {
    /// Minimum allowed separation between two drones at the same instant
    #[serde(default = "default_safety_buffer")]
    pub safety_buffer: f64,
}

fn default_safety_buffer() -> f64 {
    DEFAULT_SAFETY_BUFFER
}

impl Default for SafetyRules {
    fn default() -> Self {
        Self {
            safety_buffer: DEFAULT_SAFETY_BUFFER,
        }
    }
}
