//! JSON scenario files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use deconflict_core::{Mission, SafetyRules};
use serde::{Deserialize, Serialize};

use super::Scenario;

/// On-disk description of a deconfliction check.
///
/// ```json
/// {
///   "rules": { "safety_buffer": 12.0 },
///   "primary": { "waypoints": [{"x": 0, "y": 0}, {"x": 100, "y": 0}],
///                "start_time": 0, "end_time": 60, "drone_id": "P1" },
///   "simulated": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub rules: Option<SafetyRules>,
    pub primary: Mission,
    #[serde(default)]
    pub simulated: Vec<Mission>,
}

impl ScenarioFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to parse scenario file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Invalid scenario JSON")
    }

    /// Run strict validation over every mission in the file.
    pub fn validate(&self) -> Result<()> {
        for mission in std::iter::once(&self.primary).chain(&self.simulated) {
            mission.validate()?;
        }
        Ok(())
    }

    /// Convert into a runnable scenario.
    ///
    /// The buffer is taken from `buffer_override`, then the file's rules, then
    /// `fallback_buffer`.
    pub fn into_scenario(
        self,
        name: impl Into<String>,
        buffer_override: Option<f64>,
        fallback_buffer: f64,
    ) -> Scenario {
        let safety_buffer = buffer_override
            .or(self.rules.map(|rules| rules.safety_buffer))
            .unwrap_or(fallback_buffer);
        Scenario {
            name: name.into(),
            safety_buffer,
            primary: self.primary,
            simulated: self.simulated,
        }
    }
}
