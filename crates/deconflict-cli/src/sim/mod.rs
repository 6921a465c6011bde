//! Scenario sources for the deconfliction engine.
//!
//! Provides the built-in demo scenarios and JSON scenario files.

mod file;
mod scenarios;

pub use file::ScenarioFile;
pub use scenarios::{
    create_basic_scenario, create_complex_scenario, create_planar_scenario, create_safe_scenario,
    Scenario,
};
