//! Strategic deconfliction for drone missions.
//!
//! Checks a primary mission against simulated flights by sampling both over
//! time, then groups the separation violations into conflict zones.

pub mod consolidate;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod models;
pub mod rules;
pub mod scanner;
pub mod schedule;

pub use consolidate::consolidate;
pub use engine::DeconflictionEngine;
pub use error::MissionError;
pub use geometry::Point3D;
pub use interpolate::interpolate;
pub use models::{CheckReport, CheckStatus, Conflict, Mission, Waypoint};
pub use rules::SafetyRules;
pub use scanner::scan;
pub use schedule::infer_schedule;
