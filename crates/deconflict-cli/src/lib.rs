//! Deconfliction CLI - command line tools for the drone deconfliction system.
//!
//! This crate provides:
//! - demo scenarios built from fixed mission sets
//! - JSON scenario files for checking arbitrary missions
//! - the text conflict report printed by the `deconflict` binary

pub mod config;
pub mod report;
pub mod sim;

pub use config::{Config, LogFormat};
pub use report::format_report;
