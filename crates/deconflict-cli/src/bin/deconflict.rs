//! Deconfliction CLI - check a primary mission against simulated traffic.
//!
//! Usage:
//!   deconflict demo basic
//!   deconflict demo all --json
//!   deconflict check scenario.json --buffer 12 --strict

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use deconflict_cli::sim::{
    create_basic_scenario, create_complex_scenario, create_planar_scenario,
    create_safe_scenario, Scenario, ScenarioFile,
};
use deconflict_cli::{format_report, Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Built-in demo scenarios
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DemoType {
    /// Mixed traffic, one conflicting flight
    Basic,
    /// Figure-eight primary with several nearby flights
    Complex,
    /// Traffic kept apart, no conflicts expected
    Safe,
    /// Flights on the ground plane
    Planar,
    /// Run every demo in turn
    All,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a built-in demo scenario
    Demo {
        #[arg(value_enum, default_value = "basic")]
        scenario: DemoType,
    },
    /// Check the missions of a JSON scenario file
    Check {
        /// Path to the scenario file
        file: PathBuf,

        /// Safety buffer override (distance units)
        #[arg(long)]
        buffer: Option<f64>,

        /// Reject missions with inverted windows or backwards waypoint times
        #[arg(long)]
        strict: bool,
    },
}

/// Strategic deconfliction for drone missions
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print the check result as JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,
}

fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("deconflict=info".parse()?);
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
    Ok(())
}

fn run_scenario(scenario: &Scenario, json: bool) -> Result<()> {
    tracing::info!(
        scenario = %scenario.name,
        flights = scenario.simulated.len(),
        safety_buffer = scenario.safety_buffer,
        "Checking for conflicts"
    );

    let mut engine = scenario.build_engine();
    let report = engine.check_conflicts();

    if json {
        let out = serde_json::to_string_pretty(&report.to_json())
            .context("Failed to serialize report")?;
        println!("{out}");
    } else {
        println!("{}", "=".repeat(60));
        println!("{} SCENARIO", scenario.name.to_uppercase());
        println!("{}", "=".repeat(60));
        print!("{}", format_report(&report));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    init_tracing(config.log_format)?;

    match args.command {
        Command::Demo { scenario } => {
            let scenarios = match scenario {
                DemoType::Basic => vec![create_basic_scenario()],
                DemoType::Complex => vec![create_complex_scenario()],
                DemoType::Safe => vec![create_safe_scenario()],
                DemoType::Planar => vec![create_planar_scenario()],
                DemoType::All => vec![
                    create_basic_scenario(),
                    create_complex_scenario(),
                    create_safe_scenario(),
                    create_planar_scenario(),
                ],
            };
            for scenario in &scenarios {
                run_scenario(scenario, args.json)?;
            }
        }
        Command::Check {
            file,
            buffer,
            strict,
        } => {
            let scenario_file = ScenarioFile::load(&file)?;
            if strict {
                scenario_file
                    .validate()
                    .context("Scenario failed strict validation")?;
            }
            let name = file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "scenario".to_string());
            let scenario = scenario_file.into_scenario(name, buffer, config.safety_buffer);
            run_scenario(&scenario, args.json)?;
        }
    }

    Ok(())
}
