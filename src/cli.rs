//! Command line interface for galaxies

use clap::Parser;
use std::fmt;
use std::path::Path;

use crate::config::{SimulationConfig, StepOrdering};
use crate::physics::error::SimulationError;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Configuration failed validation after overrides were applied
    InvalidConfiguration(SimulationError),
    /// Configuration could not be written
    ConfigSave(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidConfiguration(err) => write!(f, "Invalid configuration: {err}"),
            CliError::ConfigSave(msg) => write!(f, "Failed to save configuration: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SimulationError> for CliError {
    fn from(err: SimulationError) -> Self {
        CliError::InvalidConfiguration(err)
    }
}

/// Galaxies - colliding galaxies simulation
#[derive(Parser, Debug, Default)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Number of galaxies to simulate (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub galaxies: Option<usize>,

    /// Random seed for galaxy generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Integration time step (overrides config file)
    #[arg(long, value_name = "DT")]
    pub time_step: Option<f64>,

    /// Clamp separations below this distance in the force law
    #[arg(long, value_name = "DISTANCE")]
    pub min_distance: Option<f64>,

    /// How galaxies are sequenced within one tick
    #[arg(long, value_enum, value_name = "ORDERING")]
    pub ordering: Option<StepOrdering>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Exit after this many fixed ticks
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: Option<u64>,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<String>,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        if !Path::new(config_path).exists() {
            return Err(CliError::ConfigLoad(format!(
                "{config_path} does not exist"
            )));
        }
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(galaxy_count) = args.galaxies {
        println!("Overriding galaxy count to: {galaxy_count}");
        config.physics.galaxy_count = galaxy_count;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.physics.initial_seed = Some(seed);
    }

    if let Some(time_step) = args.time_step {
        println!("Overriding time step to: {time_step}");
        config.physics.time_step = time_step;
    }

    if let Some(min_distance) = args.min_distance {
        println!("Clamping force law separations to: {min_distance}");
        config.physics.min_distance = Some(min_distance);
    }

    if let Some(ordering) = args.ordering {
        println!("Using step ordering: {ordering:?}");
        config.physics.step_ordering = ordering;
    }

    config.physics.validate()?;

    Ok(config)
}

/// Handles the --save-config flag
pub fn save_config(config: &SimulationConfig, path: &str) -> Result<(), CliError> {
    config
        .save(path)
        .map_err(|err| CliError::ConfigSave(format!("{path}: {err}")))?;
    println!("Configuration saved to: {path}");
    Ok(())
}
