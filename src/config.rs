use crate::physics::error::SimulationError;
use crate::physics::forces::ForceLaw;
use crate::physics::math::Scalar;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment variable overrides, e.g. `GALAXIES_PHYSICS__GALAXY_COUNT=5`
pub const ENVIRONMENT_PREFIX: &str = "GALAXIES";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// How the galaxies of one tick are sequenced
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StepOrdering {
    /// Each galaxy moves its stars, pulls on the galaxies after it, then moves.
    /// Later galaxies see earlier ones at their updated positions.
    #[default]
    Sequential,
    /// Every force is computed from the positions at the start of the tick.
    /// Trajectories differ from the sequential ordering.
    Simultaneous,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub galaxy_count: usize,
    /// Also the mass of every galaxy
    pub stars_per_galaxy: usize,
    pub time_step: Scalar,
    /// Ticks of back-extrapolation applied to new galaxies so they start converging
    pub hit_iterations: usize,
    /// Ticks a universe lives before it is regenerated
    pub max_lifetime: usize,
    pub coupling_constant: Scalar,
    pub orbital_velocity_scale: Scalar,
    pub galaxy_min_size: Scalar,
    pub galaxy_size_range: Scalar,
    /// Pushes new galaxies forward on z so they start in front of a viewer at the origin
    pub depth_offset: Scalar,
    /// Optional separation clamp for the force law; unset reproduces the unsoftened law
    pub min_distance: Option<Scalar>,
    pub step_ordering: StepOrdering,
    pub initial_seed: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            galaxy_count: 3,
            stars_per_galaxy: 700,
            time_step: 0.005,
            hit_iterations: 100,
            max_lifetime: 800,
            coupling_constant: 5e-6,
            orbital_velocity_scale: 0.001,
            galaxy_min_size: 0.1,
            galaxy_size_range: 0.1,
            depth_offset: 1.5,
            min_distance: None,
            step_ordering: StepOrdering::Sequential,
            initial_seed: None,
        }
    }
}

impl PhysicsConfig {
    pub fn force_law(&self) -> ForceLaw {
        ForceLaw::new(self.coupling_constant).with_min_distance(self.min_distance)
    }

    /// Check the galaxy count and every parameter the physics depends on
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.galaxy_count == 0 {
            return Err(SimulationError::InvalidGalaxyCount(self.galaxy_count));
        }
        self.validate_parameters()
    }

    /// Like [`validate`](Self::validate) but ignores `galaxy_count`, for
    /// callers that pass their own count
    pub fn validate_parameters(&self) -> Result<(), SimulationError> {
        let counts = [
            ("stars_per_galaxy", self.stars_per_galaxy),
            ("max_lifetime", self.max_lifetime),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(SimulationError::InvalidParameter {
                    name,
                    value: value as Scalar,
                });
            }
        }

        let positive = [
            ("time_step", self.time_step),
            ("coupling_constant", self.coupling_constant),
            ("orbital_velocity_scale", self.orbital_velocity_scale),
            ("galaxy_min_size", self.galaxy_min_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }

        let non_negative = [
            ("galaxy_size_range", self.galaxy_size_range),
            ("min_distance", self.min_distance.unwrap_or(0.0)),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }

        if !self.depth_offset.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "depth_offset",
                value: self.depth_offset,
            });
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub update_interval_seconds: f64,
    pub log_to_console: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            update_interval_seconds: 0.5,
            log_to_console: false,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Location of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "galaxies")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Layered load: defaults, then the user configuration file, then
    /// `GALAXIES_*` environment variables
    pub fn load_from_user_config() -> Self {
        let mut builder = ::config::Config::builder();

        if let Some(path) = Self::user_config_path() {
            debug!("Looking for user configuration at {}", path.display());
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        let layered = builder
            .add_source(
                ::config::Environment::with_prefix(ENVIRONMENT_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>());

        match layered {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load user configuration: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
