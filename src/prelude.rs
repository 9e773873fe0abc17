//! Galaxies prelude module
//!
//! This module re-exports the most commonly used types, traits, and functions
//! across the application to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Config
pub use crate::config::{DiagnosticsConfig, PhysicsConfig, SimulationConfig, StepOrdering};

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Resources
pub use crate::resources::{GalaxySimulation, SharedRng};

// Internal re-exports - Events
pub use crate::events::{SimulationCommand, UniverseRegenerated};

// Internal re-exports - Physics
pub use crate::physics::error::SimulationError;
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::simulation::{Simulation, StepOutcome};
pub use crate::physics::universe::Universe;
