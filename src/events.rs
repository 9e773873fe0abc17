//! Centralized event definitions
//!
//! Commands flow into the simulation plugin as [`SimulationCommand`]s, and the
//! plugin reports universe replacement as [`UniverseRegenerated`].

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    Restart,
    TogglePause,
    /// Regenerate with this many galaxies at the next tick
    SetGalaxyCount(usize),
    Quit,
}

/// Sent whenever the live universe is replaced
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseRegenerated {
    pub generation: u64,
    pub galaxy_count: usize,
}
