//! Universe lifecycle: stepping, lifetime reset, and regeneration requests

use crate::config::PhysicsConfig;
use crate::physics::error::SimulationError;
use crate::physics::universe::Universe;
use crate::resources::SharedRng;
use bevy::log::{debug, info};

/// What a call to [`Simulation::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The universe advanced and the step counter now reads `step`
    Advanced { step: usize },
    /// The universe outlived its lifetime and was replaced
    Regenerated { generation: u64, galaxy_count: usize },
}

/// Complete simulation state: the live universe, its lifetime counter, and the
/// random source every regeneration draws from
#[derive(Debug, Clone)]
pub struct Simulation {
    universe: Universe,
    physics: PhysicsConfig,
    galaxy_count: usize,
    step_counter: usize,
    rng: SharedRng,
}

impl Simulation {
    pub fn new(physics: PhysicsConfig, mut rng: SharedRng) -> Result<Self, SimulationError> {
        let galaxy_count = physics.galaxy_count;
        let universe = Universe::new(galaxy_count, &physics, &mut *rng)?;

        Ok(Self {
            universe,
            physics,
            galaxy_count,
            step_counter: 0,
            rng,
        })
    }

    #[inline]
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    #[inline]
    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    #[inline]
    pub fn galaxy_count(&self) -> usize {
        self.galaxy_count
    }

    #[inline]
    pub fn step_counter(&self) -> usize {
        self.step_counter
    }

    #[inline]
    pub fn max_lifetime(&self) -> usize {
        self.physics.max_lifetime
    }

    /// Advance one tick, replacing the universe once it exceeds its lifetime
    pub fn step(&mut self) -> StepOutcome {
        self.universe.integrate();
        self.step_counter += 1;

        if self.step_counter > self.physics.max_lifetime {
            self.regenerate()
        } else {
            StepOutcome::Advanced {
                step: self.step_counter,
            }
        }
    }

    /// Use `galaxy_count` galaxies from the next tick on.
    ///
    /// The current universe finishes the tick and is then regenerated.
    pub fn request_galaxy_count(&mut self, galaxy_count: usize) -> Result<(), SimulationError> {
        if galaxy_count == 0 {
            return Err(SimulationError::InvalidGalaxyCount(galaxy_count));
        }

        debug!("Galaxy count change requested: {} -> {}", self.galaxy_count, galaxy_count);
        self.galaxy_count = galaxy_count;
        self.step_counter = self.physics.max_lifetime;
        Ok(())
    }

    /// Replace the universe immediately
    pub fn restart(&mut self) -> StepOutcome {
        self.regenerate()
    }

    fn regenerate(&mut self) -> StepOutcome {
        let generation = self.universe.generation() + 1;

        // Physics and galaxy count were validated on the way in
        self.universe = Universe::sample(self.galaxy_count, &self.physics, &mut *self.rng)
            .with_generation(generation);
        self.step_counter = 0;

        info!(
            "Regenerated universe #{} with {} galaxies",
            generation, self.galaxy_count
        );

        StepOutcome::Regenerated {
            generation,
            galaxy_count: self.galaxy_count,
        }
    }
}
