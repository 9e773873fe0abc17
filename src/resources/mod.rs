use crate::physics::simulation::Simulation;
use bevy::prelude::*;
use rand::Rng;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

/// Random source for all galaxy and star sampling.
///
/// Keeps the seed it was built from so an unseeded run can be replayed with
/// `--seed`.
#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng {
    seed: u64,
    #[deref]
    rng: ChaCha8Rng,
}

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, otherwise from a fresh seed drawn from the
    /// thread RNG
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::from_seed(seed.unwrap_or_else(|| rand::rng().random()))
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_optional_seed(None)
    }
}

/// The live simulation driven by the frame loop
#[derive(Resource, Deref, DerefMut, Debug)]
pub struct GalaxySimulation(pub Simulation);

impl GalaxySimulation {
    pub fn new(simulation: Simulation) -> Self {
        Self(simulation)
    }
}
