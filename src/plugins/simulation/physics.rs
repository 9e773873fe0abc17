use crate::events::UniverseRegenerated;
use crate::physics::simulation::StepOutcome;
use crate::resources::GalaxySimulation;
use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    Integrate,
    Validate,
}

/// Advance the simulation by one tick
pub fn advance_simulation(
    mut simulation: ResMut<GalaxySimulation>,
    mut regenerated: EventWriter<UniverseRegenerated>,
) {
    if let StepOutcome::Regenerated {
        generation,
        galaxy_count,
    } = simulation.step()
    {
        regenerated.write(UniverseRegenerated {
            generation,
            galaxy_count,
        });
    }
}

/// Warn once per universe when positions or velocities stop being finite.
///
/// The force law is unsoftened by default, so a near collision between a star
/// and a galaxy center can blow up. The universe keeps running regardless.
pub fn check_numerical_health(
    simulation: Res<GalaxySimulation>,
    mut reported_generation: Local<Option<u64>>,
) {
    let universe = simulation.universe();
    if *reported_generation == Some(universe.generation()) || universe.is_finite() {
        return;
    }

    warn!(
        "Universe #{} has non-finite state at step {}; consider setting physics.min_distance",
        universe.generation(),
        simulation.step_counter()
    );
    *reported_generation = Some(universe.generation());
}
