//! Action handlers for simulation commands
//!
//! This module contains handlers for SimulationCommand events including
//! restart, pause/resume, galaxy count changes and quitting.

use crate::prelude::*;

pub fn handle_restart_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut simulation: ResMut<GalaxySimulation>,
    mut regenerated: EventWriter<UniverseRegenerated>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::Restart) {
            continue;
        }

        if let StepOutcome::Regenerated {
            generation,
            galaxy_count,
        } = simulation.restart()
        {
            regenerated.write(UniverseRegenerated {
                generation,
                galaxy_count,
            });
        }
    }
}

pub fn handle_toggle_pause_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::TogglePause) {
            continue;
        }
        match current_state.get() {
            AppState::Running => {
                info!("Simulation paused");
                next_state.set(AppState::Paused);
            }
            AppState::Paused => {
                info!("Simulation resumed");
                next_state.set(AppState::Running);
            }
        }
    }
}

pub fn handle_set_galaxy_count_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut simulation: ResMut<GalaxySimulation>,
) {
    for command in commands_reader.read() {
        let SimulationCommand::SetGalaxyCount(galaxy_count) = *command else {
            continue;
        };

        if let Err(e) = simulation.request_galaxy_count(galaxy_count) {
            warn!("Ignoring galaxy count change: {}", e);
        }
    }
}

pub fn handle_quit_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut exit: EventWriter<AppExit>,
) {
    for command in commands_reader.read() {
        if matches!(command, SimulationCommand::Quit) {
            exit.write(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::simulation::SimulationPlugin;
    use crate::test_utils::create_test_app;

    fn app_with_simulation() -> App {
        let mut config = SimulationConfig::default();
        config.physics.galaxy_count = 3;
        config.physics.stars_per_galaxy = 5;
        config.physics.initial_seed = Some(3);

        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(config));
        app
    }

    #[test]
    fn test_toggle_pause_round_trip() {
        let mut app = app_with_simulation();

        app.world_mut().send_event(SimulationCommand::TogglePause);
        app.update();
        app.update();
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Paused
        );

        app.world_mut().send_event(SimulationCommand::TogglePause);
        app.update();
        app.update();
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Running
        );
    }

    #[test]
    fn test_zero_galaxy_count_is_ignored() {
        let mut app = app_with_simulation();

        app.world_mut()
            .send_event(SimulationCommand::SetGalaxyCount(0));
        app.update();

        let simulation = app.world().resource::<GalaxySimulation>();
        assert_eq!(simulation.galaxy_count(), 3);
    }

    #[test]
    fn test_quit_sends_app_exit() {
        let mut app = app_with_simulation();

        app.world_mut().send_event(SimulationCommand::Quit);
        app.update();

        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }
}
