//! Simulation plugin - Self-contained plugin pattern
//!
//! This plugin owns the live [`Simulation`], advances it once per fixed tick
//! while the app is running, and handles [`SimulationCommand`] events.

use crate::prelude::*;

mod actions;
mod physics;

use actions::{
    handle_quit_event, handle_restart_simulation_event, handle_set_galaxy_count_event,
    handle_toggle_pause_simulation_event,
};
pub use physics::{PhysicsSet, advance_simulation, check_numerical_health};

/// Fixed tick rate; one universe step per tick
pub const TICKS_PER_SECOND: f64 = 60.0;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
}

pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
    start_paused: bool,
}

impl SimulationPlugin {
    pub fn new() -> Self {
        Self {
            config: None,
            start_paused: false,
        }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
            start_paused: false,
        }
    }

    pub fn start_paused(mut self, paused: bool) -> Self {
        self.start_paused = paused;
        self
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let rng = SharedRng::from_optional_seed(config.physics.initial_seed);
        info!("Random seed: {} (replay with --seed)", rng.seed());
        match Simulation::new(config.physics.clone(), rng) {
            Ok(simulation) => {
                info!(
                    "Simulating {} galaxies of {} stars",
                    simulation.galaxy_count(),
                    config.physics.stars_per_galaxy
                );
                app.insert_resource(GalaxySimulation::new(simulation));
            }
            Err(e) => {
                error!("Cannot start simulation: {}", e);
            }
        }

        app.insert_resource(config);
        app.insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND));
        app.insert_state(if self.start_paused {
            AppState::Paused
        } else {
            AppState::Running
        });

        app.add_event::<SimulationCommand>();
        app.add_event::<UniverseRegenerated>();

        app.configure_sets(
            FixedUpdate,
            (PhysicsSet::Integrate, PhysicsSet::Validate).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                advance_simulation
                    .in_set(PhysicsSet::Integrate)
                    .run_if(in_state(AppState::Running)),
                check_numerical_health.in_set(PhysicsSet::Validate),
            )
                .run_if(resource_exists::<GalaxySimulation>),
        );
        app.add_systems(
            Update,
            (
                handle_restart_simulation_event.run_if(resource_exists::<GalaxySimulation>),
                handle_toggle_pause_simulation_event,
                handle_set_galaxy_count_event.run_if(resource_exists::<GalaxySimulation>),
                handle_quit_event,
            )
                .in_set(SimulationSet::Input),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;

    fn small_config() -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.physics.galaxy_count = 2;
        config.physics.stars_per_galaxy = 10;
        config.physics.initial_seed = Some(99);
        config
    }

    #[test]
    fn test_plugin_inserts_simulation() {
        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(small_config()));

        let simulation = app.world().resource::<GalaxySimulation>();
        assert_eq!(simulation.galaxy_count(), 2);
        assert_eq!(simulation.universe().star_count(), 20);
        assert!(app.world().contains_resource::<SimulationConfig>());
    }

    #[test]
    fn test_plugin_skips_invalid_simulation() {
        let mut config = small_config();
        config.physics.galaxy_count = 0;

        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(config));

        assert!(!app.world().contains_resource::<GalaxySimulation>());
        // The app still updates without a simulation
        app.update();
    }

    #[test]
    fn test_plugin_can_start_paused() {
        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(small_config()).start_paused(true));
        app.update();

        let state = app.world().resource::<State<AppState>>();
        assert_eq!(*state.get(), AppState::Paused);
    }

    #[test]
    fn test_set_galaxy_count_command() {
        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(small_config()));

        app.world_mut()
            .send_event(SimulationCommand::SetGalaxyCount(4));
        app.update();

        let simulation = app.world().resource::<GalaxySimulation>();
        assert_eq!(simulation.galaxy_count(), 4);
        assert_eq!(simulation.step_counter(), simulation.max_lifetime());
    }

    #[test]
    fn test_restart_command_emits_regeneration() {
        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(small_config()));

        app.world_mut().send_event(SimulationCommand::Restart);
        app.update();

        let simulation = app.world().resource::<GalaxySimulation>();
        assert_eq!(simulation.universe().generation(), 1);

        let events = app.world().resource::<Events<UniverseRegenerated>>();
        let mut cursor = events.get_cursor();
        let regenerated: Vec<_> = cursor.read(events).copied().collect();
        assert_eq!(
            regenerated,
            vec![UniverseRegenerated {
                generation: 1,
                galaxy_count: 2
            }]
        );
    }
}
