//! Simulation diagnostics module.
//!
//! Samples the live [`GalaxySimulation`] at a fixed interval and records the
//! results as Bevy diagnostics:
//!
//! - **Step**: ticks the current universe has lived
//! - **Generation**: how many universes have been generated so far
//! - **Mean star speed**: average star speed across all galaxies
//! - **Galaxy momentum**: magnitude of the summed galaxy momentum, which the
//!   pairwise interaction keeps constant within one universe
//!
//! Pair it with `LogDiagnosticsPlugin` to print the measurements.
//!
//! ```rust,ignore
//! app.add_plugins(SimulationDiagnosticsPlugin::default());
//! ```

use crate::config::DiagnosticsConfig;
use crate::resources::GalaxySimulation;
use crate::states::AppState;
use bevy::diagnostic::DEFAULT_MAX_HISTORY_LENGTH;
use bevy::diagnostic::Diagnostic;
use bevy::diagnostic::DiagnosticPath;
use bevy::diagnostic::Diagnostics;
use bevy::diagnostic::RegisterDiagnostic;
use bevy::prelude::*;
use core::time::Duration;

#[derive(Resource)]
pub struct SimulationDiagnosticsState {
    update_timer: Timer,
}

pub struct SimulationDiagnosticsPlugin {
    max_history_length: usize,
    smoothing_factor: f64,
    update_interval: Duration,
}

impl Default for SimulationDiagnosticsPlugin {
    fn default() -> Self {
        Self::from_config(&DiagnosticsConfig::default())
    }
}

impl SimulationDiagnosticsPlugin {
    pub const STEP_PATH: DiagnosticPath = DiagnosticPath::const_new("simulation/step");
    pub const GENERATION_PATH: DiagnosticPath = DiagnosticPath::const_new("simulation/generation");
    pub const MEAN_STAR_SPEED_PATH: DiagnosticPath =
        DiagnosticPath::const_new("simulation/mean_star_speed");
    pub const GALAXY_MOMENTUM_PATH: DiagnosticPath =
        DiagnosticPath::const_new("simulation/galaxy_momentum");

    const DIAGNOSTIC_PATHS: &'static [DiagnosticPath] = &[
        Self::STEP_PATH,
        Self::GENERATION_PATH,
        Self::MEAN_STAR_SPEED_PATH,
        Self::GALAXY_MOMENTUM_PATH,
    ];

    pub fn from_config(config: &DiagnosticsConfig) -> Self {
        // Timer::new panics on negative durations
        let seconds = if config.update_interval_seconds.is_finite() {
            config.update_interval_seconds.max(0.0)
        } else {
            0.0
        };

        Self {
            max_history_length: DEFAULT_MAX_HISTORY_LENGTH,
            smoothing_factor: 0.0,
            update_interval: Duration::from_secs_f64(seconds),
        }
    }

    fn register_diagnostics(&self, app: &mut App) {
        for path in Self::DIAGNOSTIC_PATHS {
            app.register_diagnostic(
                Diagnostic::new(path.clone())
                    .with_max_history_length(self.max_history_length)
                    .with_smoothing_factor(self.smoothing_factor),
            );
        }
    }

    fn update_timer_ticks(mut state: ResMut<SimulationDiagnosticsState>, time: Res<Time>) {
        state.update_timer.tick(time.delta());
    }

    fn update_simulation_diagnostics(
        simulation: Res<GalaxySimulation>,
        mut diagnostics: Diagnostics,
        state: Res<SimulationDiagnosticsState>,
    ) {
        if !state.update_timer.finished() {
            return;
        }

        let universe = simulation.universe();
        diagnostics.add_measurement(&Self::STEP_PATH, || simulation.step_counter() as f64);
        diagnostics.add_measurement(&Self::GENERATION_PATH, || universe.generation() as f64);
        diagnostics.add_measurement(&Self::MEAN_STAR_SPEED_PATH, || universe.mean_star_speed());
        diagnostics.add_measurement(&Self::GALAXY_MOMENTUM_PATH, || {
            universe.galaxy_momentum().length()
        });
    }
}

impl Plugin for SimulationDiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimulationDiagnosticsState {
            update_timer: Timer::new(self.update_interval, TimerMode::Repeating),
        });

        self.register_diagnostics(app);

        app.add_systems(
            FixedPostUpdate,
            (
                Self::update_timer_ticks,
                Self::update_simulation_diagnostics.run_if(resource_exists::<GalaxySimulation>),
            )
                .chain()
                .run_if(in_state(AppState::Running)),
        );
    }
}
