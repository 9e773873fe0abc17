use bevy::app::ScheduleRunnerPlugin;
use bevy::diagnostic::{DiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::log::{Level, LogPlugin};
use bevy::state::app::StatesPlugin;
use clap::Parser;
use core::time::Duration;
use galaxies::cli::{self, Args};
use galaxies::plugins::simulation::{SimulationPlugin, TICKS_PER_SECOND};
use galaxies::plugins::simulation_diagnostics::SimulationDiagnosticsPlugin;
use galaxies::prelude::*;

/// Remaining fixed ticks before the app exits, set by `--ticks`
#[derive(Resource, Debug)]
struct TickBudget {
    remaining: u64,
}

fn main() -> AppExit {
    let args = Args::parse();

    let config = match cli::load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    if let Some(path) = &args.save_config {
        return match cli::save_config(&config, path) {
            Ok(()) => AppExit::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                AppExit::error()
            }
        };
    }

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / TICKS_PER_SECOND,
        ))),
        LogPlugin {
            level,
            ..default()
        },
        StatesPlugin,
        DiagnosticsPlugin,
        SimulationPlugin::with_config(config.clone()).start_paused(args.paused),
        SimulationDiagnosticsPlugin::from_config(&config.diagnostics),
    ));

    if config.diagnostics.log_to_console {
        app.add_plugins(LogDiagnosticsPlugin::default());
    }

    if let Some(ticks) = args.ticks {
        app.insert_resource(TickBudget { remaining: ticks });
        app.add_systems(
            FixedLast,
            spend_tick_budget.run_if(in_state(AppState::Running)),
        );
    }

    app.run()
}

fn spend_tick_budget(mut budget: ResMut<TickBudget>, mut exit: EventWriter<AppExit>) {
    budget.remaining = budget.remaining.saturating_sub(1);
    if budget.remaining == 0 {
        info!("Tick budget spent, exiting");
        exit.write(AppExit::Success);
    }
}
