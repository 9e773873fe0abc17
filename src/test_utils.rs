//! Test utilities for plugin testing

use bevy::prelude::*;

/// Creates a minimal headless app with the core Bevy plugins the simulation
/// plugins need
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        bevy::state::app::StatesPlugin,
        bevy::diagnostic::DiagnosticsPlugin,
    ));

    app
}
