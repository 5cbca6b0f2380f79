//! Test utilities for plugin testing

use crate::prelude::*;

/// Creates a minimal test app with core Bevy plugins needed for testing
pub fn create_test_app() -> App {
    let mut app = App::new();

    // Add minimal plugins needed for testing
    app.add_plugins((MinimalPlugins, bevy::input::InputPlugin));

    // Add events used by plugins
    app.add_event::<SimulationCommand>();

    app
}

/// Creates a test app with the simulation plugin installed and the given
/// config, so systems under test see the same resources as the real app
pub fn create_simulation_app(config: SimulationConfig) -> App {
    let mut app = create_test_app();
    app.add_plugins(crate::plugins::simulation::SimulationPlugin::with_config(
        config,
    ));
    app
}
