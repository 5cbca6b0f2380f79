//! Simulation plugin - Self-contained plugin pattern
//!
//! This plugin owns the orbit [`Simulation`] resource, the [`OrbitView`]
//! frame sink that renderers read, and the per-frame tick driver. It is the
//! only place `SimulationCommand::Start` and `SimulationCommand::Reset` are
//! acted on.

use crate::physics::integrators::{IntegratorRegistry, RungeKuttaSecondOrderMidpoint};
use crate::prelude::*;

mod actions;

use actions::{advance_simulation, handle_simulation_commands, simulation_is_running};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Advance,
}

pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
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
                info!("=== Current Configuration (TOML) ===\n{}", toml_string);
                info!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let registry = IntegratorRegistry::default();
        let integrator = match registry.create(&config.physics.integrator) {
            Ok(integrator) => integrator,
            Err(e) => {
                warn!("{}. Falling back to midpoint", e);
                Box::new(RungeKuttaSecondOrderMidpoint)
            }
        };

        let mut simulation = Simulation::from_config(&config.physics, integrator);
        let mut view = OrbitView::default();
        simulation.reset(&mut view);
        if config.physics.autostart {
            simulation.start();
        }

        app.insert_resource(config);
        app.insert_resource(simulation);
        app.insert_resource(view);

        app.add_event::<SimulationCommand>();

        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Advance).chain(),
        );

        app.add_systems(
            Update,
            (
                handle_simulation_commands.in_set(SimulationSet::Input),
                advance_simulation
                    .in_set(SimulationSet::Advance)
                    .run_if(simulation_is_running),
            ),
        );
    }
}
