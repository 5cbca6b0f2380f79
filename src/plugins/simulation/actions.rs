//! Handlers for SimulationCommand events and the per-frame tick driver

use crate::prelude::*;

pub fn handle_simulation_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    mut simulation: ResMut<Simulation>,
    mut view: ResMut<OrbitView>,
    mut app_exit: EventWriter<AppExit>,
) {
    for command in commands_reader.read() {
        match command {
            SimulationCommand::Start => {
                if !simulation.start() {
                    debug!("Start requested while already running");
                }
            }
            SimulationCommand::Reset => {
                simulation.reset(&mut *view);
            }
            SimulationCommand::Quit => {
                info!("Quit requested");
                app_exit.write(AppExit::Success);
            }
        }
    }
}

pub fn simulation_is_running(simulation: Res<Simulation>) -> bool {
    simulation.is_running()
}

/// One tick per rendered frame while the simulation is running
pub fn advance_simulation(mut simulation: ResMut<Simulation>, mut view: ResMut<OrbitView>) {
    simulation.advance_tick(&mut *view);
}
