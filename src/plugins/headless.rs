//! Headless plugin - runs the orbit without a window
//!
//! Logs telemetry every `telemetry_interval` ticks and requests exit once the
//! simulation has completed `max_ticks` ticks. Pair it with `MinimalPlugins`
//! and a `ScheduleRunnerPlugin` so the tick driver still runs once per frame.

use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadlessSet;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSettings {
    pub max_ticks: u64,
    pub telemetry_interval: u64,
}

impl Default for HeadlessSettings {
    fn default() -> Self {
        Self {
            max_ticks: 600,
            telemetry_interval: 60,
        }
    }
}

pub struct HeadlessPlugin {
    pub settings: HeadlessSettings,
}

impl HeadlessPlugin {
    pub fn new(max_ticks: u64) -> Self {
        Self {
            settings: HeadlessSettings {
                max_ticks,
                ..default()
            },
        }
    }
}

impl Plugin for HeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings);
        app.configure_sets(Update, HeadlessSet.after(SimulationSet::Advance));
        app.add_systems(Update, (log_telemetry, exit_after_ticks).chain().in_set(HeadlessSet));
    }
}

fn log_telemetry(simulation: Res<Simulation>, settings: Res<HeadlessSettings>) {
    let ticks = simulation.ticks();
    if !simulation.is_changed() || ticks == 0 || settings.telemetry_interval == 0 {
        return;
    }
    if ticks % settings.telemetry_interval != 0 {
        return;
    }

    let position = simulation.position();
    info!(
        "tick {} t={:.0} s position=({:.2}, {:.2}) m r={:.1} km speed={:.1} m/s energy={:.6e} J/kg",
        ticks,
        simulation.elapsed(),
        position.x,
        position.y,
        position.length() / 1000.0,
        simulation.velocity().length(),
        simulation.specific_energy()
    );
}

fn exit_after_ticks(
    simulation: Res<Simulation>,
    settings: Res<HeadlessSettings>,
    mut app_exit: EventWriter<AppExit>,
) {
    if !simulation.is_running() {
        warn!("Simulation is idle; nothing to run headless");
        app_exit.write(AppExit::Success);
        return;
    }

    if simulation.ticks() >= settings.max_ticks {
        info!(
            "Finished {} ticks ({} steps, {:.0} simulated seconds) with {}",
            simulation.ticks(),
            simulation.steps(),
            simulation.elapsed(),
            simulation.integrator().name()
        );
        app_exit.write(AppExit::Success);
    }
}
