use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::window::WindowResolution;
use clap::Parser;
use core::time::Duration;
use orbitdrift::cli::{Args, handle_list_integrators, load_and_apply_config};
use orbitdrift::plugins::controls::ControlsPlugin;
use orbitdrift::plugins::headless::HeadlessPlugin;
use orbitdrift::plugins::hud::HudPlugin;
use orbitdrift::plugins::simulation::SimulationPlugin;
use orbitdrift::plugins::visualization::VisualizationPlugin;
use orbitdrift::prelude::*;

const HEADLESS_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

fn main() -> AppExit {
    let args = Args::parse();

    if args.list_integrators {
        handle_list_integrators();
        return AppExit::Success;
    }

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    let log_plugin = LogPlugin {
        level: if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        },
        filter: if args.verbose {
            "wgpu=error,naga=warn,orbitdrift=debug".to_string()
        } else {
            "wgpu=error,naga=warn".to_string()
        },
        ..default()
    };

    let mut app = App::new();

    if args.headless {
        app.add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(HEADLESS_FRAME_INTERVAL)),
            log_plugin,
            SimulationPlugin::with_config(config),
            HeadlessPlugin::new(args.ticks),
        ));
    } else {
        app.add_plugins((
            DefaultPlugins.set(log_plugin).set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Orbitdrift".to_string(),
                    resolution: WindowResolution::new(800.0, 600.0),
                    ..default()
                }),
                ..default()
            }),
            SimulationPlugin::with_config(config),
            VisualizationPlugin,
            ControlsPlugin,
            HudPlugin,
        ));
    }

    info!(
        "Orbitdrift v{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATE")
    );

    app.run()
}
