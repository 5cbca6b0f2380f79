//! Command line interface for Orbitdrift

use clap::Parser;
use std::fmt;
use std::path::Path;

use crate::config::{ConfigError, SimulationConfig};
use crate::physics::integrators::{IntegratorRegistry, UnknownIntegrator};

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Configuration loaded but cannot drive a simulation
    InvalidConfig(ConfigError),
    /// Invalid integrator name provided
    InvalidIntegrator(UnknownIntegrator),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidConfig(err) => write!(f, "Invalid configuration: {err}"),
            CliError::InvalidIntegrator(err) => write!(f, "Invalid integrator: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigLoad(_) => None,
            CliError::InvalidConfig(err) => Some(err),
            CliError::InvalidIntegrator(err) => Some(err),
        }
    }
}

/// Orbitdrift - a satellite orbiting a central body
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Integrator type (e.g., midpoint, velocity_verlet, rk4, heun)
    #[arg(short = 'i', long, value_name = "TYPE")]
    pub integrator: Option<String>,

    /// Integration step in simulated seconds (overrides config file)
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub time_step: Option<f64>,

    /// Integration steps per rendered frame (overrides config file)
    #[arg(long, value_name = "COUNT")]
    pub steps_per_tick: Option<usize>,

    /// Maximum number of trail points (overrides config file)
    #[arg(long, value_name = "COUNT")]
    pub trail_capacity: Option<usize>,

    /// Start advancing immediately instead of waiting for Start
    #[arg(short = 'a', long)]
    pub autostart: bool,

    /// Run without a window, logging telemetry instead of drawing
    #[arg(long)]
    pub headless: bool,

    /// Number of ticks to run in headless mode before exiting
    #[arg(long, value_name = "COUNT", default_value_t = 600)]
    pub ticks: u64,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available integrators and exit
    #[arg(long)]
    pub list_integrators: bool,
}

/// Handles the --list-integrators flag by printing available integrators and exiting
pub fn handle_list_integrators() {
    let registry = IntegratorRegistry::new().with_standard_integrators();
    println!("Available integrators:");
    for name in registry.list_available() {
        println!("  - {name}");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        println!("\nAliases:");
        for (alias, target) in aliases {
            println!("  - {alias} -> {target}");
        }
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
///
/// An explicitly named file that is missing or fails to parse is an error;
/// the user config location silently falls back to defaults.
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        if !Path::new(config_path).exists() {
            return Err(CliError::ConfigLoad(format!("{config_path} does not exist")));
        }
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load(config_path).map_err(|err| CliError::ConfigLoad(err.to_string()))?
    } else {
        SimulationConfig::load_from_user_config()
    };

    apply_overrides(args, &mut config)?;

    config.validate().map_err(CliError::InvalidConfig)?;

    Ok(config)
}

fn apply_overrides(args: &Args, config: &mut SimulationConfig) -> Result<(), CliError> {
    if let Some(integrator_type) = &args.integrator {
        // Validate integrator name against registry
        let registry = IntegratorRegistry::new().with_standard_integrators();
        let integrator = registry
            .create(integrator_type)
            .map_err(CliError::InvalidIntegrator)?;

        println!("Using integrator: {}", integrator.name());
        config.physics.integrator = integrator_type.clone();
    }

    if let Some(time_step) = args.time_step {
        println!("Overriding time step to: {time_step} s");
        config.physics.time_step = time_step;
    }

    if let Some(steps_per_tick) = args.steps_per_tick {
        println!("Overriding steps per tick to: {steps_per_tick}");
        config.physics.steps_per_tick = steps_per_tick;
    }

    if let Some(trail_capacity) = args.trail_capacity {
        println!("Overriding trail capacity to: {trail_capacity}");
        config.physics.trail_capacity = trail_capacity;
    }

    if args.autostart || args.headless {
        config.physics.autostart = true;
    }

    Ok(())
}
