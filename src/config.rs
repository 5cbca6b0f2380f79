use crate::physics::math::Scalar;
use crate::physics::trail::DEFAULT_TRAIL_CAPACITY;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix for environment variable overrides, e.g. `ORBITDRIFT__PHYSICS__TIME_STEP=5`
pub const ENV_PREFIX: &str = "ORBITDRIFT";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub rendering: RenderingConfig,
    pub ui: UiConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: Scalar,
    pub central_mass: Scalar,
    /// Fixed integration step in simulated seconds
    pub time_step: Scalar,
    /// Integration steps run per rendered frame
    pub steps_per_tick: usize,
    pub trail_capacity: usize,
    pub integrator: String,
    pub initial_position: [Scalar; 2],
    pub initial_velocity: [Scalar; 2],
    pub autostart: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.67430e-11,
            central_mass: 5.972e24,
            time_step: 10.0,
            steps_per_tick: 10,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            integrator: "midpoint".to_string(),
            initial_position: [0.0, 1.0e7],
            initial_velocity: [7.8e3, 0.0],
            autostart: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderingConfig {
    pub meters_to_pixels: Scalar,
    /// Drawn size of the central body in meters; the physics ignores it
    pub central_body_radius: Scalar,
    pub central_body_color: String,
    pub satellite_color: String,
    pub trail_color: String,
    pub satellite_marker_radius: f32,
    pub trail_line_width: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            meters_to_pixels: 1e-5,
            central_body_radius: 6371e3,
            central_body_color: "#3366FF".to_string(),
            satellite_color: "#FF3333".to_string(),
            trail_color: "#FFCC00".to_string(),
            satellite_marker_radius: 8.0,
            trail_line_width: 2.0,
        }
    }
}

impl RenderingConfig {
    pub fn central_body_color(&self) -> Color {
        parse_color(&self.central_body_color, Color::srgb_u8(0x33, 0x66, 0xFF))
    }

    pub fn satellite_color(&self) -> Color {
        parse_color(&self.satellite_color, Color::srgb_u8(0xFF, 0x33, 0x33))
    }

    pub fn trail_color(&self) -> Color {
        parse_color(&self.trail_color, Color::srgb_u8(0xFF, 0xCC, 0x00))
    }
}

fn parse_color(hex: &str, fallback: Color) -> Color {
    match Srgba::hex(hex) {
        Ok(color) => color.into(),
        Err(e) => {
            warn!("Invalid color '{}': {:?}. Using fallback.", hex, e);
            fallback
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub button_padding: f32,
    pub button_gap: f32,
    pub button_margin: f32,
    pub button_border_radius: f32,
    pub button_width: f32,
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            button_padding: 5.0,
            button_gap: 10.0,
            button_margin: 10.0,
            button_border_radius: 5.0,
            button_width: 110.0,
            font_size: 14.0,
        }
    }
}

/// Configuration loading and validation failures
#[derive(Debug)]
pub enum ConfigError {
    /// The layered sources could not be read or deserialized
    Load(String),
    /// Serializing or writing the configuration failed
    Save(String),
    /// No platform configuration directory could be determined
    NoConfigDirectory,
    /// A value is outside the range the simulation can run with
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "failed to load configuration: {msg}"),
            ConfigError::Save(msg) => write!(f, "failed to save configuration: {msg}"),
            ConfigError::NoConfigDirectory => write!(f, "no user configuration directory"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SimulationConfig {
    /// Loads defaults, then the TOML file at `path` if present, then
    /// `ORBITDRIFT__SECTION__KEY` environment variables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_layered(path.as_ref(), ENV_PREFIX)
    }

    fn load_layered(path: &Path, env_prefix: &str) -> Result<Self, ConfigError> {
        ::config::Config::builder()
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|layered| layered.try_deserialize::<Self>())
            .map_err(|e| ConfigError::Load(e.to_string()))
    }

    /// Load configuration from a file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found. Using defaults.", path.display());
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Platform-specific location of the user's `config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "orbitdrift")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(path),
            None => {
                warn!("{}. Using defaults.", ConfigError::NoConfigDirectory);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Save(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Save(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Save(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;

        if !physics.time_step.is_finite() || physics.time_step <= 0.0 {
            return Err(invalid("physics.time_step", "must be a positive number of seconds"));
        }
        if physics.steps_per_tick == 0 {
            return Err(invalid("physics.steps_per_tick", "must be at least 1"));
        }
        if physics.trail_capacity == 0 {
            return Err(invalid("physics.trail_capacity", "must be at least 1"));
        }

        let mu = physics.gravitational_constant * physics.central_mass;
        if !mu.is_finite() || mu <= 0.0 {
            return Err(invalid(
                "physics.central_mass",
                "G times the central mass must be positive",
            ));
        }

        let [x, y] = physics.initial_position;
        if !x.is_finite() || !y.is_finite() {
            return Err(invalid("physics.initial_position", "values must be finite"));
        }
        if !physics.initial_velocity.iter().all(|value| value.is_finite()) {
            return Err(invalid("physics.initial_velocity", "values must be finite"));
        }
        if x == 0.0 && y == 0.0 {
            return Err(invalid(
                "physics.initial_position",
                "cannot start at the central body's center",
            ));
        }

        if !self.rendering.meters_to_pixels.is_finite() || self.rendering.meters_to_pixels <= 0.0
        {
            return Err(invalid("rendering.meters_to_pixels", "must be positive"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("orbitdrift-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_match_reference_scenario() {
        let config = SimulationConfig::default();

        assert_eq!(config.physics.time_step, 10.0);
        assert_eq!(config.physics.steps_per_tick, 10);
        assert_eq!(config.physics.trail_capacity, 1000);
        assert_eq!(config.physics.initial_position, [0.0, 1.0e7]);
        assert_eq!(config.physics.initial_velocity, [7.8e3, 0.0]);
        assert_eq!(config.physics.integrator, "midpoint");
        assert!(!config.physics.autostart);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("round-trip.toml");
        let mut config = SimulationConfig::default();
        config.physics.steps_per_tick = 25;
        config.physics.integrator = "rk4".to_string();

        config.save(&path).unwrap();
        let loaded = SimulationConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "[physics]\ntime_step = 2.5\n").unwrap();

        let loaded = SimulationConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.physics.time_step, 2.5);
        assert_eq!(loaded.physics.steps_per_tick, 10);
        assert_eq!(loaded.rendering, RenderingConfig::default());
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let loaded = SimulationConfig::load_or_default(temp_path("does-not-exist.toml"));

        assert_eq!(loaded, SimulationConfig::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        // Own prefix so parallel tests loading with ORBITDRIFT are unaffected
        const PREFIX: &str = "ORBITDRIFT_ENV_LAYER";
        const VAR: &str = "ORBITDRIFT_ENV_LAYER__PHYSICS__STEPS_PER_TICK";

        let path = temp_path("env-layer.toml");
        std::fs::write(&path, "[physics]\nsteps_per_tick = 3\ntime_step = 2.5\n").unwrap();

        let from_file = SimulationConfig::load_layered(&path, PREFIX).unwrap();
        unsafe { std::env::set_var(VAR, "7") };
        let layered = SimulationConfig::load_layered(&path, PREFIX);
        unsafe { std::env::remove_var(VAR) };
        std::fs::remove_file(&path).ok();

        let layered = layered.unwrap();
        assert_eq!(from_file.physics.steps_per_tick, 3);
        assert_eq!(layered.physics.steps_per_tick, 7);
        assert_eq!(layered.physics.time_step, 2.5);
    }

    #[test]
    fn test_user_config_path_names_config_toml() {
        if let Some(path) = SimulationConfig::user_config_path() {
            assert_eq!(path.file_name().and_then(|name| name.to_str()), Some("config.toml"));
            assert!(path.parent().is_some_and(|dir| dir.ends_with("orbitdrift")));
        }
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = temp_path("malformed.toml");
        std::fs::write(&path, "[physics\ntime_step = ").unwrap();

        let loaded = SimulationConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, SimulationConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases: Vec<(&str, Box<dyn Fn(&mut SimulationConfig)>)> = vec![
            ("physics.time_step", Box::new(|c| c.physics.time_step = 0.0)),
            ("physics.time_step", Box::new(|c| c.physics.time_step = Scalar::NAN)),
            ("physics.steps_per_tick", Box::new(|c| c.physics.steps_per_tick = 0)),
            ("physics.trail_capacity", Box::new(|c| c.physics.trail_capacity = 0)),
            ("physics.central_mass", Box::new(|c| c.physics.central_mass = -1.0)),
            (
                "physics.initial_position",
                Box::new(|c| c.physics.initial_position = [0.0, 0.0]),
            ),
            (
                "physics.initial_velocity",
                Box::new(|c| c.physics.initial_velocity = [Scalar::INFINITY, 0.0]),
            ),
        ];

        for (expected_field, mutate) in cases {
            let mut config = SimulationConfig::default();
            mutate(&mut config);
            match config.validate() {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected invalid {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_colors_parse_with_fallback() {
        let mut rendering = RenderingConfig::default();
        assert_eq!(
            rendering.trail_color(),
            Color::from(Srgba::rgb_u8(0xFF, 0xCC, 0x00))
        );

        rendering.trail_color = "not a color".to_string();
        assert_eq!(rendering.trail_color(), Color::srgb_u8(0xFF, 0xCC, 0x00));
    }
}
