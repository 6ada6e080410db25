//! Simulation parameters, time control and host configuration
//!
//! All values use the sandbox's own scaled units: distances in screen-sized
//! units, masses relative to Earth = 1, time in ticks.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gravitational constant scaled for the sandbox
pub const DEFAULT_GRAVITY: f64 = 6.674e-3;
pub const DEFAULT_SUN_MASS: f64 = 10_000.0;

pub const DEFAULT_TIME_SCALE: f64 = 1.0;
pub const MIN_TIME_SCALE: f64 = 0.1;
pub const MAX_TIME_SCALE: f64 = 10.0;

/// Number of steps a trajectory prediction looks ahead
pub const PREDICTION_STEPS: usize = 500;
/// Maximum number of points kept per trail
pub const MAX_TRAIL_LENGTH: usize = 150;

pub const SUN_RADIUS: f64 = 30.0;
pub const SUN_COLOR: &str = "yellow";
pub const SUN_TEXTURE_PATH: &str = "planets/sun.jpg";
pub const SUN_ROTATION_SPEED: f64 = 0.001;

/// Physical inputs to every step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    pub gravity: f64,
    pub sun_mass: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            sun_mass: DEFAULT_SUN_MASS,
        }
    }
}

/// Whether the clock runs and how much simulated time passes per tick
///
/// # Examples
///
/// ```
/// use orrery::config::{TimeControl, MAX_TIME_SCALE};
///
/// let mut time = TimeControl::default();
/// for _ in 0..10 {
///     time.speed_up();
/// }
/// assert_eq!(time.time_scale, MAX_TIME_SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeControl {
    pub time_scale: f64,
    pub is_running: bool,
}

impl Default for TimeControl {
    fn default() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
            is_running: true,
        }
    }
}

impl TimeControl {
    /// Doubles the time scale, capped at [`MAX_TIME_SCALE`]
    pub fn speed_up(&mut self) {
        self.time_scale = (self.time_scale * 2.0).min(MAX_TIME_SCALE);
    }

    /// Halves the time scale, floored at [`MIN_TIME_SCALE`]
    pub fn slow_down(&mut self) {
        self.time_scale = (self.time_scale * 0.5).max(MIN_TIME_SCALE);
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    pub fn resume(&mut self) {
        self.is_running = true;
    }

    /// Time that passes on the next tick: zero while paused
    pub fn effective_dt(&self) -> f64 {
        if self.is_running {
            self.time_scale
        } else {
            0.0
        }
    }
}

/// Everything the host needs to drive a simulation
///
/// Loaded from JSON; omitted fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use orrery::config::{SimulationConfig, DEFAULT_SUN_MASS};
///
/// let config = SimulationConfig::from_json_str(r#"{ "params": { "gravity": 0.01, "sunMass": 10000 } }"#).unwrap();
/// assert_eq!(config.params.gravity, 0.01);
/// assert_eq!(config.params.sun_mass, DEFAULT_SUN_MASS);
/// assert_eq!(config.prediction_steps, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub params: SimulationParameters,
    pub time_control: TimeControl,
    pub prediction_steps: usize,
    pub trail_length: usize,
    /// Seed for the host RNG (initial spins, ids); random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            params: SimulationParameters::default(),
            time_control: TimeControl::default(),
            prediction_steps: PREDICTION_STEPS,
            trail_length: MAX_TRAIL_LENGTH,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the ranges the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let SimulationParameters { gravity, sun_mass } = self.params;

        validate_gravity(gravity)?;
        if !sun_mass.is_finite() || sun_mass <= 0.0 {
            return Err(invalid("sunMass", format!("must be finite and > 0, got {sun_mass}")));
        }

        let scale = self.time_control.time_scale;
        if !(MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&scale) {
            return Err(invalid(
                "timeScale",
                format!("must be within [{MIN_TIME_SCALE}, {MAX_TIME_SCALE}], got {scale}"),
            ));
        }
        if self.prediction_steps == 0 {
            return Err(invalid("predictionSteps", "must be at least 1".to_string()));
        }
        if self.trail_length == 0 {
            return Err(invalid("trailLength", "must be at least 1".to_string()));
        }

        Ok(())
    }
}

/// Gravity must be finite and non-negative; zero switches gravity off
pub fn validate_gravity(gravity: f64) -> Result<(), ConfigError> {
    if gravity.is_finite() && gravity >= 0.0 {
        Ok(())
    } else {
        Err(invalid("gravity", format!("must be finite and >= 0, got {gravity}")))
    }
}

fn invalid(name: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidParameter { name, reason }
}
