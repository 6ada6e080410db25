//! Host-side holder for a running sandbox
//!
//! Owns the bodies, the configuration, the clock, the trails and a seeded
//! RNG, and validates every change a user can make.

use log::{debug, info};
use nalgebra::Point2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::{BodyId, Planet, Sun};
use crate::config::{validate_gravity, SimulationConfig, TimeControl};
use crate::error::{BodyError, ConfigError, Result, SystemError};
use crate::factory::{create_planet, create_sun, unique_name, EditablePlanetParams};
use crate::invariants::{physics_quantities, PhysicsQuantities};
use crate::prediction::predict;
use crate::tick::{tick_with_rng, TickOutcome};
use crate::trail::TrailMap;

/// Complete, caller-owned state of a running sandbox
///
/// The engine functions are stateless; this struct is the host side that
/// keeps bodies, parameters, the clock and trails between ticks.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Elapsed simulated time
    pub time: f64,
    sun: Sun,
    planets: Vec<Planet>,
    config: SimulationConfig,
    trails: TrailMap,
    tick_count: u64,
    rng: ChaChaRng,
}

impl SystemState {
    /// Creates a system holding only the Sun
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::Config`] when `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::state::SystemState;
    /// use orrery::config::SimulationConfig;
    /// use nalgebra::Point2;
    ///
    /// let config = SimulationConfig { seed: Some(1), ..Default::default() };
    /// let system = SystemState::new(Point2::new(400.0, 300.0), config).unwrap();
    ///
    /// assert_eq!(system.planet_count(), 0);
    /// assert_eq!(system.sun().body.mass, 10_000.0);
    /// ```
    pub fn new(sun_position: Point2<f64>, config: SimulationConfig) -> Result<Self, SystemError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::from_entropy(),
        };
        let sun = create_sun(sun_position, config.params.sun_mass, &mut rng)?;
        let trails = TrailMap::new(config.trail_length);

        Ok(Self {
            time: 0.0,
            sun,
            planets: Vec::new(),
            config,
            trails,
            tick_count: 0,
            rng,
        })
    }

    /// Creates a system and places one planet per entry of `planets`
    pub fn with_planets(
        sun_position: Point2<f64>,
        config: SimulationConfig,
        planets: &[EditablePlanetParams],
    ) -> Result<Self, SystemError> {
        let mut system = Self::new(sun_position, config)?;
        system.reset(planets)?;
        Ok(system)
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn trails(&self) -> &TrailMap {
        &self.trails
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn planet(&self, id: BodyId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id() == id)
    }

    /// Adds a planet on a circular orbit and returns its id
    ///
    /// The name gets a `_N` suffix if another planet already uses it.
    pub fn add_planet(&mut self, params: &EditablePlanetParams) -> Result<BodyId> {
        let params = EditablePlanetParams {
            name: unique_name(&params.name, &self.planets),
            ..params.clone()
        };
        let planet = create_planet(&params, &self.sun, self.config.params.gravity, &mut self.rng)?;
        let id = planet.id();

        self.trails.ensure(id);
        self.planets.push(planet);
        Ok(id)
    }

    /// Removes a planet and its trail
    pub fn remove_planet(&mut self, id: BodyId) -> Option<Planet> {
        let idx = self.planets.iter().position(|p| p.id() == id)?;
        let removed = self.planets.remove(idx);
        self.trails.remove(id);
        debug!("removed planet {} `{}`", id, removed.name());
        Some(removed)
    }

    /// Renames a planet; its id and trail are untouched
    ///
    /// Returns `false` if no planet has this id.
    pub fn rename_planet(&mut self, id: BodyId, name: impl Into<String>) -> bool {
        match self.planets.iter_mut().find(|p| p.id() == id) {
            Some(planet) => {
                planet.body.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Changes the gravitational constant; zero switches gravity off
    pub fn set_gravity(&mut self, gravity: f64) -> Result<(), ConfigError> {
        validate_gravity(gravity)?;
        self.config.params.gravity = gravity;
        Ok(())
    }

    /// Changes the Sun's mass in both the parameters and the Sun itself
    pub fn set_sun_mass(&mut self, mass: f64) -> Result<()> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(BodyError::InvalidMass(mass));
        }
        self.config.params.sun_mass = mass;
        self.sun.body.mass = mass;
        Ok(())
    }

    pub fn time_control(&self) -> &TimeControl {
        &self.config.time_control
    }

    pub fn time_control_mut(&mut self) -> &mut TimeControl {
        &mut self.config.time_control
    }

    /// Replaces every planet with freshly placed ones, clears the trails and
    /// restarts the clock
    ///
    /// Clashing names get a `_N` suffix, as in [`add_planet`](Self::add_planet).
    /// Time control is left as is. Nothing changes if any entry is invalid.
    pub fn reset(&mut self, planets: &[EditablePlanetParams]) -> Result<()> {
        let gravity = self.config.params.gravity;
        let mut fresh: Vec<Planet> = Vec::with_capacity(planets.len());
        for params in planets {
            let params = EditablePlanetParams {
                name: unique_name(&params.name, &fresh),
                ..params.clone()
            };
            fresh.push(create_planet(&params, &self.sun, gravity, &mut self.rng)?);
        }

        self.planets = fresh;
        self.trails.reset(&self.planets);
        self.time = 0.0;
        self.tick_count = 0;
        info!("system reset with {} planet(s)", self.planets.len());
        Ok(())
    }

    /// Advances the system by one tick of `time_scale`, unless paused
    ///
    /// Trails record the new positions; trails of merged planets are dropped.
    /// Merged planets draw their ids from the system's RNG.
    pub fn tick(&mut self) -> TickOutcome {
        let dt = self.config.time_control.effective_dt();
        if dt <= 0.0 || self.planets.is_empty() {
            return TickOutcome {
                planets: self.planets.clone(),
                collisions: Vec::new(),
            };
        }

        let outcome = tick_with_rng(&self.sun, &self.planets, &self.config.params, dt, &mut self.rng);

        self.planets = outcome.planets.clone();
        self.time += dt;
        self.tick_count += 1;

        if !outcome.collisions.is_empty() {
            self.trails.retain_live(&self.planets);
        }
        self.trails.record(&self.planets);

        outcome
    }

    pub fn physics_quantities(&self) -> PhysicsQuantities {
        physics_quantities(&self.sun, &self.planets, self.config.params.gravity)
    }

    /// Predicted path of one planet at the current time scale
    pub fn predict(&self, id: BodyId) -> Vec<Point2<f64>> {
        predict(
            id,
            &self.planets,
            Some(&self.sun),
            &self.config.params,
            self.config.time_control.time_scale,
            self.config.prediction_steps,
        )
    }
}
