//! Time integration for the planets
//!
//! The integrator produces a new planet list and never touches its input, so
//! live state and speculative runs (predictions) cannot alias each other.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::body::{Planet, Sun};
use crate::config::SimulationParameters;
use crate::forces::{DirectGravity, ForceModel};

/// A time integrator for the planets of a system
pub trait Integrator: Send + Sync {
    /// Advance every planet by one timestep
    ///
    /// # Arguments
    ///
    /// * `sun` - The Sun; it pulls on planets but is not moved
    /// * `planets` - Current planets
    /// * `params` - Gravity and Sun mass
    /// * `dt` - Timestep; `dt <= 0` returns the planets unchanged
    /// * `force` - Force model to compute accelerations
    fn step(
        &self,
        sun: &Sun,
        planets: &[Planet],
        params: &SimulationParameters,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Vec<Planet>;

    /// Advance the planets by `n_steps` timesteps, without collisions
    fn integrate(
        &self,
        sun: &Sun,
        planets: &[Planet],
        params: &SimulationParameters,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> Vec<Planet> {
        (0..n_steps).fold(planets.to_vec(), |current, _| {
            self.step(sun, &current, params, dt, force)
        })
    }
}

/// Semi-implicit (symplectic) Euler integrator
///
/// Each step computes all forces from the current positions, then for every
/// planet:
///
/// 1. a = F / m
/// 2. v' = v + a·dt
/// 3. x' = x + v'·dt (the updated velocity, not the old one)
/// 4. θ' = (θ + ω·dt) mod 2π
///
/// # Examples
///
/// ```
/// use orrery::integrator::{Integrator, SemiImplicitEuler};
/// use orrery::forces::DirectGravity;
/// use orrery::config::SimulationParameters;
/// use orrery::factory::{create_planet, create_sun, EditablePlanetParams};
/// use nalgebra::Point2;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(5);
/// let params = SimulationParameters::default();
/// let sun = create_sun(Point2::origin(), params.sun_mass, &mut rng).unwrap();
/// let earth = create_planet(&EditablePlanetParams::new("Earth", 9.0, 1.0, 150.0), &sun, params.gravity, &mut rng).unwrap();
///
/// let planets = vec![earth];
/// let next = SemiImplicitEuler.step(&sun, &planets, &params, 1.0, &DirectGravity::new());
///
/// assert_ne!(next[0].body.position, planets[0].body.position);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(
        &self,
        sun: &Sun,
        planets: &[Planet],
        params: &SimulationParameters,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Vec<Planet> {
        if dt.is_nan() || dt <= 0.0 {
            return planets.to_vec();
        }

        // Compute all accelerations from the pre-step positions first
        let accelerations: Vec<Vector2<f64>> = (0..planets.len())
            .map(|i| force.net_force(i, sun, planets, params.gravity) / planets[i].body.mass)
            .collect();

        planets
            .iter()
            .zip(accelerations)
            .map(|(planet, acceleration)| {
                let mut next = planet.clone();
                next.body.velocity += acceleration * dt;
                next.body.position += next.body.velocity * dt;
                next.body.current_rotation =
                    advance_rotation(planet.body.current_rotation, planet.body.rotation_speed, dt);
                next.acceleration = acceleration;
                next
            })
            .collect()
    }
}

/// Advances a spin angle and wraps it into `[0, 2π)`, retrograde spins included
pub fn advance_rotation(angle: f64, rotation_speed: f64, dt: f64) -> f64 {
    let wrapped = (angle + rotation_speed * dt).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// One semi-implicit Euler step with direct gravity
///
/// Shorthand for `SemiImplicitEuler.step(.., &DirectGravity::new())`.
pub fn step(sun: &Sun, planets: &[Planet], params: &SimulationParameters, dt: f64) -> Vec<Planet> {
    SemiImplicitEuler.step(sun, planets, params, dt, &DirectGravity::new())
}
