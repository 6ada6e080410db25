//! One simulation tick: integrate, then resolve collisions
//!
//! The order is fixed. Collision detection always looks at post-integration
//! positions.

use log::trace;
use rand::Rng;

use crate::body::{Planet, Sun};
use crate::collisions::{resolve_collisions, resolve_collisions_with, CollisionInfo, CollisionOutcome};
use crate::config::SimulationParameters;
use crate::forces::{DirectGravity, ForceModel};
use crate::integrator::{Integrator, SemiImplicitEuler};

/// Planets after a tick and the mergers that happened during it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub planets: Vec<Planet>,
    /// Empty when nothing merged
    pub collisions: Vec<CollisionInfo>,
}

/// Advances the system by one tick with the default integrator and gravity
///
/// A non-positive (or NaN) `dt`, or an empty planet list, returns the planets
/// unchanged with no collisions.
///
/// # Examples
///
/// ```
/// use orrery::tick::tick;
/// use orrery::config::SimulationParameters;
/// use orrery::factory::{create_planet, create_sun, EditablePlanetParams};
/// use nalgebra::Point2;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(9);
/// let params = SimulationParameters::default();
/// let sun = create_sun(Point2::origin(), params.sun_mass, &mut rng).unwrap();
/// let planets = vec![create_planet(&EditablePlanetParams::new("Earth", 9.0, 1.0, 150.0), &sun, params.gravity, &mut rng).unwrap()];
///
/// let paused = tick(&sun, &planets, &params, 0.0);
/// assert_eq!(paused.planets, planets);
/// assert!(paused.collisions.is_empty());
/// ```
pub fn tick(sun: &Sun, planets: &[Planet], params: &SimulationParameters, dt: f64) -> TickOutcome {
    tick_with(&SemiImplicitEuler, &DirectGravity::new(), sun, planets, params, dt)
}

/// Advances the system by one tick with a chosen integrator and force model
pub fn tick_with(
    integrator: &dyn Integrator,
    force: &dyn ForceModel,
    sun: &Sun,
    planets: &[Planet],
    params: &SimulationParameters,
    dt: f64,
) -> TickOutcome {
    advance(integrator, force, sun, planets, params, dt, resolve_collisions)
}

/// Like [`tick`], drawing the ids of merged planets from `rng`
///
/// Two runs from the same seed produce the same merged ids.
pub fn tick_with_rng<R: Rng + ?Sized>(
    sun: &Sun,
    planets: &[Planet],
    params: &SimulationParameters,
    dt: f64,
    rng: &mut R,
) -> TickOutcome {
    advance(
        &SemiImplicitEuler,
        &DirectGravity::new(),
        sun,
        planets,
        params,
        dt,
        |moved| resolve_collisions_with(moved, rng),
    )
}

fn advance<F>(
    integrator: &dyn Integrator,
    force: &dyn ForceModel,
    sun: &Sun,
    planets: &[Planet],
    params: &SimulationParameters,
    dt: f64,
    resolve: F,
) -> TickOutcome
where
    F: FnOnce(Vec<Planet>) -> CollisionOutcome,
{
    if dt.is_nan() || dt <= 0.0 || planets.is_empty() {
        return TickOutcome {
            planets: planets.to_vec(),
            collisions: Vec::new(),
        };
    }

    let moved = integrator.step(sun, planets, params, dt, force);
    let resolved = resolve(moved);

    trace!(
        "tick dt={} planets {} -> {}, {} merger(s)",
        dt,
        planets.len(),
        resolved.planets.len(),
        resolved.collisions.len()
    );

    TickOutcome {
        planets: resolved.planets,
        collisions: resolved.collisions,
    }
}
