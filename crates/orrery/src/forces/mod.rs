//! Force models for the simulation
//!
//! This module provides the `ForceModel` trait and the direct pairwise
//! gravity used by the integrator.

use nalgebra::Vector2;

use crate::body::{Planet, Sun};

pub mod gravity;


pub use gravity::{gravitational_force, DirectGravity};

/// Softening length as a fraction of the smaller body radius
pub const SOFTENING_FRACTION: f64 = 0.01;

/// Below this fraction of the smaller radius the pair exerts no force at all
pub const CUTOFF_FRACTION: f64 = 0.1;

/// A source of force on planets
///
/// # Examples
///
/// ```
/// use orrery::forces::{DirectGravity, ForceModel};
/// use orrery::factory::{create_sun, create_planet, EditablePlanetParams};
/// use nalgebra::Point2;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(1);
/// let sun = create_sun(Point2::origin(), 10_000.0, &mut rng).unwrap();
/// let params = EditablePlanetParams::new("Earth", 9.0, 1.0, 150.0);
/// let planets = vec![create_planet(&params, &sun, 6.674e-3, &mut rng).unwrap()];
///
/// let force = DirectGravity::new().net_force(0, &sun, &planets, 6.674e-3);
///
/// // Pulled back toward the Sun
/// assert!(force.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Total force on `planets[idx]` from the Sun and every other planet
    fn net_force(&self, idx: usize, sun: &Sun, planets: &[Planet], gravity: f64) -> Vector2<f64>;
}
