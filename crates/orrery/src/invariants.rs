//! Conserved quantities of the system
//!
//! Everything here is a read-only reduction over the current bodies and is
//! safe to call every frame.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::body::{Planet, Sun};
use crate::math::{center_of_mass, cross_z, distance};

/// Relative drift tolerated by [`validate_conservation`] by default
pub const DEFAULT_CONSERVATION_TOLERANCE: f64 = 0.05;

/// Floor on the denominator of relative changes, so quantities near zero do
/// not report huge relative drift
const RELATIVE_CHANGE_FLOOR: f64 = 0.001;

/// Snapshot of the system's physical quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsQuantities {
    /// Σ m·v over planets (the Sun is fixed and contributes nothing)
    pub total_momentum: Vector2<f64>,
    pub total_momentum_magnitude: f64,
    /// Σ m·(r × v)_z over planets, r taken from the center of mass
    pub total_angular_momentum: f64,
    /// Translational energy of planets plus spin energy of every body
    pub total_kinetic_energy: f64,
    /// -G·m₁·m₂/d over every distinct pair, Sun included
    pub total_potential_energy: f64,
    pub total_energy: f64,
    /// Center of mass of every body, Sun included
    pub system_center: Point2<f64>,
}

impl PhysicsQuantities {
    /// Whether the system is gravitationally bound (negative total energy)
    pub fn is_bound(&self) -> bool {
        self.total_energy < 0.0
    }
}

/// Computes the system's physical quantities
///
/// # Arguments
///
/// * `sun` - The Sun
/// * `planets` - All planets
/// * `gravity` - Gravitational constant
///
/// # Examples
///
/// ```
/// use orrery::invariants::physics_quantities;
/// use orrery::factory::create_sun;
/// use nalgebra::Point2;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let sun = create_sun(Point2::new(10.0, 20.0), 100.0, &mut ChaChaRng::seed_from_u64(0)).unwrap();
/// let q = physics_quantities(&sun, &[], 1.0);
///
/// assert_eq!(q.system_center, Point2::new(10.0, 20.0));
/// assert_eq!(q.total_potential_energy, 0.0);
/// ```
pub fn physics_quantities(sun: &Sun, planets: &[Planet], gravity: f64) -> PhysicsQuantities {
    let system_center = center_of_mass(
        std::iter::once((sun.body.mass, sun.body.position))
            .chain(planets.iter().map(|p| (p.body.mass, p.body.position))),
    )
    .unwrap_or(sun.body.position);

    let total_momentum = planets
        .iter()
        .map(|p| p.body.momentum())
        .fold(Vector2::zeros(), |acc, m| acc + m);

    let total_angular_momentum = planets
        .iter()
        .map(|p| {
            let r = p.body.position - system_center;
            p.body.mass * cross_z(&r, &p.body.velocity)
        })
        .sum();

    let translational: f64 = planets.iter().map(|p| p.body.kinetic_energy()).sum();
    let rotational: f64 = sun.body.rotational_energy()
        + planets.iter().map(|p| p.body.rotational_energy()).sum::<f64>();
    let total_kinetic_energy = translational + rotational;

    let total_potential_energy = potential_energy(sun, planets, gravity);

    PhysicsQuantities {
        total_momentum,
        total_momentum_magnitude: total_momentum.magnitude(),
        total_angular_momentum,
        total_kinetic_energy,
        total_potential_energy,
        total_energy: total_kinetic_energy + total_potential_energy,
        system_center,
    }
}

/// Gravitational potential energy over all distinct pairs
///
/// Pairs sitting at exactly the same point are skipped.
pub fn potential_energy(sun: &Sun, planets: &[Planet], gravity: f64) -> f64 {
    let pair = |m1: f64, p1: &Point2<f64>, m2: f64, p2: &Point2<f64>| {
        let d = distance(p1, p2);
        if d > 0.0 {
            -gravity * m1 * m2 / d
        } else {
            0.0
        }
    };

    let sun_planet: f64 = planets
        .iter()
        .map(|p| pair(sun.body.mass, &sun.body.position, p.body.mass, &p.body.position))
        .sum();

    // Each planet pair counted once
    let planet_planet: f64 = planets
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            planets[i + 1..]
                .iter()
                .map(move |b| pair(a.body.mass, &a.body.position, b.body.mass, &b.body.position))
        })
        .sum();

    sun_planet + planet_planet
}

/// Which quantities stayed within tolerance between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConservationReport {
    pub momentum_conserved: bool,
    pub angular_momentum_conserved: bool,
    pub energy_conserved: bool,
}

impl ConservationReport {
    pub fn all_conserved(&self) -> bool {
        self.momentum_conserved && self.angular_momentum_conserved && self.energy_conserved
    }
}

/// Relative change of a quantity, with a floor on the reference magnitude
pub fn relative_change(initial: f64, current: f64) -> f64 {
    (current - initial).abs() / initial.abs().max(RELATIVE_CHANGE_FLOOR)
}

/// Compares two snapshots for drift
///
/// Momentum is compared by magnitude. Each quantity passes when its relative
/// change is below `tolerance` (use [`DEFAULT_CONSERVATION_TOLERANCE`] for 5%).
pub fn validate_conservation(
    initial: &PhysicsQuantities,
    current: &PhysicsQuantities,
    tolerance: f64,
) -> ConservationReport {
    ConservationReport {
        momentum_conserved: relative_change(
            initial.total_momentum_magnitude,
            current.total_momentum_magnitude,
        ) < tolerance,
        angular_momentum_conserved: relative_change(
            initial.total_angular_momentum,
            current.total_angular_momentum,
        ) < tolerance,
        energy_conserved: relative_change(initial.total_energy, current.total_energy) < tolerance,
    }
}
