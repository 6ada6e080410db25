//! Direct N-body gravity (O(N²) implementation)

use nalgebra::Vector2;

use crate::body::{Massive, Planet, Sun};
use crate::forces::{ForceModel, CUTOFF_FRACTION, SOFTENING_FRACTION};

/// Gravitational force on `a` due to `b`
///
/// Magnitude is `G·mA·mB / (r² + ε²)` with `ε` = 1% of the smaller radius.
/// The direction is the unit vector from `a` to `b`, normalized by the
/// unsoftened distance. Pairs closer than 10% of the smaller radius exert
/// no force.
///
/// # Examples
///
/// ```
/// use orrery::forces::gravitational_force;
/// use orrery::factory::create_sun;
/// use nalgebra::Point2;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(3);
/// let a = create_sun(Point2::new(0.0, 0.0), 1.0, &mut rng).unwrap();
/// let b = create_sun(Point2::new(0.0, 0.0), 1.0, &mut rng).unwrap();
///
/// // Coincident centers: the safety cutoff applies
/// assert_eq!(gravitational_force(&a, &b, 1.0).magnitude(), 0.0);
/// ```
pub fn gravitational_force<A, B>(a: &A, b: &B, gravity: f64) -> Vector2<f64>
where
    A: Massive + ?Sized,
    B: Massive + ?Sized,
{
    pairwise_force(a, b, gravity, SOFTENING_FRACTION, CUTOFF_FRACTION)
}

fn pairwise_force<A, B>(
    a: &A,
    b: &B,
    gravity: f64,
    softening_fraction: f64,
    cutoff_fraction: f64,
) -> Vector2<f64>
where
    A: Massive + ?Sized,
    B: Massive + ?Sized,
{
    let dr = b.position() - a.position();
    let r2 = dr.magnitude_squared();

    let min_radius = a.radius().min(b.radius());
    let cutoff = min_radius * cutoff_fraction;
    if r2 < cutoff * cutoff {
        return Vector2::zeros();
    }

    let eps = min_radius * softening_fraction;
    let magnitude = gravity * a.mass() * b.mass() / (r2 + eps * eps);

    dr * (magnitude / r2.sqrt())
}

/// Direct O(N²) gravitational force computation
///
/// Sums the pull of the Sun and of every other planet. Fine for the tens of
/// bodies an interactive sandbox holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectGravity {
    /// Softening length as a fraction of the smaller radius of each pair
    pub softening_fraction: f64,
    /// Separation, as a fraction of the smaller radius, below which a pair
    /// exerts no force
    pub cutoff_fraction: f64,
}

impl DirectGravity {
    /// Creates direct gravity with the standard softening and cutoff
    pub fn new() -> Self {
        Self {
            softening_fraction: SOFTENING_FRACTION,
            cutoff_fraction: CUTOFF_FRACTION,
        }
    }

    /// Creates direct gravity with a custom softening fraction
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::forces::DirectGravity;
    ///
    /// let unsoftened = DirectGravity::with_softening(0.0);
    /// assert_eq!(unsoftened.softening_fraction, 0.0);
    /// ```
    pub fn with_softening(softening_fraction: f64) -> Self {
        Self {
            softening_fraction,
            ..Self::new()
        }
    }

    /// Force between an arbitrary pair using this model's settings
    pub fn force_between<A, B>(&self, a: &A, b: &B, gravity: f64) -> Vector2<f64>
    where
        A: Massive + ?Sized,
        B: Massive + ?Sized,
    {
        pairwise_force(a, b, gravity, self.softening_fraction, self.cutoff_fraction)
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn net_force(&self, idx: usize, sun: &Sun, planets: &[Planet], gravity: f64) -> Vector2<f64> {
        let planet = &planets[idx];
        let from_sun = self.force_between(planet, sun, gravity);

        // Self-exclusion is by id, not by name
        let from_planets = planets
            .iter()
            .filter(|other| other.id() != planet.id())
            .map(|other| self.force_between(planet, other, gravity))
            .fold(Vector2::zeros(), |acc, f| acc + f);

        from_sun + from_planets
    }
}
