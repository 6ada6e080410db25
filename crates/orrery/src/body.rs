use std::fmt;

use nalgebra::{Point2, Vector2};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a body for its whole lifetime
///
/// Ids are never reused: a merger retires both parent ids and mints a new one.
/// Every lookup the engine performs goes through this id, never through the
/// display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub Uuid);

impl BodyId {
    /// Draws a fresh random (v4) id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derives an id from the given RNG, for reproducible runs
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::BodyId;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaChaRng;
    ///
    /// let a = BodyId::from_rng(&mut ChaChaRng::seed_from_u64(7));
    /// let b = BodyId::from_rng(&mut ChaChaRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl Default for BodyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of celestial body, used by renderers to pick visuals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Rocky,
    Gas,
    Dwarf,
    Asteroid,
    Comet,
}

/// Anything that takes part in gravity: has a position, a mass and a size
pub trait Massive {
    fn position(&self) -> Point2<f64>;
    fn mass(&self) -> f64;
    fn radius(&self) -> f64;
}

/// Fields shared by the Sun and by planets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub id: BodyId,
    /// Display label. Not unique and never used for identity.
    pub name: String,
    pub kind: BodyKind,
    /// Physical radius, also the collision size
    pub radius: f64,
    /// Fallback color when no texture is available
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_path: Option<String>,
    pub mass: f64,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    /// Spin in radians per unit time; negative is retrograde
    pub rotation_speed: f64,
    /// Spin angle in `[0, 2π)`
    pub current_rotation: f64,
}

impl CelestialBody {
    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    /// Translational kinetic energy, ½mv²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Solid-sphere moment of inertia, I = 0.4·m·r²
    pub fn moment_of_inertia(&self) -> f64 {
        0.4 * self.mass * self.radius * self.radius
    }

    /// Spin kinetic energy, ½Iω²
    pub fn rotational_energy(&self) -> f64 {
        0.5 * self.moment_of_inertia() * self.rotation_speed * self.rotation_speed
    }

    pub fn distance_to<M: Massive + ?Sized>(&self, other: &M) -> f64 {
        (other.position() - self.position).magnitude()
    }
}

impl Massive for CelestialBody {
    fn position(&self) -> Point2<f64> {
        self.position
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

/// The central star
///
/// The engine never moves the Sun: it pulls on every planet but feels no
/// pull itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    #[serde(flatten)]
    pub body: CelestialBody,
}

impl Massive for Sun {
    fn position(&self) -> Point2<f64> {
        self.body.position
    }

    fn mass(&self) -> f64 {
        self.body.mass
    }

    fn radius(&self) -> f64 {
        self.body.radius
    }
}

/// A body orbiting the Sun, advanced by the integrator every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    #[serde(flatten)]
    pub body: CelestialBody,
    /// Distance from the Sun the planet was created at; cleared on merge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_orbital_radius: Option<f64>,
    /// Acceleration applied during the last step (diagnostic only)
    pub acceleration: Vector2<f64>,
}

impl Planet {
    /// Wraps a body as a planet with no recorded acceleration
    pub fn from_body(body: CelestialBody) -> Self {
        Self {
            body,
            initial_orbital_radius: None,
            acceleration: Vector2::zeros(),
        }
    }

    pub fn id(&self) -> BodyId {
        self.body.id
    }

    pub fn name(&self) -> &str {
        &self.body.name
    }

    /// Distance from a center, usually the Sun
    pub fn orbital_radius(&self, center: &Point2<f64>) -> f64 {
        (self.body.position - center).magnitude()
    }
}

impl Massive for Planet {
    fn position(&self) -> Point2<f64> {
        self.body.position
    }

    fn mass(&self) -> f64 {
        self.body.mass
    }

    fn radius(&self) -> f64 {
        self.body.radius
    }
}
