//! Creation of fully initialized bodies from user-editable parameters
//!
//! This is the boundary where invalid input is rejected. Everything past the
//! factory assumes positive mass and radius.

use std::f64::consts::TAU;

use log::{debug, warn};
use nalgebra::{Point2, Vector2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::body::{BodyId, BodyKind, CelestialBody, Planet, Sun};
use crate::config::{SUN_COLOR, SUN_RADIUS, SUN_ROTATION_SPEED, SUN_TEXTURE_PATH};
use crate::error::{BodyError, Result};
use crate::orbit::orbital_velocity;

/// What a user can edit about a planet before it is placed
///
/// Position, velocity, spin angle and id are derived by [`create_planet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditablePlanetParams {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BodyKind,
    pub radius: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_path: Option<String>,
    pub mass: f64,
    /// Starting distance from the Sun
    pub initial_orbital_radius: f64,
    /// Spin in radians per unit time
    pub rotation_speed: f64,
}

impl EditablePlanetParams {
    /// A rocky, non-spinning planet with a default color
    pub fn new(name: impl Into<String>, radius: f64, mass: f64, initial_orbital_radius: f64) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::Rocky,
            radius,
            color: "gray".to_string(),
            texture_path: None,
            mass,
            initial_orbital_radius,
            rotation_speed: 0.0,
        }
    }

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f64) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Checks the invariants the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BodyError::EmptyName);
        }
        validate_mass(self.mass)?;
        validate_radius(self.radius)?;
        if !self.initial_orbital_radius.is_finite() || self.initial_orbital_radius < 0.0 {
            return Err(BodyError::InvalidOrbitalRadius(self.initial_orbital_radius));
        }
        if !self.rotation_speed.is_finite() {
            return Err(BodyError::InvalidRotationSpeed(self.rotation_speed));
        }
        Ok(())
    }
}

fn validate_mass(mass: f64) -> Result<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(BodyError::InvalidMass(mass))
    }
}

fn validate_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(BodyError::InvalidRadius(radius))
    }
}

/// Texture used when none is given: `planets/<lowercase name>.jpg`
pub fn default_texture_path(name: &str) -> String {
    format!("planets/{}.jpg", name.to_lowercase())
}

/// Creates a planet on a circular orbit around the Sun
///
/// The planet starts on the Sun's +x axis at `initial_orbital_radius`,
/// moving counter-clockwise at circular speed, with a random spin angle.
///
/// # Errors
///
/// Returns a [`BodyError`] when mass or radius is not positive, or any
/// numeric field is not finite.
///
/// # Examples
///
/// ```
/// use orrery::factory::{create_planet, create_sun, EditablePlanetParams};
/// use nalgebra::Point2;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let sun = create_sun(Point2::new(400.0, 300.0), 10_000.0, &mut rng).unwrap();
/// let earth = create_planet(&EditablePlanetParams::new("Earth", 9.0, 1.0, 150.0), &sun, 6.674e-3, &mut rng).unwrap();
///
/// assert_eq!(earth.body.position, Point2::new(550.0, 300.0));
/// assert!(earth.body.velocity.y > 0.0);
///
/// let bad = EditablePlanetParams::new("Ghost", 9.0, 0.0, 150.0);
/// assert!(create_planet(&bad, &sun, 6.674e-3, &mut rng).is_err());
/// ```
pub fn create_planet<R: Rng + ?Sized>(
    params: &EditablePlanetParams,
    sun: &Sun,
    gravity: f64,
    rng: &mut R,
) -> Result<Planet> {
    if let Err(err) = params.validate() {
        warn!("rejected planet `{}`: {}", params.name, err);
        return Err(err);
    }

    let position = sun.body.position + Vector2::new(params.initial_orbital_radius, 0.0);
    let velocity = orbital_velocity(&sun.body.position, &position, gravity, sun.body.mass);

    let texture_path = params
        .texture_path
        .clone()
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| default_texture_path(&params.name));

    let planet = Planet {
        body: CelestialBody {
            id: BodyId::from_rng(rng),
            name: params.name.clone(),
            kind: params.kind,
            radius: params.radius,
            color: params.color.clone(),
            texture_path: Some(texture_path),
            mass: params.mass,
            position,
            velocity,
            rotation_speed: params.rotation_speed,
            current_rotation: rng.gen_range(0.0..TAU),
        },
        initial_orbital_radius: Some(params.initial_orbital_radius),
        acceleration: Vector2::zeros(),
    };

    debug!(
        "created planet {} `{}` at r={} with speed {:.4}",
        planet.id(),
        planet.name(),
        params.initial_orbital_radius,
        velocity.magnitude()
    );

    Ok(planet)
}

/// Creates the single, stationary Sun
///
/// # Errors
///
/// Returns [`BodyError::InvalidMass`] for a non-positive or non-finite mass.
pub fn create_sun<R: Rng + ?Sized>(position: Point2<f64>, mass: f64, rng: &mut R) -> Result<Sun> {
    validate_mass(mass)?;

    Ok(Sun {
        body: CelestialBody {
            id: BodyId::from_rng(rng),
            name: "Sun".to_string(),
            kind: BodyKind::Star,
            radius: SUN_RADIUS,
            color: SUN_COLOR.to_string(),
            texture_path: Some(SUN_TEXTURE_PATH.to_string()),
            mass,
            position,
            velocity: Vector2::zeros(),
            rotation_speed: SUN_ROTATION_SPEED,
            current_rotation: 0.0,
        },
    })
}

/// Returns `requested`, or `requested_1`, `requested_2`, ... if the name is
/// already used by one of `planets`
///
/// Names are labels for people; the engine never relies on them.
///
/// # Examples
///
/// ```
/// use orrery::factory::unique_name;
///
/// assert_eq!(unique_name("Earth", &[]), "Earth");
/// ```
pub fn unique_name(requested: &str, planets: &[Planet]) -> String {
    let taken = |name: &str| planets.iter().any(|p| p.name() == name);

    if !taken(requested) {
        return requested.to_string();
    }

    (1..)
        .map(|n| format!("{requested}_{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| requested.to_string())
}
