//! Collision resolution through perfectly inelastic mergers
//!
//! When two planets overlap they merge into a single planet that conserves:
//! - Total mass
//! - Total momentum
//! - Volume (equal density spheres)

use log::debug;
use nalgebra::{Point2, Vector2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::body::{BodyId, CelestialBody, Planet};
use crate::collisions::detection::detect_collisions;

/// One of the two planets consumed by a merger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollidedBody {
    pub id: BodyId,
    pub name: String,
    pub mass: f64,
}

impl From<&Planet> for CollidedBody {
    fn from(planet: &Planet) -> Self {
        Self {
            id: planet.id(),
            name: planet.body.name.clone(),
            mass: planet.body.mass,
        }
    }
}

/// What renderers and game logic learn about a merger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionInfo {
    /// Midpoint between the two centers at impact
    pub position: Point2<f64>,
    /// Larger of the two radii
    pub radius: f64,
    pub color1: String,
    pub color2: String,
    /// The two consumed planets, in scan order
    pub bodies: [CollidedBody; 2],
}

impl CollisionInfo {
    fn new(a: &Planet, b: &Planet) -> Self {
        Self {
            position: Point2::from((a.body.position.coords + b.body.position.coords) / 2.0),
            radius: a.body.radius.max(b.body.radius),
            color1: a.body.color.clone(),
            color2: b.body.color.clone(),
            bodies: [CollidedBody::from(a), CollidedBody::from(b)],
        }
    }

    /// Whether the given planet was consumed by this merger
    pub fn involves(&self, id: BodyId) -> bool {
        self.bodies.iter().any(|b| b.id == id)
    }
}

/// Planets after a collision pass, with the mergers that happened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    pub planets: Vec<Planet>,
    pub collisions: Vec<CollisionInfo>,
}

/// Merge two planets, conserving mass, momentum and volume
///
/// - mass: m = m_a + m_b
/// - velocity: (m_a·v_a + m_b·v_b) / m
/// - position: center of mass of the pair
/// - radius: (r_a³ + r_b³)^(1/3)
///
/// Kind, color, texture and spin come from the heavier planet; on equal
/// masses `a` wins. The merged planet gets `new_id`, no initial orbital
/// radius and zero acceleration.
///
/// # Examples
///
/// ```
/// use orrery::body::{BodyId, BodyKind, CelestialBody, Planet};
/// use orrery::collisions::merge_planets;
/// use nalgebra::{Point2, Vector2};
///
/// let planet = |name: &str, mass: f64, x: f64, vx: f64| Planet::from_body(CelestialBody {
///     id: BodyId::new(),
///     name: name.to_string(),
///     kind: BodyKind::Rocky,
///     radius: 5.0,
///     color: "gray".to_string(),
///     texture_path: None,
///     mass,
///     position: Point2::new(x, 0.0),
///     velocity: Vector2::new(vx, 0.0),
///     rotation_speed: 0.0,
///     current_rotation: 0.0,
/// });
///
/// let merged = merge_planets(&planet("A", 1.0, 0.0, 1.0), &planet("B", 3.0, 8.0, -1.0), BodyId::new());
///
/// assert_eq!(merged.body.mass, 4.0);
/// assert_eq!(merged.body.velocity, Vector2::new(-0.5, 0.0));
/// assert_eq!(merged.body.position, Point2::new(6.0, 0.0));
/// assert_eq!(merged.body.name, "B & A Merger");
/// ```
pub fn merge_planets(a: &Planet, b: &Planet, new_id: BodyId) -> Planet {
    let (larger, smaller) = if a.body.mass >= b.body.mass {
        (a, b)
    } else {
        (b, a)
    };

    let total_mass = a.body.mass + b.body.mass;

    let position = Point2::from(
        (a.body.position.coords * a.body.mass + b.body.position.coords * b.body.mass) / total_mass,
    );
    let velocity = (a.body.momentum() + b.body.momentum()) / total_mass;
    let radius = (a.body.radius.powi(3) + b.body.radius.powi(3)).cbrt();

    Planet {
        body: CelestialBody {
            id: new_id,
            name: format!("{} & {} Merger", larger.body.name, smaller.body.name),
            kind: larger.body.kind,
            radius,
            color: larger.body.color.clone(),
            texture_path: larger.body.texture_path.clone(),
            mass: total_mass,
            position,
            velocity,
            rotation_speed: larger.body.rotation_speed,
            current_rotation: larger.body.current_rotation,
        },
        initial_orbital_radius: None,
        acceleration: Vector2::zeros(),
    }
}

/// Detect overlaps and merge them pairwise
///
/// The merged planet takes the list slot of its first-scanned parent; the
/// second parent's slot is dropped. Other planets keep their relative order.
/// Each planet takes part in at most one merger per call.
///
/// # Examples
///
/// ```
/// use orrery::collisions::resolve_collisions;
///
/// let outcome = resolve_collisions(Vec::new());
/// assert!(outcome.planets.is_empty());
/// assert!(outcome.collisions.is_empty());
/// ```
pub fn resolve_collisions(planets: Vec<Planet>) -> CollisionOutcome {
    resolve_with_ids(planets, BodyId::new)
}

/// Like [`resolve_collisions`], drawing merged ids from `rng`
///
/// With a seeded RNG the merged ids are reproducible.
pub fn resolve_collisions_with<R: Rng + ?Sized>(planets: Vec<Planet>, rng: &mut R) -> CollisionOutcome {
    resolve_with_ids(planets, || BodyId::from_rng(&mut *rng))
}

fn resolve_with_ids<F>(planets: Vec<Planet>, mut next_id: F) -> CollisionOutcome
where
    F: FnMut() -> BodyId,
{
    let events = detect_collisions(&planets);
    if events.is_empty() {
        return CollisionOutcome {
            planets,
            collisions: Vec::new(),
        };
    }

    // slot i -> index of its partner, for first-scanned parents only
    let mut partner_of: Vec<Option<usize>> = vec![None; planets.len()];
    let mut absorbed = vec![false; planets.len()];
    for event in &events {
        partner_of[event.index_a] = Some(event.index_b);
        absorbed[event.index_b] = true;
    }

    let mut collisions = Vec::with_capacity(events.len());
    let survivors = planets
        .iter()
        .enumerate()
        .filter(|(i, _)| !absorbed[*i])
        .map(|(i, planet)| match partner_of[i] {
            Some(j) => {
                let other = &planets[j];
                let merged = merge_planets(planet, other, next_id());
                debug!(
                    "merged {} `{}` and {} `{}` into {} (mass {:.4})",
                    planet.id(),
                    planet.name(),
                    other.id(),
                    other.name(),
                    merged.id(),
                    merged.body.mass
                );
                collisions.push(CollisionInfo::new(planet, other));
                merged
            }
            None => planet.clone(),
        })
        .collect();

    CollisionOutcome {
        planets: survivors,
        collisions,
    }
}
