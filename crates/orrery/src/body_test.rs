use approx::assert_relative_eq;
use nalgebra::Vector2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::{BodyId, BodyKind, Massive, Planet};
use crate::test_support::{make_body, make_planet, make_sun};

#[test]
fn test_body_ids_are_unique() {
    let ids: std::collections::HashSet<BodyId> = (0..100).map(|_| BodyId::new()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn test_body_id_from_rng_is_reproducible() {
    let mut rng_a = ChaChaRng::seed_from_u64(11);
    let mut rng_b = ChaChaRng::seed_from_u64(11);

    let first = BodyId::from_rng(&mut rng_a);
    assert_eq!(first, BodyId::from_rng(&mut rng_b));
    assert_ne!(first, BodyId::from_rng(&mut rng_a));
}

#[test]
fn test_momentum() {
    let body = make_body("A", 2.0, 1.0, [1.0, 0.0], [3.0, 4.0]);
    assert_eq!(body.momentum(), Vector2::new(6.0, 8.0));
}

#[test]
fn test_kinetic_energy() {
    let body = make_body("A", 2.0, 1.0, [0.0, 0.0], [3.0, 4.0]);

    // KE = 0.5 * 2 * 25
    assert_eq!(body.kinetic_energy(), 25.0);
}

#[test]
fn test_rotational_energy() {
    let mut body = make_body("A", 10.0, 2.0, [0.0, 0.0], [0.0, 0.0]);
    body.rotation_speed = -3.0;

    // I = 0.4 * 10 * 4 = 16, E = 0.5 * 16 * 9 = 72
    assert_relative_eq!(body.moment_of_inertia(), 16.0);
    assert_relative_eq!(body.rotational_energy(), 72.0);
}

#[test]
fn test_distance_to() {
    let a = make_body("A", 1.0, 1.0, [0.0, 0.0], [0.0, 0.0]);
    let b = make_planet("B", 1.0, 1.0, [3.0, 4.0], [0.0, 0.0]);

    assert_relative_eq!(a.distance_to(&b), 5.0);
}

#[test]
fn test_massive_delegates_to_body() {
    let planet = make_planet("P", 3.0, 2.0, [5.0, 6.0], [0.0, 0.0]);
    let sun = make_sun(100.0, [1.0, 1.0]);

    assert_eq!(Massive::mass(&planet), 3.0);
    assert_eq!(Massive::radius(&planet), 2.0);
    assert_eq!(Massive::position(&planet), planet.body.position);
    assert_eq!(Massive::mass(&sun), 100.0);
    assert_eq!(sun.body.kind, BodyKind::Star);
}

#[test]
fn test_planet_from_body_defaults() {
    let planet = Planet::from_body(make_body("P", 1.0, 1.0, [0.0, 0.0], [1.0, 0.0]));

    assert_eq!(planet.acceleration, Vector2::zeros());
    assert_eq!(planet.initial_orbital_radius, None);
    assert_eq!(planet.name(), "P");
}

#[test]
fn test_orbital_radius() {
    let planet = make_planet("P", 1.0, 1.0, [103.0, 104.0], [0.0, 0.0]);
    let center = nalgebra::Point2::new(100.0, 100.0);

    assert_relative_eq!(planet.orbital_radius(&center), 5.0);
}

#[test]
fn test_planet_serializes_camel_case() {
    let mut planet = make_planet("P", 1.0, 2.0, [0.0, 0.0], [0.0, 0.0]);
    planet.initial_orbital_radius = Some(150.0);

    let json = serde_json::to_value(&planet).unwrap();

    assert_eq!(json["kind"], "rocky");
    assert_eq!(json["initialOrbitalRadius"], 150.0);
    assert_eq!(json["rotationSpeed"], 0.0);
    assert!(json.get("texturePath").is_none());
}
