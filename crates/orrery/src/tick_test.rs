use approx::assert_relative_eq;
use nalgebra::Vector2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::config::SimulationParameters;
use crate::forces::DirectGravity;
use crate::integrator::SemiImplicitEuler;
use crate::test_support::{make_planet, make_sun};
use crate::tick::*;

#[test]
fn test_paused_tick_is_identity() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![
        make_planet("A", 1.0, 5.0, [100.0, 0.0], [0.0, 1.0]),
        make_planet("B", 1.0, 5.0, [102.0, 0.0], [0.0, 1.0]),
    ];

    for dt in [0.0, -0.5, f64::NAN] {
        let outcome = tick(&sun, &planets, &params, dt);
        assert_eq!(outcome.planets, planets);
        assert!(outcome.collisions.is_empty());
    }
}

#[test]
fn test_empty_system() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);

    assert_eq!(tick(&sun, &[], &params, 1.0), TickOutcome::default());
}

#[test]
fn test_collision_uses_post_integration_positions() {
    // Apart before the tick, overlapping after it
    let params = SimulationParameters {
        gravity: 0.0,
        sun_mass: 1.0,
    };
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![
        make_planet("A", 1.0, 5.0, [100.0, 0.0], [3.0, 0.0]),
        make_planet("B", 1.0, 5.0, [112.0, 0.0], [-3.0, 0.0]),
    ];

    let outcome = tick(&sun, &planets, &params, 1.0);

    assert_eq!(outcome.planets.len(), 1);
    assert_eq!(outcome.collisions.len(), 1);
    assert_relative_eq!(outcome.collisions[0].position.x, 106.0, epsilon = 1e-12);
    assert_eq!(outcome.planets[0].body.velocity, Vector2::zeros());
}

#[test]
fn test_moving_apart_do_not_merge() {
    let params = SimulationParameters {
        gravity: 0.0,
        sun_mass: 1.0,
    };
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![
        make_planet("A", 1.0, 5.0, [100.0, 0.0], [-3.0, 0.0]),
        make_planet("B", 1.0, 5.0, [112.0, 0.0], [3.0, 0.0]),
    ];

    let outcome = tick(&sun, &planets, &params, 1.0);

    assert_eq!(outcome.planets.len(), 2);
    assert!(outcome.collisions.is_empty());
}

#[test]
fn test_tick_with_matches_default_tick() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![
        make_planet("A", 1.0, 5.0, [150.0, 0.0], [0.0, 0.6]),
        make_planet("B", 3.0, 5.0, [0.0, -220.0], [0.5, 0.0]),
    ];

    let a = tick(&sun, &planets, &params, 0.5);
    let b = tick_with(&SemiImplicitEuler, &DirectGravity::new(), &sun, &planets, &params, 0.5);

    assert_eq!(a, b);
}

#[test]
fn test_tick_does_not_mutate_input() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![make_planet("A", 1.0, 5.0, [150.0, 0.0], [0.0, 0.6])];
    let before = planets.clone();

    let _ = tick(&sun, &planets, &params, 1.0);

    assert_eq!(planets, before);
}

#[test]
fn test_tick_with_rng_is_reproducible() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![
        make_planet("A", 1.0, 5.0, [150.0, 0.0], [0.0, 0.6]),
        make_planet("B", 2.0, 5.0, [156.0, 0.0], [0.0, 0.6]),
    ];

    let a = tick_with_rng(&sun, &planets, &params, 1.0, &mut ChaChaRng::seed_from_u64(3));
    let b = tick_with_rng(&sun, &planets, &params, 1.0, &mut ChaChaRng::seed_from_u64(3));

    assert_eq!(a.collisions.len(), 1);
    assert_eq!(a, b);

    // Same motion as the unseeded tick, only the merged id differs
    let plain = tick(&sun, &planets, &params, 1.0);
    assert_eq!(plain.planets[0].body.position, a.planets[0].body.position);
    assert_ne!(plain.planets[0].id(), a.planets[0].id());
}
