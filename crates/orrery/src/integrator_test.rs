use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::body::Planet;
use crate::config::SimulationParameters;
use crate::forces::{gravitational_force, DirectGravity};
use crate::integrator::*;
use crate::orbit::orbital_velocity;
use crate::test_support::{make_planet, make_sun};

fn make_orbiting_planet(params: &SimulationParameters, radius: f64) -> Planet {
    let v = orbital_velocity(&Point2::origin(), &Point2::new(radius, 0.0), params.gravity, params.sun_mass);
    make_planet("Earth", 1.0, 9.0, [radius, 0.0], [v.x, v.y])
}

#[test]
fn test_zero_dt_is_identity() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![make_orbiting_planet(&params, 150.0)];

    assert_eq!(step(&sun, &planets, &params, 0.0), planets);
    assert_eq!(step(&sun, &planets, &params, -1.0), planets);
    assert_eq!(step(&sun, &planets, &params, f64::NAN), planets);
}

#[test]
fn test_velocity_updated_before_position() {
    let params = SimulationParameters {
        gravity: 1.0,
        sun_mass: 1000.0,
    };
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![make_planet("P", 2.0, 1.0, [100.0, 0.0], [0.0, 0.5])];
    let dt = 2.0;

    let force = gravitational_force(&planets[0], &sun, params.gravity);
    let a = force / 2.0;
    let v_new = Vector2::new(0.0, 0.5) + a * dt;
    let p_new = Point2::new(100.0, 0.0) + v_new * dt;

    let next = step(&sun, &planets, &params, dt);

    assert_relative_eq!(next[0].acceleration.x, a.x, epsilon = 1e-15);
    assert_relative_eq!(next[0].body.velocity.x, v_new.x, epsilon = 1e-15);
    assert_relative_eq!(next[0].body.velocity.y, v_new.y, epsilon = 1e-15);
    // Position uses the new velocity, not the old one
    assert_relative_eq!(next[0].body.position.x, p_new.x, epsilon = 1e-12);
    assert_relative_eq!(next[0].body.position.y, p_new.y, epsilon = 1e-12);
}

#[test]
fn test_step_does_not_mutate_input() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![make_orbiting_planet(&params, 150.0)];
    let before = planets.clone();

    let next = step(&sun, &planets, &params, 1.0);

    assert_eq!(planets, before);
    assert_ne!(next, before);
}

#[test]
fn test_sun_is_not_moved() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let sun_before = sun.clone();
    let planets = vec![make_orbiting_planet(&params, 150.0)];

    SemiImplicitEuler.integrate(&sun, &planets, &params, 1.0, 100, &DirectGravity::new());

    assert_eq!(sun, sun_before);
}

#[test]
fn test_rotation_wraps_into_range() {
    assert_relative_eq!(advance_rotation(6.0, 0.5, 1.0), 6.5 - TAU, epsilon = 1e-12);
    assert_relative_eq!(advance_rotation(0.1, -0.3, 1.0), TAU - 0.2, epsilon = 1e-12);
    assert_relative_eq!(advance_rotation(PI, 0.0, 10.0), PI);

    for (angle, speed, dt) in [(0.0, -1e-20, 1.0), (3.0, 100.0, 7.3), (1.0, -50.0, 3.0)] {
        let wrapped = advance_rotation(angle, speed, dt);
        assert!((0.0..TAU).contains(&wrapped), "{wrapped} out of range");
    }
}

#[test]
fn test_step_advances_rotation() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let mut planet = make_orbiting_planet(&params, 150.0);
    planet.body.rotation_speed = -0.004;
    planet.body.current_rotation = 0.0;

    let next = step(&sun, &[planet], &params, 1.0);

    assert_relative_eq!(next[0].body.current_rotation, TAU - 0.004, epsilon = 1e-12);
}

#[test]
fn test_zero_gravity_is_straight_line_motion() {
    let params = SimulationParameters {
        gravity: 0.0,
        sun_mass: 10_000.0,
    };
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![
        make_planet("A", 1.0, 1.0, [100.0, 0.0], [0.5, -0.25]),
        make_planet("B", 50.0, 1.0, [-100.0, 40.0], [0.0, 1.0]),
    ];

    let end = SemiImplicitEuler.integrate(&sun, &planets, &params, 0.5, 200, &DirectGravity::new());

    for (start, finish) in planets.iter().zip(&end) {
        let expected = start.body.position + start.body.velocity * 100.0;
        assert_relative_eq!(finish.body.position.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(finish.body.position.y, expected.y, epsilon = 1e-9);
        assert_eq!(finish.body.velocity, start.body.velocity);
    }
}

#[test]
fn test_mutual_forces_keep_planet_momentum_without_sun_mass() {
    // With a negligible Sun only planet-planet forces act, and those cancel
    let params = SimulationParameters {
        gravity: 1.0,
        sun_mass: 1e-12,
    };
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);
    let planets = vec![
        make_planet("A", 3.0, 1.0, [500.0, 0.0], [0.0, 0.05]),
        make_planet("B", 1.0, 1.0, [520.0, 0.0], [0.0, -0.15]),
    ];
    let p0: Vector2<f64> = planets.iter().map(|p| p.body.momentum()).sum();

    let end = SemiImplicitEuler.integrate(&sun, &planets, &params, 0.1, 500, &DirectGravity::new());
    let p1: Vector2<f64> = end.iter().map(|p| p.body.momentum()).sum();

    assert_relative_eq!(p0.x, p1.x, epsilon = 1e-9);
    assert_relative_eq!(p0.y, p1.y, epsilon = 1e-9);
}

#[test]
fn test_empty_system() {
    let params = SimulationParameters::default();
    let sun = make_sun(params.sun_mass, [0.0, 0.0]);

    assert!(step(&sun, &[], &params, 1.0).is_empty());
}
