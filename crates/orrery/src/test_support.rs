use nalgebra::{Point2, Vector2};

use crate::body::{BodyId, BodyKind, CelestialBody, Planet, Sun};

pub fn make_body(name: &str, mass: f64, radius: f64, position: [f64; 2], velocity: [f64; 2]) -> CelestialBody {
    CelestialBody {
        id: BodyId::new(),
        name: name.to_string(),
        kind: BodyKind::Rocky,
        radius,
        color: format!("{}-color", name.to_lowercase()),
        texture_path: None,
        mass,
        position: Point2::new(position[0], position[1]),
        velocity: Vector2::new(velocity[0], velocity[1]),
        rotation_speed: 0.0,
        current_rotation: 0.0,
    }
}

pub fn make_planet(name: &str, mass: f64, radius: f64, position: [f64; 2], velocity: [f64; 2]) -> Planet {
    Planet::from_body(make_body(name, mass, radius, position, velocity))
}

pub fn make_sun(mass: f64, position: [f64; 2]) -> Sun {
    let mut body = make_body("Sun", mass, 30.0, position, [0.0, 0.0]);
    body.kind = BodyKind::Star;
    Sun { body }
}
