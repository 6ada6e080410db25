//! Orbital insertion velocities

use nalgebra::{Point2, Vector2};

use crate::math::perpendicular_ccw;

/// Separations below this are treated as "at the center"
pub const MIN_ORBITAL_RADIUS: f64 = 1e-10;

/// Speed of a circular orbit, v = sqrt(G·M / r)
///
/// # Arguments
///
/// * `gravity` - Gravitational constant
/// * `central_mass` - Mass being orbited
/// * `radius` - Orbital radius
pub fn circular_orbital_speed(gravity: f64, central_mass: f64, radius: f64) -> f64 {
    (gravity * central_mass / radius).sqrt()
}

/// Velocity that puts a body on a counter-clockwise circular orbit
///
/// The velocity is perpendicular to the line from the central body to the
/// orbiting body, with magnitude `sqrt(G·M / r)`. A body sitting on the
/// center has no defined orbit and gets a zero velocity.
///
/// # Arguments
///
/// * `central_position` - Position of the central body
/// * `body_position` - Position of the orbiting body
/// * `gravity` - Gravitational constant
/// * `central_mass` - Mass of the central body
///
/// # Examples
///
/// ```
/// use orrery::orbit::orbital_velocity;
/// use nalgebra::Point2;
///
/// let v = orbital_velocity(&Point2::origin(), &Point2::new(100.0, 0.0), 1.0, 10_000.0);
///
/// // Straight "up" for a body to the right of the center
/// assert!(v.x.abs() < 1e-12);
/// assert!((v.y - 10.0).abs() < 1e-12);
/// ```
pub fn orbital_velocity(
    central_position: &Point2<f64>,
    body_position: &Point2<f64>,
    gravity: f64,
    central_mass: f64,
) -> Vector2<f64> {
    let offset = body_position - central_position;
    let r = offset.magnitude();

    if r < MIN_ORBITAL_RADIUS {
        return Vector2::zeros();
    }

    let speed = circular_orbital_speed(gravity, central_mass, r);
    perpendicular_ccw(&offset) * (speed / r)
}

/// Period of a circular orbit, T = 2π·r / v
pub fn circular_orbital_period(gravity: f64, central_mass: f64, radius: f64) -> f64 {
    std::f64::consts::TAU * radius / circular_orbital_speed(gravity, central_mass, radius)
}
