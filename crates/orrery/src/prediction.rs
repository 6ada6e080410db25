//! Forward trajectory sampling for a single planet

use nalgebra::Point2;

use crate::body::{BodyId, Planet, Sun};
use crate::config::SimulationParameters;
use crate::tick::tick;

/// Predicts where a planet will be over the next `steps` ticks
///
/// Runs full ticks (gravity and mergers) on a private copy of the system and
/// records the target's position after each one. The caller's planets and
/// Sun are never modified.
///
/// Returns an empty path when the target is not among `planets` or there is
/// no Sun. If the target is consumed by a merger the path stops at its last
/// position.
///
/// # Examples
///
/// ```
/// use orrery::prediction::predict;
/// use orrery::body::BodyId;
/// use orrery::config::SimulationParameters;
///
/// let path = predict(BodyId::new(), &[], None, &SimulationParameters::default(), 1.0, 10);
/// assert!(path.is_empty());
/// ```
pub fn predict(
    target: BodyId,
    planets: &[Planet],
    sun: Option<&Sun>,
    params: &SimulationParameters,
    dt: f64,
    steps: usize,
) -> Vec<Point2<f64>> {
    let Some(sun) = sun else {
        return Vec::new();
    };
    if !planets.iter().any(|p| p.id() == target) {
        return Vec::new();
    }

    let mut scratch = planets.to_vec();
    let mut path = Vec::with_capacity(steps);

    for _ in 0..steps {
        scratch = tick(sun, &scratch, params, dt).planets;

        match scratch.iter().find(|p| p.id() == target) {
            Some(planet) => path.push(planet.body.position),
            None => break,
        }
    }

    path
}
