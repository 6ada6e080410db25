//! Overlap detection between planets

use std::collections::HashSet;

use crate::body::{BodyId, Planet};
use crate::math::distance_squared;

/// A detected overlap between two planets
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Index of the first-scanned planet in the scanned list
    pub index_a: usize,
    /// Index of the second planet (always greater than `index_a`)
    pub index_b: usize,
    pub body_a: BodyId,
    pub body_b: BodyId,
    /// Distance between the two centers
    pub separation: f64,
}

/// Whether two planets overlap: squared center distance below the squared
/// sum of radii
pub fn overlaps(a: &Planet, b: &Planet) -> bool {
    let radius_sum = a.body.radius + b.body.radius;
    distance_squared(&a.body.position, &b.body.position) < radius_sum * radius_sum
}

/// Finds the pairs to merge this tick
///
/// Scans pairs `(i, j)` with `i < j` in list order. Once a planet is part of
/// a pair it is skipped for the rest of the scan, so every planet appears in
/// at most one event. New overlaps created by a merge are not chained within
/// the same call.
///
/// # Examples
///
/// ```
/// use orrery::collisions::detect_collisions;
///
/// assert!(detect_collisions(&[]).is_empty());
/// ```
pub fn detect_collisions(planets: &[Planet]) -> Vec<CollisionEvent> {
    let mut consumed: HashSet<BodyId> = HashSet::new();
    let mut events = Vec::new();

    for (i, a) in planets.iter().enumerate() {
        if consumed.contains(&a.id()) {
            continue;
        }

        let partner = planets
            .iter()
            .enumerate()
            .skip(i + 1)
            .filter(|(_, b)| !consumed.contains(&b.id()))
            .find(|(_, b)| overlaps(a, b));

        if let Some((j, b)) = partner {
            consumed.insert(a.id());
            consumed.insert(b.id());
            events.push(CollisionEvent {
                index_a: i,
                index_b: j,
                body_a: a.id(),
                body_b: b.id(),
                separation: a.body.distance_to(&b.body),
            });
        }
    }

    events
}
