//! Bounded position history per planet, keyed by id

use std::collections::{HashMap, HashSet, VecDeque};

use nalgebra::Point2;

use crate::body::{BodyId, Planet};

/// Recent positions of every tracked planet
///
/// Trails are keyed by [`BodyId`] only, so renaming a planet never loses its
/// trail. Each trail holds at most `capacity` points; the oldest point is
/// dropped on overflow.
///
/// # Examples
///
/// ```
/// use orrery::trail::TrailMap;
/// use orrery::body::BodyId;
/// use nalgebra::Point2;
///
/// let mut trails = TrailMap::new(2);
/// let id = BodyId::new();
/// for x in 0..3 {
///     trails.push(id, Point2::new(x as f64, 0.0));
/// }
///
/// let points: Vec<_> = trails.get(id).unwrap().iter().map(|p| p.x).collect();
/// assert_eq!(points, vec![1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrailMap {
    capacity: usize,
    trails: HashMap<BodyId, VecDeque<Point2<f64>>>,
}

impl TrailMap {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            trails: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&VecDeque<Point2<f64>>> {
        self.trails.get(&id)
    }

    /// Makes sure an (initially empty) trail exists for `id`
    pub fn ensure(&mut self, id: BodyId) {
        self.trails.entry(id).or_default();
    }

    /// Appends a point, dropping the oldest one past capacity
    pub fn push(&mut self, id: BodyId, point: Point2<f64>) {
        let trail = self.trails.entry(id).or_default();
        trail.push_back(point);
        while trail.len() > self.capacity {
            trail.pop_front();
        }
    }

    /// Appends the current position of every planet
    pub fn record(&mut self, planets: &[Planet]) {
        for planet in planets {
            self.push(planet.id(), planet.body.position);
        }
    }

    pub fn remove(&mut self, id: BodyId) -> Option<VecDeque<Point2<f64>>> {
        self.trails.remove(&id)
    }

    /// Drops trails whose planet no longer exists (merged or removed)
    pub fn retain_live(&mut self, planets: &[Planet]) {
        let live: HashSet<BodyId> = planets.iter().map(Planet::id).collect();
        self.trails.retain(|id, _| live.contains(id));
    }

    /// Replaces every trail with an empty one per planet
    pub fn reset(&mut self, planets: &[Planet]) {
        self.trails = planets.iter().map(|p| (p.id(), VecDeque::new())).collect();
    }
}
