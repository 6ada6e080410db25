//! Collision detection and resolution between planets
//!
//! Overlapping planets merge pairwise, conserving mass, momentum and volume.
//! The Sun never takes part in collisions.

pub mod detection;
pub mod resolution;


pub use detection::{detect_collisions, overlaps, CollisionEvent};
pub use resolution::{
    merge_planets, resolve_collisions, resolve_collisions_with, CollidedBody, CollisionInfo, CollisionOutcome,
};
