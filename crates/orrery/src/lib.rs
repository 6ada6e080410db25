//! Interactive 2D N-body engine
//!
//! Planets orbit a fixed Sun under pairwise softened gravity, advanced with
//! semi-implicit Euler. Overlapping planets merge inelastically. Every engine
//! function is a pure transformation over explicit state; [`state::SystemState`]
//! is the optional host-side holder.
//!
//! ```
//! use orrery::config::SimulationConfig;
//! use orrery::factory::EditablePlanetParams;
//! use orrery::state::SystemState;
//! use nalgebra::Point2;
//!
//! let config = SimulationConfig { seed: Some(42), ..Default::default() };
//! let mut system = SystemState::with_planets(
//!     Point2::origin(),
//!     config,
//!     &[EditablePlanetParams::new("Earth", 9.0, 1.0, 150.0)],
//! )
//! .unwrap();
//!
//! let outcome = system.tick();
//! assert_eq!(outcome.planets.len(), 1);
//! assert!(system.physics_quantities().total_potential_energy < 0.0);
//! ```

pub mod body;
pub mod collisions;
pub mod config;
pub mod error;
pub mod factory;
pub mod forces;
pub mod integrator;
pub mod invariants;
pub mod math;
pub mod orbit;
pub mod prediction;
pub mod state;
pub mod tick;
pub mod trail;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod integrator_test;
#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tick_test;

pub use body::{BodyId, BodyKind, CelestialBody, Massive, Planet, Sun};
pub use collisions::{CollisionInfo, CollisionOutcome};
pub use config::{SimulationConfig, SimulationParameters, TimeControl};
pub use error::{BodyError, ConfigError, SystemError};
pub use invariants::PhysicsQuantities;
pub use tick::{tick, TickOutcome};
