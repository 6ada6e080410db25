//! Error types for the boundaries of the engine.
//!
//! Only body creation, configuration loading and host state changes can fail. Stepping,
//! collision resolution, invariants and prediction have no error path.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("initial orbital radius must be non-negative and finite, got {0}")]
    InvalidOrbitalRadius(f64),

    #[error("rotation speed must be finite, got {0}")]
    InvalidRotationSpeed(f64),

    #[error("body name must not be empty")]
    EmptyName,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Failure to set up a [`SystemState`](crate::state::SystemState)
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Body(#[from] BodyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = BodyError> = std::result::Result<T, E>;
