//! Error types for the Velum engine.
//!
//! All crates return `VelumResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Velum engine.
#[derive(Debug, Error)]
pub enum VelumError {
    /// Configuration or initialization value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A particle index is outside the particle array.
    #[error("Particle index {index} out of range (particle count: {count})")]
    ParticleOutOfRange { index: usize, count: usize },

    /// The collision backend reported a failure.
    #[error("Collision backend error: {0}")]
    Backend(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, VelumError>`.
pub type VelumResult<T> = Result<T, VelumError>;
