//! # velum-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Velum cloth simulation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Velum crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{VelumError, VelumResult};
pub use ids::ParticleId;
pub use scalar::Scalar;
