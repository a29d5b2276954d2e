//! Collision backend contract.
//!
//! The core does not discover collisions. An injected backend is asked
//! once per step for raw candidates against whatever environment
//! geometry it manages; the core filters and resolves them. This keeps
//! the simulation testable with a deterministic stub and indifferent to
//! how candidates are found (analytic shape tests, a full broad/narrow
//! pipeline, ...).

use velum_math::Vec3;
use velum_types::{ParticleId, VelumResult};

use crate::particle::Particle;

/// A raw collision candidate reported by the backend.
///
/// Carries a *signed* distance along the contact normal: negative means
/// the particle already penetrates the geometry. The core accepts
/// candidates below its distance threshold and derives the penetration
/// depth as `max(0, −distance)`.
#[derive(Debug, Clone, Copy)]
pub struct RawCandidate {
    /// The dynamic particle involved.
    pub particle_a: ParticleId,
    /// Optional second dynamic particle; `None` means static geometry.
    pub particle_b: Option<ParticleId>,
    /// World-space contact point.
    pub point: Vec3,
    /// Unit contact normal, oriented from A toward B (or outward from
    /// static geometry).
    pub normal: Vec3,
    /// Signed distance along the normal (negative = penetrating).
    pub distance: f32,
}

/// Trait for collision candidate providers.
///
/// Called exactly once per `update(dt)`, synchronously. Implementations
/// must be deterministic for reproducible simulations.
pub trait CollisionBackend: Send {
    /// Detect collision candidates for the current particle positions.
    fn detect_contacts(&mut self, particles: &[Particle]) -> VelumResult<Vec<RawCandidate>>;

    /// Returns the backend strategy name.
    fn name(&self) -> &str;
}

/// No-op backend for contact-free simulations and tests.
pub struct NullBackend;

impl CollisionBackend for NullBackend {
    fn detect_contacts(&mut self, _particles: &[Particle]) -> VelumResult<Vec<RawCandidate>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "null_backend"
    }
}
