//! Analytic collision backend.
//!
//! Tests every particle, as a small sphere, against a list of static
//! environment shapes and reports signed-distance candidates. The
//! simulation core applies its own acceptance threshold on top; this
//! backend only culls pairs that are too far apart to matter.

use velum_math::Vec3;
use velum_sim::backend::{CollisionBackend, RawCandidate};
use velum_sim::Particle;
use velum_types::{constants, ParticleId, VelumResult};

use crate::box_shape::BoxShape;
use crate::cylinder::Cylinder;
use crate::sphere::Sphere;
use crate::SurfacePoint;

/// Radius at which particles are registered against the environment.
pub const DEFAULT_PARTICLE_RADIUS: f32 = 0.02;

/// A static environment shape.
#[derive(Debug, Clone, Copy)]
pub enum Collider {
    /// Sphere obstacle.
    Sphere(Sphere),
    /// Vertical capped cylinder obstacle.
    Cylinder(Cylinder),
    /// Axis-aligned box obstacle.
    Box(BoxShape),
}

impl Collider {
    fn surface_point(&self, p: Vec3) -> Option<SurfacePoint> {
        match self {
            Collider::Sphere(s) => s.surface_point(p),
            Collider::Cylinder(c) => c.surface_point(p),
            Collider::Box(b) => b.surface_point(p),
        }
    }
}

/// Collision backend over analytic static shapes.
///
/// All candidates it reports are against static geometry
/// (`particle_b = None`); iteration order over particles then shapes is
/// fixed, so candidate order is deterministic.
pub struct AnalyticBackend {
    colliders: Vec<Collider>,
    particle_radius: f32,
    /// Candidates farther than this (after subtracting the particle
    /// radius) are culled before they reach the core.
    candidate_margin: f32,
}

impl AnalyticBackend {
    /// Creates an empty backend with the default particle radius.
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            candidate_margin: constants::DEFAULT_CONTACT_DISTANCE_THRESHOLD,
        }
    }

    /// Sets the radius particles are tested with.
    pub fn set_particle_radius(&mut self, radius: f32) {
        self.particle_radius = radius;
    }

    /// Adds a sphere obstacle.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32) {
        self.colliders.push(Collider::Sphere(Sphere::new(center, radius)));
    }

    /// Adds a vertical capped cylinder obstacle.
    pub fn add_cylinder(&mut self, center: Vec3, radius: f32, height: f32) {
        self.colliders
            .push(Collider::Cylinder(Cylinder::new(center, radius, height)));
    }

    /// Adds a box obstacle; `size` is the full extent along each axis.
    pub fn add_floor(&mut self, center: Vec3, size: Vec3) {
        self.colliders.push(Collider::Box(BoxShape::new(center, size)));
    }

    /// Number of registered shapes.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

impl Default for AnalyticBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionBackend for AnalyticBackend {
    fn detect_contacts(&mut self, particles: &[Particle]) -> VelumResult<Vec<RawCandidate>> {
        let mut candidates = Vec::new();

        for (index, particle) in particles.iter().enumerate() {
            let position = particle.position();
            for collider in &self.colliders {
                let Some(surface) = collider.surface_point(position) else {
                    continue;
                };
                let distance = surface.distance - self.particle_radius;
                if distance < self.candidate_margin {
                    candidates.push(RawCandidate {
                        particle_a: ParticleId(index as u32),
                        particle_b: None,
                        point: surface.point,
                        normal: surface.normal,
                        distance,
                    });
                }
            }
        }

        Ok(candidates)
    }

    fn name(&self) -> &str {
        "analytic_backend"
    }
}
