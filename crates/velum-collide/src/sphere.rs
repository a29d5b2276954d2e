//! Analytic sphere shape.

use velum_math::Vec3;
use velum_types::constants::EPSILON;

use crate::SurfacePoint;

/// A static sphere obstacle.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Closest surface point to `p`.
    ///
    /// Returns `None` when `p` coincides with the center — there is no
    /// defined normal, and the transient degeneracy is skipped rather
    /// than guessed at.
    pub fn surface_point(&self, p: Vec3) -> Option<SurfacePoint> {
        let to_point = p - self.center;
        let dist = to_point.length();
        if dist <= EPSILON {
            return None;
        }

        let normal = to_point / dist;
        Some(SurfacePoint {
            distance: dist - self.radius,
            normal,
            point: self.center + normal * self.radius,
        })
    }
}
