//! # velum-collide
//!
//! Analytic collision detection backends for Velum.
//!
//! The simulation core consumes collision candidates through the
//! [`CollisionBackend`](velum_sim::CollisionBackend) trait and does not
//! care how they are produced. This crate provides the analytic
//! implementation: each particle is tested as a small sphere against a
//! set of static environment shapes (spheres, vertical capped
//! cylinders, axis-aligned boxes), producing signed-distance candidates.
//!
//! ## Key Types
//!
//! - [`AnalyticBackend`] — the backend; owns the shape list
//! - [`Sphere`], [`Cylinder`], [`BoxShape`] — environment shapes with
//!   closest-surface queries

pub mod backend;
pub mod box_shape;
pub mod cylinder;
pub mod sphere;

use velum_math::Vec3;

pub use backend::{AnalyticBackend, Collider};
pub use box_shape::BoxShape;
pub use cylinder::Cylinder;
pub use sphere::Sphere;

/// Closest-surface query result: signed distance from the query point
/// to the shape surface (negative = inside), the outward unit normal at
/// the closest feature, and the closest surface point.
#[derive(Debug, Clone, Copy)]
pub struct SurfacePoint {
    /// Signed distance to the surface (negative inside the shape).
    pub distance: f32,
    /// Outward unit normal at the closest surface point.
    pub normal: Vec3,
    /// Closest point on the shape surface.
    pub point: Vec3,
}
