//! Analytic vertical capped cylinder shape.
//!
//! The cylinder is aligned to the Y axis, matching the pedestal-style
//! obstacles the cloth drapes over.

use velum_math::Vec3;
use velum_types::constants::EPSILON;

use crate::SurfacePoint;

/// A static Y-axis capped cylinder obstacle.
#[derive(Debug, Clone, Copy)]
pub struct Cylinder {
    /// Center of the cylinder (mid-height).
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
    /// Half of the total height.
    pub half_height: f32,
}

impl Cylinder {
    /// Creates a cylinder from its center, radius, and full height.
    pub fn new(center: Vec3, radius: f32, height: f32) -> Self {
        Self {
            center,
            radius,
            half_height: height * 0.5,
        }
    }

    /// Closest surface point to `p`.
    ///
    /// Returns `None` for a point on the cylinder axis deeper than the
    /// caps — the radial direction is undefined there.
    pub fn surface_point(&self, p: Vec3) -> Option<SurfacePoint> {
        let local = p - self.center;
        let radial_len = (local.x * local.x + local.z * local.z).sqrt();

        // Signed distances to the infinite wall and the cap slab.
        let wall = radial_len - self.radius;
        let cap = local.y.abs() - self.half_height;
        let cap_sign = local.y.signum();

        if wall <= 0.0 && cap <= 0.0 {
            // Inside. Exit through the nearer feature.
            if -cap < -wall {
                return Some(SurfacePoint {
                    distance: cap,
                    normal: Vec3::new(0.0, cap_sign, 0.0),
                    point: Vec3::new(p.x, self.center.y + cap_sign * self.half_height, p.z),
                });
            }
            if radial_len <= EPSILON {
                // On the axis with the wall closest: no radial direction.
                return None;
            }
            let normal = Vec3::new(local.x / radial_len, 0.0, local.z / radial_len);
            return Some(SurfacePoint {
                distance: wall,
                normal,
                point: Vec3::new(
                    self.center.x + normal.x * self.radius,
                    p.y,
                    self.center.z + normal.z * self.radius,
                ),
            });
        }

        if wall > 0.0 && cap <= 0.0 {
            // Beside the wall.
            let normal = Vec3::new(local.x / radial_len, 0.0, local.z / radial_len);
            return Some(SurfacePoint {
                distance: wall,
                normal,
                point: Vec3::new(
                    self.center.x + normal.x * self.radius,
                    p.y,
                    self.center.z + normal.z * self.radius,
                ),
            });
        }

        if wall <= 0.0 {
            // Above or below a cap.
            return Some(SurfacePoint {
                distance: cap,
                normal: Vec3::new(0.0, cap_sign, 0.0),
                point: Vec3::new(p.x, self.center.y + cap_sign * self.half_height, p.z),
            });
        }

        // Outside both: closest feature is the cap rim.
        let radial = Vec3::new(local.x / radial_len, 0.0, local.z / radial_len);
        let rim = self.center
            + radial * self.radius
            + Vec3::new(0.0, cap_sign * self.half_height, 0.0);
        let gap = p - rim;
        let dist = gap.length();
        Some(SurfacePoint {
            distance: dist,
            normal: gap / dist,
            point: rim,
        })
    }
}
