//! Analytic axis-aligned box shape.
//!
//! Used for floors and ledges: the original environment registers its
//! floor as a flat box rather than an infinite plane.

use velum_math::Vec3;

use crate::SurfacePoint;

/// A static axis-aligned box obstacle.
#[derive(Debug, Clone, Copy)]
pub struct BoxShape {
    /// Center of the box.
    pub center: Vec3,
    /// Half-extents along each axis.
    pub half_extents: Vec3,
}

impl BoxShape {
    /// Creates a box from its center and full size.
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    /// Closest surface point to `p`.
    pub fn surface_point(&self, p: Vec3) -> Option<SurfacePoint> {
        let local = p - self.center;
        let q = local.abs() - self.half_extents;

        if q.x > 0.0 || q.y > 0.0 || q.z > 0.0 {
            // Outside: clamp to the box and measure the gap.
            let closest = local.clamp(-self.half_extents, self.half_extents);
            let gap = local - closest;
            let dist = gap.length();
            let normal = gap / dist;
            return Some(SurfacePoint {
                distance: dist,
                normal,
                point: self.center + closest,
            });
        }

        // Inside: exit through the face with the smallest penetration.
        let pen_x = -q.x;
        let pen_y = -q.y;
        let pen_z = -q.z;
        let min_pen = pen_x.min(pen_y).min(pen_z);

        let normal = if min_pen == pen_x {
            Vec3::new(local.x.signum(), 0.0, 0.0)
        } else if min_pen == pen_y {
            Vec3::new(0.0, local.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, local.z.signum())
        };

        Some(SurfacePoint {
            distance: -min_pen,
            normal,
            point: p + normal * min_pen,
        })
    }
}
