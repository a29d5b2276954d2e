//! Triangle geometry helpers.
//!
//! Face normal and area are both derived from the same edge-vector
//! cross product (its magnitude equals 2 × triangle area).

use glam::Vec3;
use velum_types::constants::DEGENERATE_AREA_THRESHOLD;

/// Unit face normal and area of the triangle `(a, b, c)`.
///
/// Returns `None` for degenerate triangles (collinear or coincident
/// vertices), where no meaningful normal exists.
pub fn normal_and_area(a: Vec3, b: Vec3, c: Vec3) -> Option<(Vec3, f32)> {
    let e1 = b - a;
    let e2 = c - a;
    let cross = e1.cross(e2);
    let len = cross.length();
    if len <= DEGENERATE_AREA_THRESHOLD {
        return None;
    }
    Some((cross / len, 0.5 * len))
}

/// Area of the triangle `(a, b, c)`; zero when degenerate.
pub fn area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    0.5 * (b - a).cross(c - a).length()
}
