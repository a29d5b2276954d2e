//! External force accumulation: gravity and aerodynamic (wind) force.
//!
//! Runs before integration each step. Gravity is per particle; wind is
//! per triangle, with each grid quad split into two triangles in a
//! fixed vertex order so the force distribution is deterministic.

use velum_math::{triangle, Vec3};

use crate::constraint::particle_index;
use crate::particle::Particle;

/// Accumulates `gravity · mass` into every non-fixed particle.
pub fn apply_gravity(particles: &mut [Particle], gravity: Vec3) {
    for particle in particles.iter_mut() {
        if !particle.is_fixed() {
            let weight = gravity * particle.mass();
            particle.add_force(weight);
        }
    }
}

/// Aerodynamic force on one triangle.
///
/// `wind · dot(normalize(wind), n̂) · area`, where `n̂` is the triangle's
/// unit normal. Returns zero for zero wind (nothing to normalize) and
/// for degenerate triangles (no defined normal).
pub fn wind_force(wind: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    if wind.length_squared() == 0.0 {
        return Vec3::ZERO;
    }

    let Some((normal, area)) = triangle::normal_and_area(p1, p2, p3) else {
        return Vec3::ZERO;
    };

    let wind_effect = wind.normalize().dot(normal);
    wind * wind_effect * area
}

/// Accumulates wind force over the whole grid.
///
/// Each quad is split into triangles `(p1, p2, p3)` and `(p2, p4, p3)`
/// where `p1..p4` are the quad's corners in reading order; each triangle
/// distributes a third of its force to each of its vertices.
pub fn apply_wind(particles: &mut [Particle], width: usize, height: usize, wind: Vec3) {
    if wind.length_squared() == 0.0 {
        return;
    }

    for y in 0..height.saturating_sub(1) {
        for x in 0..width.saturating_sub(1) {
            let p1 = particle_index(x, y, width).index();
            let p2 = particle_index(x + 1, y, width).index();
            let p3 = particle_index(x, y + 1, width).index();
            let p4 = particle_index(x + 1, y + 1, width).index();

            let force1 = wind_force(
                wind,
                particles[p1].position(),
                particles[p2].position(),
                particles[p3].position(),
            );
            particles[p1].add_force(force1 / 3.0);
            particles[p2].add_force(force1 / 3.0);
            particles[p3].add_force(force1 / 3.0);

            let force2 = wind_force(
                wind,
                particles[p2].position(),
                particles[p4].position(),
                particles[p3].position(),
            );
            particles[p2].add_force(force2 / 3.0);
            particles[p4].add_force(force2 / 3.0);
            particles[p3].add_force(force2 / 3.0);
        }
    }
}
