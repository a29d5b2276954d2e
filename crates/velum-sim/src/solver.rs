//! Gauss-Seidel constraint relaxation.
//!
//! An ordered, in-place sweep: each projection is applied immediately,
//! so later constraints in the same pass see the already-corrected
//! positions of earlier ones. This is what gives the mesh its drape
//! behavior, and it is why the sweep must stay sequential — batching or
//! parallelizing it changes convergence, not just speed.

use crate::constraint::Constraint;
use crate::particle::Particle;

/// One relaxation pass over the constraint list, in list order.
///
/// For each constraint the positional error is halved and split between
/// the endpoints by inverse-mass ratio. Zero-length edges are skipped
/// (no defined direction), as are pairs where both ends are fixed.
pub fn solve_constraints(particles: &mut [Particle], constraints: &[Constraint]) {
    for constraint in constraints {
        let ia = constraint.particle_a.index();
        let ib = constraint.particle_b.index();

        let pos_a = particles[ia].position();
        let pos_b = particles[ib].position();

        let delta = pos_b - pos_a;
        let current_length = delta.length();
        if current_length <= 0.0 {
            continue;
        }

        let difference = (current_length - constraint.rest_length) / current_length;
        let correction = delta * difference * 0.5;

        let inv_mass_a = particles[ia].inverse_mass();
        let inv_mass_b = particles[ib].inverse_mass();
        let total_inv_mass = inv_mass_a + inv_mass_b;
        if total_inv_mass <= 0.0 {
            continue;
        }

        if inv_mass_a > 0.0 {
            particles[ia].set_position(pos_a + correction * (inv_mass_a / total_inv_mass));
        }
        if inv_mass_b > 0.0 {
            particles[ib].set_position(pos_b - correction * (inv_mass_b / total_inv_mass));
        }
    }
}

/// Runs `iterations` sequential relaxation passes.
pub fn relax(particles: &mut [Particle], constraints: &[Constraint], iterations: u32) {
    for _ in 0..iterations {
        solve_constraints(particles, constraints);
    }
}
