//! Distance constraints over the particle grid.
//!
//! Three classes of constraint connect a `width × height` grid:
//! structural (axis-aligned neighbors), shear (quad diagonals), and
//! bending (two-hop neighbors). The classes differ only in stiffness
//! and rest length; the solver treats them identically.
//!
//! Generation order is a contract, not an implementation detail: the
//! Gauss-Seidel solver visits constraints in list order and never runs
//! to convergence, so the order below (row-major, structural → shear →
//! bending per cell) must stay stable to keep trajectories reproducible.

use serde::{Deserialize, Serialize};
use velum_types::ParticleId;

use crate::config::SimulationConfig;

/// One distance constraint between two particles.
///
/// The constraint list is generated once at initialization and is
/// immutable for the lifetime of the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    /// First endpoint.
    pub particle_a: ParticleId,
    /// Second endpoint.
    pub particle_b: ParticleId,
    /// Target distance between the endpoints.
    pub rest_length: f32,
    /// Stiffness constant for this constraint's class.
    pub stiffness: f32,
    /// Damping constant. Unused by the positional solver; retained for
    /// a future velocity-based correction term.
    pub damping: f32,
}

impl Constraint {
    /// Creates a constraint between particles `a` and `b`.
    pub fn new(a: ParticleId, b: ParticleId, rest_length: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            particle_a: a,
            particle_b: b,
            rest_length,
            stiffness,
            damping,
        }
    }
}

/// Maps grid coordinates to the particle's index in row-major order.
#[inline]
pub fn particle_index(x: usize, y: usize, width: usize) -> ParticleId {
    ParticleId((y * width + x) as u32)
}

/// Generates the full constraint list for a `width × height` grid with
/// spacing `dx` (along x) and `dy` (along y).
///
/// Per cell, in row-major `(y, x)` order:
/// 1. structural right `(x,y)–(x+1,y)`, rest `dx`
/// 2. structural down `(x,y)–(x,y+1)`, rest `dy`
/// 3. shear down-right `(x,y)–(x+1,y+1)`, rest `√(dx²+dy²)`
/// 4. shear down-left `(x,y)–(x−1,y+1)`, rest `√(dx²+dy²)`
/// 5. bending right `(x,y)–(x+2,y)`, rest `2·dx`
/// 6. bending down `(x,y)–(x,y+2)`, rest `2·dy`
pub fn generate_constraints(
    width: usize,
    height: usize,
    dx: f32,
    dy: f32,
    config: &SimulationConfig,
) -> Vec<Constraint> {
    let mut constraints = Vec::new();
    let diagonal_length = (dx * dx + dy * dy).sqrt();

    for y in 0..height {
        for x in 0..width {
            let current = particle_index(x, y, width);

            // Structural (horizontal and vertical)
            if x + 1 < width {
                constraints.push(Constraint::new(
                    current,
                    particle_index(x + 1, y, width),
                    dx,
                    config.structural_stiffness,
                    config.constraint_damping,
                ));
            }

            if y + 1 < height {
                constraints.push(Constraint::new(
                    current,
                    particle_index(x, y + 1, width),
                    dy,
                    config.structural_stiffness,
                    config.constraint_damping,
                ));
            }

            // Shear (both quad diagonals)
            if x + 1 < width && y + 1 < height {
                constraints.push(Constraint::new(
                    current,
                    particle_index(x + 1, y + 1, width),
                    diagonal_length,
                    config.shear_stiffness,
                    config.constraint_damping,
                ));
            }

            if x > 0 && y + 1 < height {
                constraints.push(Constraint::new(
                    current,
                    particle_index(x - 1, y + 1, width),
                    diagonal_length,
                    config.shear_stiffness,
                    config.constraint_damping,
                ));
            }

            // Bending (two-hop connections)
            if x + 2 < width {
                constraints.push(Constraint::new(
                    current,
                    particle_index(x + 2, y, width),
                    2.0 * dx,
                    config.bending_stiffness,
                    config.constraint_damping,
                ));
            }

            if y + 2 < height {
                constraints.push(Constraint::new(
                    current,
                    particle_index(x, y + 2, width),
                    2.0 * dy,
                    config.bending_stiffness,
                    config.constraint_damping,
                ));
            }
        }
    }

    constraints
}
