//! Verlet point-mass particle.
//!
//! Stores current and previous position; velocity is derived from their
//! difference rather than kept as a separate field. This keeps the
//! integrator and the positional constraint solver from ever holding
//! inconsistent velocity state: constraints only move `position`, and
//! the implied velocity follows automatically.

use serde::{Deserialize, Serialize};
use velum_math::Vec3;
use velum_types::Scalar;

/// A point mass integrated with explicit Verlet.
///
/// A particle with `inverse_mass == 0` is fixed (pinned): integration,
/// constraint projection, and contact correction all leave it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    position: Vec3,
    previous_position: Vec3,
    force: Vec3,
    mass: Scalar,
    inverse_mass: Scalar,
}

impl Particle {
    /// Creates a particle at rest at `position`.
    ///
    /// Non-positive `mass` yields `inverse_mass = 0`, i.e. a fixed particle.
    pub fn new(position: Vec3, mass: Scalar) -> Self {
        Self {
            position,
            previous_position: position,
            force: Vec3::ZERO,
            mass,
            inverse_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
        }
    }

    /// Advances the particle by one Verlet step.
    ///
    /// `new = 2·pos − prev + (force / mass)·dt²`, then the force
    /// accumulator is cleared. Fixed particles only clear forces.
    pub fn update(&mut self, dt: Scalar) {
        if self.is_fixed() {
            self.clear_forces();
            return;
        }

        let acceleration = self.force * self.inverse_mass;
        let new_position =
            2.0 * self.position - self.previous_position + acceleration * dt * dt;

        self.previous_position = self.position;
        self.position = new_position;

        self.clear_forces();
    }

    /// Accumulates `force` for the next integration step.
    pub fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Resets the force accumulator to zero.
    pub fn clear_forces(&mut self) {
        self.force = Vec3::ZERO;
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position at the previous step.
    #[inline]
    pub fn previous_position(&self) -> Vec3 {
        self.previous_position
    }

    /// Moves the particle without touching its position history.
    ///
    /// Used by constraint projection and contact correction, which are
    /// positional and deliberately leave the implied velocity to adjust.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Implicit velocity: the displacement over the last step.
    ///
    /// This is `position − previous_position`, NOT divided by `dt`;
    /// it is only an approximation tied to the step size the caller used.
    pub fn velocity(&self) -> Vec3 {
        self.position - self.previous_position
    }

    /// Injects a velocity by back-solving the previous position.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.previous_position = self.position - velocity;
    }

    /// Particle mass.
    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Inverse mass; zero for fixed particles.
    #[inline]
    pub fn inverse_mass(&self) -> Scalar {
        self.inverse_mass
    }

    /// Sets the mass and recomputes the inverse mass.
    pub fn set_mass(&mut self, mass: Scalar) {
        self.mass = mass;
        self.inverse_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };
    }

    /// True when the particle is pinned in place.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Pins or releases the particle. The stored mass is untouched, so
    /// releasing restores the original inverse mass.
    pub fn set_fixed(&mut self, fixed: bool) {
        if fixed {
            self.inverse_mass = 0.0;
        } else {
            self.inverse_mass = if self.mass > 0.0 { 1.0 / self.mass } else { 0.0 };
        }
    }

    /// Force accumulated so far this step.
    pub fn accumulated_force(&self) -> Vec3 {
        self.force
    }
}
