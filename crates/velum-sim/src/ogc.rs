//! Offset Geometric Contact (OGC) resolution.
//!
//! Converts per-step contacts into two separate responses:
//!
//! 1. A spring–damper **force** on the *effective* penetration (raw
//!    penetration plus the predictive offset magnitude), accumulated
//!    for the next integration step.
//! 2. An immediate **position correction** that removes most of the
//!    penetration this step, split by inverse-mass ratio for dynamic
//!    pairs.
//!
//! Because the offset grows with penetration, the spring stiffens the
//! deeper a particle sinks, which keeps the response stable across
//! widely varying penetration depths without exploding on contact.

use velum_math::Vec3;

use crate::contact::Contact;
use crate::particle::Particle;

/// Aggregate numbers from one resolution pass, for telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionStats {
    /// Number of contacts processed.
    pub contact_count: u32,
    /// Maximum penetration depth seen (meters).
    pub max_penetration: f32,
    /// Sum of scalar contact force magnitudes.
    pub total_force: f32,
}

/// The OGC contact model.
///
/// Holds the tunable contact parameters; all per-contact state lives in
/// the [`Contact`] records, recomputed fresh each step.
#[derive(Debug, Clone)]
pub struct OgcContactModel {
    contact_radius: f32,
    stiffness: f32,
    damping: f32,
    position_correction_factor: f32,
}

impl OgcContactModel {
    /// Creates a model with the given offset radius, spring stiffness,
    /// and normal-velocity damping. Position correction defaults to 0.8.
    pub fn new(contact_radius: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            contact_radius,
            stiffness,
            damping,
            position_correction_factor: 0.8,
        }
    }

    /// Resolves every contact in order: offset geometry, force law,
    /// force application, then immediate position correction.
    pub fn process_contacts(
        &self,
        contacts: &mut [Contact],
        particles: &mut [Particle],
    ) -> ResolutionStats {
        let mut stats = ResolutionStats::default();

        for contact in contacts.iter_mut() {
            contact.offset_geometry = self.offset_geometry(contact);
            self.compute_contact_force(contact, particles);
            self.apply_contact_force(contact, particles);
            self.apply_position_correction(contact, particles);

            stats.contact_count += 1;
            stats.max_penetration = stats.max_penetration.max(contact.penetration_depth);
            stats.total_force += contact.force;
        }

        stats
    }

    /// The predictive offset: `radius · n̂`, grown by half the
    /// penetration when the contact already penetrates.
    pub fn offset_geometry(&self, contact: &Contact) -> Vec3 {
        let mut offset = self.contact_radius * contact.normal;
        if contact.penetration_depth > 0.0 {
            offset += 0.5 * contact.penetration_depth * contact.normal;
        }
        offset
    }

    /// Spring–damper force law on the effective penetration.
    ///
    /// The clamp to zero is the only separation handling: a separating
    /// contact (positive normal velocity) sees its force reduced by the
    /// damping term and floored at zero, so contacts push but never pull.
    fn compute_contact_force(&self, contact: &mut Contact, particles: &[Particle]) {
        let normal_velocity = self.relative_velocity(contact, particles).dot(contact.normal);

        let spring_force = if contact.penetration_depth > 0.0 {
            let effective_penetration =
                contact.penetration_depth + contact.offset_geometry.length();
            self.stiffness * effective_penetration
        } else {
            0.0
        };

        let damping_force = self.damping * normal_velocity;

        contact.force = (spring_force - damping_force).max(0.0);
        contact.force_direction = contact.normal;
    }

    /// Applies the contact force to A and, for a dynamic pair, the
    /// negated force to B. Static geometry receives no reaction.
    fn apply_contact_force(&self, contact: &Contact, particles: &mut [Particle]) {
        if contact.force <= 0.0 {
            return;
        }

        let force = contact.force * contact.force_direction;
        particles[contact.particle_a.index()].add_force(force);

        if let Some(b) = contact.particle_b {
            particles[b.index()].add_force(-force);
        }
    }

    /// Immediate positional bias: removes `penetration · factor` along
    /// the normal this step, rather than waiting for the spring force to
    /// act at the next integration.
    fn apply_position_correction(&self, contact: &Contact, particles: &mut [Particle]) {
        if contact.penetration_depth <= 0.0 {
            return;
        }

        let correction =
            contact.penetration_depth * self.position_correction_factor * contact.normal;
        let ia = contact.particle_a.index();

        match contact.particle_b {
            Some(b) => {
                let ib = b.index();
                let inv_mass_a = particles[ia].inverse_mass();
                let inv_mass_b = particles[ib].inverse_mass();
                let total_inv_mass = inv_mass_a + inv_mass_b;
                if total_inv_mass > 0.0 {
                    let pos_a = particles[ia].position();
                    let pos_b = particles[ib].position();
                    if inv_mass_a > 0.0 {
                        particles[ia]
                            .set_position(pos_a + correction * (inv_mass_a / total_inv_mass));
                    }
                    if inv_mass_b > 0.0 {
                        particles[ib]
                            .set_position(pos_b - correction * (inv_mass_b / total_inv_mass));
                    }
                }
            }
            None => {
                if particles[ia].inverse_mass() > 0.0 {
                    let pos_a = particles[ia].position();
                    particles[ia].set_position(pos_a + correction);
                }
            }
        }
    }

    /// Relative velocity of A with respect to B (zero for static B).
    fn relative_velocity(&self, contact: &Contact, particles: &[Particle]) -> Vec3 {
        let velocity_a = particles[contact.particle_a.index()].velocity();
        let velocity_b = contact
            .particle_b
            .map(|b| particles[b.index()].velocity())
            .unwrap_or(Vec3::ZERO);
        velocity_a - velocity_b
    }

    /// Sets the OGC offset radius.
    pub fn set_contact_radius(&mut self, radius: f32) {
        self.contact_radius = radius;
    }

    /// The OGC offset radius.
    pub fn contact_radius(&self) -> f32 {
        self.contact_radius
    }

    /// Sets the contact spring stiffness.
    pub fn set_stiffness(&mut self, stiffness: f32) {
        self.stiffness = stiffness;
    }

    /// The contact spring stiffness.
    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Sets the normal-velocity damping.
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping;
    }

    /// The normal-velocity damping.
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Sets the fraction of penetration corrected positionally per step.
    pub fn set_position_correction_factor(&mut self, factor: f32) {
        self.position_correction_factor = factor;
    }

    /// The positional correction fraction.
    pub fn position_correction_factor(&self) -> f32 {
        self.position_correction_factor
    }
}
