//! OGC contact descriptors.
//!
//! Contacts are rebuilt from raw candidates every step — there is no
//! persistent contact identity or warm-starting. Changing that would
//! alter the model's stability characteristics, so the clean-slate
//! policy is deliberate.

use serde::{Deserialize, Serialize};
use velum_math::Vec3;
use velum_types::ParticleId;

use crate::backend::RawCandidate;

/// One resolved-or-pending contact for the current step.
///
/// Built from an accepted [`RawCandidate`]; the OGC model fills in the
/// offset geometry and force fields during resolution. The contact list
/// is part of the read-only query surface handed to a presentation
/// layer (e.g. for drawing contact markers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// The dynamic particle (always present).
    pub particle_a: ParticleId,
    /// Optional second dynamic particle; `None` for static geometry.
    pub particle_b: Option<ParticleId>,
    /// World-space contact point.
    pub point: Vec3,
    /// Unit contact normal, from A toward B or outward from static
    /// geometry.
    pub normal: Vec3,
    /// Penetration depth along the normal; never negative.
    pub penetration_depth: f32,
    /// OGC offset radius used for this contact.
    pub contact_radius: f32,
    /// Predictive offset vector computed by the OGC model.
    pub offset_geometry: Vec3,
    /// Scalar contact force magnitude; never negative.
    pub force: f32,
    /// Unit direction of the contact force (the contact normal).
    pub force_direction: Vec3,
}

impl Contact {
    /// Builds a contact from an accepted candidate.
    pub fn from_candidate(candidate: &RawCandidate, contact_radius: f32) -> Self {
        Self {
            particle_a: candidate.particle_a,
            particle_b: candidate.particle_b,
            point: candidate.point,
            normal: candidate.normal,
            penetration_depth: (-candidate.distance).max(0.0),
            contact_radius,
            offset_geometry: Vec3::ZERO,
            force: 0.0,
            force_direction: Vec3::ZERO,
        }
    }

    /// True if the contact represents actual penetration.
    pub fn is_penetrating(&self) -> bool {
        self.penetration_depth > 0.0
    }
}

/// Filters raw candidates into fresh contacts.
///
/// A candidate is accepted when its signed distance is below
/// `distance_threshold`. Candidates referencing a particle index
/// outside `particle_count` come from a less-trusted boundary and are
/// dropped rather than propagated.
pub fn collect_contacts(
    candidates: &[RawCandidate],
    particle_count: usize,
    distance_threshold: f32,
    contact_radius: f32,
) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for candidate in candidates {
        if candidate.particle_a.index() >= particle_count {
            continue;
        }
        if let Some(b) = candidate.particle_b {
            if b.index() >= particle_count {
                continue;
            }
        }
        if candidate.distance < distance_threshold {
            contacts.push(Contact::from_candidate(candidate, contact_radius));
        }
    }

    contacts
}
