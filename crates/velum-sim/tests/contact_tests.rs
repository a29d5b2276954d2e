//! Integration tests for the OGC contact model and candidate filtering.

use velum_math::Vec3;
use velum_sim::backend::RawCandidate;
use velum_sim::contact::{collect_contacts, Contact};
use velum_sim::ogc::OgcContactModel;
use velum_sim::Particle;
use velum_types::ParticleId;

fn static_candidate(index: u32, distance: f32) -> RawCandidate {
    RawCandidate {
        particle_a: ParticleId(index),
        particle_b: None,
        point: Vec3::ZERO,
        normal: Vec3::Y,
        distance,
    }
}

// ─── Candidate Filtering ──────────────────────────────────────

#[test]
fn acceptance_threshold_is_applied() {
    let candidates = vec![
        static_candidate(0, -0.05), // penetrating — accepted
        static_candidate(1, 0.05),  // near — accepted
        static_candidate(2, 0.15),  // too far — dropped
    ];
    let contacts = collect_contacts(&candidates, 3, 0.1, 0.05);
    assert_eq!(contacts.len(), 2);
    assert!((contacts[0].penetration_depth - 0.05).abs() < 1e-6);
    assert_eq!(contacts[1].penetration_depth, 0.0);
}

#[test]
fn out_of_range_candidates_are_dropped() {
    let candidates = vec![
        static_candidate(7, -0.05), // particle index past the array
        RawCandidate {
            particle_a: ParticleId(0),
            particle_b: Some(ParticleId(9)), // second index past the array
            point: Vec3::ZERO,
            normal: Vec3::Y,
            distance: -0.05,
        },
        static_candidate(1, -0.05), // valid
    ];
    let contacts = collect_contacts(&candidates, 4, 0.1, 0.05);
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].particle_a, ParticleId(1));
}

#[test]
fn penetration_depth_is_never_negative() {
    let contact = Contact::from_candidate(&static_candidate(0, 0.08), 0.05);
    assert_eq!(contact.penetration_depth, 0.0);
    assert!(!contact.is_penetrating());

    let contact = Contact::from_candidate(&static_candidate(0, -0.03), 0.05);
    assert!((contact.penetration_depth - 0.03).abs() < 1e-6);
    assert!(contact.is_penetrating());
}

// ─── Force Law ────────────────────────────────────────────────

#[test]
fn static_contact_force_matches_spring_law() {
    // One particle at rest on a static contact directly below:
    // penetration 0.05, stiffness 1000, damping 50, zero velocity.
    let mut particles = vec![Particle::new(Vec3::ZERO, 0.1)];
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let mut contacts =
        collect_contacts(&[static_candidate(0, -0.05)], 1, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    // offset = radius·n + 0.5·pen·n → |offset| = 0.075
    let offset = contacts[0].offset_geometry;
    assert!((offset.length() - 0.075).abs() < 1e-6);

    // force = stiffness · (pen + |offset|) = 1000 · 0.125
    assert!((contacts[0].force - 125.0).abs() < 1e-3);
    assert_eq!(contacts[0].force_direction, Vec3::Y);
}

#[test]
fn contact_force_is_never_negative() {
    let mut particles = vec![Particle::new(Vec3::ZERO, 0.1)];
    // Separating fast: large positive normal velocity
    particles[0].set_velocity(Vec3::new(0.0, 10.0, 0.0));
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let mut contacts =
        collect_contacts(&[static_candidate(0, -0.01)], 1, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    // spring = 1000·(0.01 + 0.055) = 65; damping = 50·10 = 500 → clamped
    assert_eq!(contacts[0].force, 0.0);
}

#[test]
fn approaching_contact_is_damped_before_touching() {
    // Inside the offset radius but not yet penetrating: the spring term
    // is zero, but approach velocity still produces a braking force.
    let mut particles = vec![Particle::new(Vec3::ZERO, 0.1)];
    particles[0].set_velocity(Vec3::new(0.0, -0.1, 0.0));
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let mut contacts =
        collect_contacts(&[static_candidate(0, 0.02)], 1, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    // force = max(0, 0 − 50·(−0.1)) = 5
    assert!((contacts[0].force - 5.0).abs() < 1e-4);
    // Non-penetrating contact: no position correction
    assert_eq!(particles[0].position(), Vec3::ZERO);
    // But the braking force is queued for the next step
    assert!((particles[0].accumulated_force().y - 5.0).abs() < 1e-4);
}

#[test]
fn offset_grows_with_penetration() {
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let shallow = Contact::from_candidate(&static_candidate(0, -0.01), 0.05);
    let deep = Contact::from_candidate(&static_candidate(0, -0.1), 0.05);

    let offset_shallow = model.offset_geometry(&shallow).length();
    let offset_deep = model.offset_geometry(&deep).length();

    assert!((offset_shallow - 0.055).abs() < 1e-6);
    assert!((offset_deep - 0.1).abs() < 1e-6);
}

// ─── Force Application ────────────────────────────────────────

#[test]
fn dynamic_pair_gets_equal_and_opposite_forces() {
    let mut particles = vec![
        Particle::new(Vec3::ZERO, 0.1),
        Particle::new(Vec3::new(0.0, 0.1, 0.0), 0.1),
    ];
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let candidate = RawCandidate {
        particle_a: ParticleId(0),
        particle_b: Some(ParticleId(1)),
        point: Vec3::new(0.0, 0.05, 0.0),
        normal: Vec3::Y,
        distance: -0.02,
    };
    let mut contacts = collect_contacts(&[candidate], 2, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    let force_a = particles[0].accumulated_force();
    let force_b = particles[1].accumulated_force();
    assert_eq!(force_a, -force_b);
    assert!(force_a.y > 0.0);
}

#[test]
fn static_contact_applies_no_reaction_force() {
    let mut particles = vec![Particle::new(Vec3::ZERO, 0.1)];
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let mut contacts =
        collect_contacts(&[static_candidate(0, -0.02)], 1, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    assert!(particles[0].accumulated_force().y > 0.0);
}

// ─── Position Correction ──────────────────────────────────────

#[test]
fn static_correction_moves_the_full_amount() {
    let mut particles = vec![Particle::new(Vec3::ZERO, 0.1)];
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let mut contacts =
        collect_contacts(&[static_candidate(0, -0.05)], 1, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    // correction = pen · 0.8 · n = 0.04 upward
    assert!((particles[0].position().y - 0.04).abs() < 1e-6);
}

#[test]
fn pair_correction_splits_by_inverse_mass() {
    let start_b = Vec3::new(0.0, 0.1, 0.0);
    let mut particles = vec![
        Particle::new(Vec3::ZERO, 0.1),
        Particle::new(start_b, 0.1),
    ];
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let candidate = RawCandidate {
        particle_a: ParticleId(0),
        particle_b: Some(ParticleId(1)),
        point: Vec3::new(0.0, 0.05, 0.0),
        normal: Vec3::Y,
        distance: -0.04,
    };
    let mut contacts = collect_contacts(&[candidate], 2, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    // Equal masses: each side takes half of pen · 0.8 = 0.032
    let delta_a = particles[0].position() - Vec3::ZERO;
    let delta_b = particles[1].position() - start_b;
    assert_eq!(delta_a, -delta_b);
    assert!((delta_a.y - 0.016).abs() < 1e-6);
}

#[test]
fn fixed_particle_takes_no_correction() {
    let mut particles = vec![Particle::new(Vec3::ZERO, 0.1)];
    particles[0].set_fixed(true);
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let mut contacts =
        collect_contacts(&[static_candidate(0, -0.05)], 1, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    assert_eq!(particles[0].position(), Vec3::ZERO);
}

#[test]
fn fully_fixed_pair_takes_no_correction() {
    let start_b = Vec3::new(0.0, 0.1, 0.0);
    let mut particles = vec![
        Particle::new(Vec3::ZERO, 0.1),
        Particle::new(start_b, 0.1),
    ];
    particles[0].set_fixed(true);
    particles[1].set_fixed(true);
    let model = OgcContactModel::new(0.05, 1000.0, 50.0);

    let candidate = RawCandidate {
        particle_a: ParticleId(0),
        particle_b: Some(ParticleId(1)),
        point: Vec3::new(0.0, 0.05, 0.0),
        normal: Vec3::Y,
        distance: -0.04,
    };
    let mut contacts = collect_contacts(&[candidate], 2, 0.1, model.contact_radius());
    model.process_contacts(&mut contacts, &mut particles);

    assert_eq!(particles[0].position(), Vec3::ZERO);
    assert_eq!(particles[1].position(), start_b);
}

// ─── Model Parameters ─────────────────────────────────────────

#[test]
fn parameter_setters_roundtrip() {
    let mut model = OgcContactModel::new(0.05, 1000.0, 50.0);
    assert_eq!(model.position_correction_factor(), 0.8);

    model.set_contact_radius(0.1);
    model.set_stiffness(2000.0);
    model.set_damping(25.0);
    model.set_position_correction_factor(0.5);

    assert_eq!(model.contact_radius(), 0.1);
    assert_eq!(model.stiffness(), 2000.0);
    assert_eq!(model.damping(), 25.0);
    assert_eq!(model.position_correction_factor(), 0.5);
}

#[test]
fn contact_serialization() {
    let contact = Contact::from_candidate(&static_candidate(3, -0.01), 0.05);
    let json = serde_json::to_string(&contact).unwrap();
    let recovered: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.particle_a, ParticleId(3));
    assert!((recovered.penetration_depth - 0.01).abs() < 1e-6);
}
