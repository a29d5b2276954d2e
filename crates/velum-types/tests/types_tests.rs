//! Integration tests for velum-types.

use velum_types::{constants, ParticleId, VelumError};

#[test]
fn particle_id_roundtrip() {
    let id = ParticleId(42);
    assert_eq!(id.index(), 42);
    assert_eq!(ParticleId::from(42u32), id);
}

#[test]
fn particle_id_serialization() {
    let id = ParticleId(7);
    let json = serde_json::to_string(&id).unwrap();
    let recovered: ParticleId = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, id);
}

#[test]
fn error_display_is_descriptive() {
    let err = VelumError::InvalidConfig("width must be >= 2".into());
    assert!(err.to_string().contains("width must be >= 2"));

    let err = VelumError::ParticleOutOfRange { index: 10, count: 4 };
    let msg = err.to_string();
    assert!(msg.contains("10"));
    assert!(msg.contains('4'));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: VelumError = io.into();
    assert!(matches!(err, VelumError::Io(_)));
}

#[test]
fn defaults_are_sane() {
    assert!(constants::GRAVITY > 9.0);
    assert!(constants::DEFAULT_DT > 0.0);
    assert!(constants::DEFAULT_CONTACT_RADIUS > 0.0);
    assert!(constants::DEFAULT_CONTACT_DISTANCE_THRESHOLD > constants::DEFAULT_CONTACT_RADIUS);
}
