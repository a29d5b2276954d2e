//! Integration tests for velum-telemetry.

use velum_telemetry::bus::EventBus;
use velum_telemetry::events::{EventKind, SimulationEvent};
use velum_telemetry::sinks::VecSink;

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));

    bus.emit(SimulationEvent::new(0, EventKind::StepBegin { dt: 1.0 / 60.0 }));
    bus.emit(SimulationEvent::new(0, EventKind::StepEnd { wall_time: 0.001 }));

    bus.flush();
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(SimulationEvent::new(0, EventKind::StepBegin { dt: 0.01 }));
    // Should not panic or accumulate
    bus.flush();
}

#[test]
fn multiple_sinks() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    bus.add_sink(Box::new(VecSink::new()));
    assert_eq!(bus.sink_count(), 2);
}

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::ContactResolution {
            contact_count: 3,
            max_penetration: 0.02,
            total_force: 41.5,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.step, 5);
}

#[test]
fn relaxation_event() {
    let event = SimulationEvent::new(
        10,
        EventKind::ConstraintRelaxation {
            iterations: 3,
            constraint_count: 144,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("iterations"));
}
