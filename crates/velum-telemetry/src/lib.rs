//! # velum-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (step timing, relaxation passes, contact resolution) that can be
//! consumed by pluggable sinks (test buffers, `tracing` output, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::EventSink;
