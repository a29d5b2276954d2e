//! Simulation event types.
//!
//! Structured events emitted by the engine at fixed points in each
//! timestep. Events are lightweight value types that carry just enough
//! data to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Simulation step number (0-indexed).
    pub step: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Simulation step started.
    StepBegin {
        /// Timestep size (seconds).
        dt: f32,
    },

    /// Simulation step completed.
    StepEnd {
        /// Wall-clock time for the entire step (seconds).
        wall_time: f64,
    },

    /// Constraint relaxation finished for the step.
    ConstraintRelaxation {
        /// Number of Gauss-Seidel passes performed.
        iterations: u32,
        /// Number of constraints visited per pass.
        constraint_count: u32,
    },

    /// Contact resolution finished for the step.
    ContactResolution {
        /// Number of contacts resolved this step.
        contact_count: u32,
        /// Maximum penetration depth among them (meters).
        max_penetration: f32,
        /// Sum of scalar contact force magnitudes (newtons).
        total_force: f32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u32, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
