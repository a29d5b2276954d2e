//! Simulation configuration.
//!
//! Parameters that control constraint stiffness, relaxation iteration
//! count, velocity damping, and the contact model.

use std::path::Path;

use serde::{Deserialize, Serialize};
use velum_types::{constants, VelumError, VelumResult};

/// Configuration for a cloth simulation instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Wind vector [wx, wy, wz]. Zero disables the aerodynamic force.
    pub wind: [f32; 3],

    /// Velocity damping factor applied after integration
    /// (1.0 = no damping; 0.99 removes 1% of velocity per step).
    pub damping: f32,

    /// Stiffness of structural (axis-aligned) constraints.
    pub structural_stiffness: f32,

    /// Stiffness of shear (diagonal) constraints.
    pub shear_stiffness: f32,

    /// Stiffness of bending (two-hop) constraints.
    pub bending_stiffness: f32,

    /// Constraint damping constant. Stored on every generated constraint
    /// but unused by the positional solver.
    pub constraint_damping: f32,

    /// Number of Gauss-Seidel passes per timestep.
    pub constraint_iterations: u32,

    /// Contact model parameters.
    pub contact: ContactConfig,
}

/// Parameters of the OGC contact model and candidate acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// OGC offset radius (meters): how far ahead of exact touching the
    /// model predicts contact.
    pub contact_radius: f32,

    /// Contact spring stiffness.
    pub stiffness: f32,

    /// Contact damping against normal velocity.
    pub damping: f32,

    /// Fraction of the penetration corrected positionally each step.
    pub position_correction_factor: f32,

    /// Signed-distance threshold below which a raw candidate is
    /// accepted as a contact.
    pub distance_threshold: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -constants::GRAVITY, 0.0],
            wind: [0.0, 0.0, 0.0],
            damping: 0.99,
            structural_stiffness: 1000.0,
            shear_stiffness: 500.0,
            bending_stiffness: 200.0,
            constraint_damping: 10.0,
            constraint_iterations: constants::DEFAULT_CONSTRAINT_ITERATIONS,
            contact: ContactConfig::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            contact_radius: constants::DEFAULT_CONTACT_RADIUS,
            stiffness: 1000.0,
            damping: 50.0,
            position_correction_factor: 0.8,
            distance_threshold: constants::DEFAULT_CONTACT_DISTANCE_THRESHOLD,
        }
    }
}

impl SimulationConfig {
    /// Creates a config with more relaxation passes for stiffer,
    /// less stretchy cloth at higher cost.
    pub fn high_quality() -> Self {
        Self {
            constraint_iterations: 8,
            ..Default::default()
        }
    }

    /// Loads a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> VelumResult<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| VelumError::Serialization(e.to_string()))
    }

    /// Serializes the config to pretty-printed JSON.
    pub fn to_json(&self) -> VelumResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| VelumError::Serialization(e.to_string()))
    }
}
