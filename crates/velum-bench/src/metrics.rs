//! Benchmark metrics collection and CSV export.

use serde::{Deserialize, Serialize};

/// Metrics collected from one scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Steps simulated.
    pub timesteps: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average per-step wall time (seconds).
    pub avg_step_time: f64,
    /// Fastest step (seconds).
    pub min_step_time: f64,
    /// Slowest step (seconds).
    pub max_step_time: f64,
    /// Kinetic energy at the final step (joules).
    pub final_kinetic_energy: f64,
    /// Largest particle displacement from the rest grid (meters).
    pub max_displacement: f32,
    /// Contacts resolved across the whole run.
    pub total_contacts: u64,
    /// Deepest penetration observed (meters).
    pub max_penetration: f32,
}

impl ScenarioMetrics {
    /// CSV header matching [`to_csv_row`](Self::to_csv_row).
    pub fn csv_header() -> &'static str {
        "scenario,timesteps,total_wall_time,avg_step_time,min_step_time,max_step_time,\
         final_kinetic_energy,max_displacement,total_contacts,max_penetration"
    }

    /// One CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{:.6},{:.6},{:.6},{:.6},{:.6e},{:.4},{},{:.4}",
            self.scenario,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time,
            self.min_step_time,
            self.max_step_time,
            self.final_kinetic_energy,
            self.max_displacement,
            self.total_contacts,
            self.max_penetration,
        )
    }

    /// Renders a full CSV document for a set of runs.
    pub fn to_csv(all: &[ScenarioMetrics]) -> String {
        let mut out = String::from(Self::csv_header());
        out.push('\n');
        for metrics in all {
            out.push_str(&metrics.to_csv_row());
            out.push('\n');
        }
        out
    }
}
