//! Scenario runner — executes a scenario and collects metrics.

use std::time::Instant;

use velum_math::Vec3;
use velum_types::VelumResult;

use crate::metrics::ScenarioMetrics;
use crate::scenarios::Scenario;

/// Runs benchmark scenarios and collects metrics.
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Run a single scenario to completion.
    pub fn run(scenario: &Scenario) -> VelumResult<ScenarioMetrics> {
        let mut sim = scenario.build_simulation()?;

        let initial: Vec<Vec3> = sim.particles().iter().map(|p| p.position()).collect();

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut total_contacts: u64 = 0;
        let mut max_penetration = 0.0f32;

        let total_start = Instant::now();

        for _ in 0..scenario.timesteps {
            let result = sim.update(scenario.dt)?;
            step_times.push(result.wall_time);
            total_contacts += u64::from(result.contact_count);
            max_penetration = max_penetration.max(result.max_penetration);
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        // Kinetic energy from the implicit per-step velocity
        let inv_dt = 1.0 / scenario.dt as f64;
        let final_kinetic_energy: f64 = sim
            .particles()
            .iter()
            .filter(|p| !p.is_fixed())
            .map(|p| {
                let v = p.velocity().length() as f64 * inv_dt;
                0.5 * p.mass() as f64 * v * v
            })
            .sum();

        let max_displacement = sim
            .particles()
            .iter()
            .zip(&initial)
            .map(|(p, &start)| (p.position() - start).length())
            .fold(0.0f32, f32::max);

        let avg_step_time = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step_time = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step_time = step_times.iter().copied().fold(0.0, f64::max);

        Ok(ScenarioMetrics {
            scenario: scenario.kind.name().to_string(),
            timesteps: scenario.timesteps,
            total_wall_time,
            avg_step_time,
            min_step_time,
            max_step_time,
            final_kinetic_energy,
            max_displacement,
            total_contacts,
            max_penetration,
        })
    }
}
