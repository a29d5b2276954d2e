//! CLI command implementations.

use velum_bench::metrics::ScenarioMetrics;
use velum_bench::runner::ScenarioRunner;
use velum_bench::scenarios::{Scenario, ScenarioKind};
use velum_sim::SimulationConfig;
use velum_telemetry::sinks::TracingSink;

fn parse_kind(name: &str) -> Result<ScenarioKind, Box<dyn std::error::Error>> {
    match name {
        "hanging_cloth" => Ok(ScenarioKind::HangingCloth),
        "cylinder_drape" => Ok(ScenarioKind::CylinderDrape),
        "windy_flag" => Ok(ScenarioKind::WindyFlag),
        other => {
            eprintln!("Unknown scenario: {other}");
            eprintln!("Available: hanging_cloth, cylinder_drape, windy_flag");
            Err("Unknown scenario".into())
        }
    }
}

/// Run one scenario, printing per-interval progress.
pub fn simulate(
    scenario_name: &str,
    steps: Option<u32>,
    config_path: Option<&str>,
    trace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = parse_kind(scenario_name)?;
    let mut scenario = Scenario::from_kind(kind);

    if let Some(path) = config_path {
        let config = SimulationConfig::from_json_file(path)?;
        scenario = scenario.with_config(config);
        println!("Config: {path}");
    }
    if let Some(steps) = steps {
        scenario.timesteps = steps;
    }

    println!("Velum Simulation");
    println!("────────────────");
    println!(
        "Scenario: {} ({}x{} particles, {} steps at dt={:.4}s)",
        kind.name(),
        scenario.width,
        scenario.height,
        scenario.timesteps,
        scenario.dt,
    );
    println!();

    let mut sim = scenario.build_simulation()?;
    if trace {
        sim.telemetry_mut()
            .add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));
    }

    // Progress every simulated second
    let report_every = (1.0 / scenario.dt).round() as u32;
    for step in 0..scenario.timesteps {
        let result = sim.update(scenario.dt)?;
        if (step + 1) % report_every.max(1) == 0 {
            println!(
                "  step {:>5}: {} contacts, max penetration {:.4}m, {:.2}ms",
                step + 1,
                result.contact_count,
                result.max_penetration,
                result.wall_time * 1000.0,
            );
        }
    }

    let lowest = sim
        .particles()
        .iter()
        .map(|p| p.position().y)
        .fold(f32::MAX, f32::min);
    println!();
    println!("Done. Lowest particle: y = {lowest:.3}m");
    Ok(())
}

/// Run benchmark scenarios and report metrics.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Velum Benchmark Suite");
    println!("═════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![parse_kind(scenario_name)?]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({}x{} particles, {} steps)",
            kind.name(),
            scenario.width,
            scenario.height,
            scenario.timesteps,
        );

        let metrics = ScenarioRunner::run(&scenario)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:       {:.3}s", metrics.total_wall_time);
        println!("  Avg step:        {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:        {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:    {:.4}m", metrics.max_displacement);
        println!("  Total contacts:  {}", metrics.total_contacts);
        println!("  Max penetration: {:.4}m", metrics.max_penetration);
        println!();

        all_metrics.push(metrics);
    }

    let csv = ScenarioMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        print!("{csv}");
    }

    Ok(())
}
