//! Velum CLI — run and benchmark cloth simulations.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "velum")]
#[command(version, about = "Velum — particle cloth simulation engine with offset geometric contacts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one scenario and print step telemetry.
    Simulate {
        /// Which scenario to run (hanging_cloth, cylinder_drape, windy_flag).
        #[arg(short, long, default_value = "hanging_cloth")]
        scenario: String,

        /// Number of steps; defaults to the scenario's own length.
        #[arg(long)]
        steps: Option<u32>,

        /// Path to a JSON config overriding the scenario defaults.
        #[arg(short, long)]
        config: Option<String>,

        /// Emit per-step telemetry events through `tracing`.
        #[arg(long)]
        trace: bool,
    },

    /// Run benchmark scenarios and report metrics.
    Benchmark {
        /// Which scenario to run (hanging_cloth, cylinder_drape, windy_flag, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            scenario,
            steps,
            config,
            trace,
        } => commands::simulate(&scenario, steps, config.as_deref(), trace),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
